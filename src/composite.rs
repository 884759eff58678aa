use crate::error::EngineError;
use crate::models::composite::{CompositeResult, SliBreakdown, SliInput};
use crate::status::classify_status;

/// Combine weighted SLI consumptions into one overall budget consumption.
///
/// Each SLI's consumption is the shortfall below its target scaled to its
/// own error budget, capped at 1.0. Weights are taken as supplied and need
/// not sum to 1; the weighted total saturates at 1.0 rather than reporting
/// more than 100% consumption.
pub fn calculate_composite(slis: &[SliInput]) -> Result<CompositeResult, EngineError> {
    if slis.is_empty() {
        return Err(EngineError::EmptyComposite);
    }

    let mut sli_breakdown = Vec::with_capacity(slis.len());
    let mut weighted_total = 0.0;

    for sli in slis {
        if !(sli.target > 0.0 && sli.target < 1.0) {
            return Err(EngineError::InvalidTarget(sli.target));
        }
        if !(sli.weight >= 0.0) {
            return Err(EngineError::NegativeWeight {
                sli: sli.name.clone(),
                weight: sli.weight,
            });
        }
        if !(sli.current >= 0.0) {
            return Err(EngineError::Negative {
                what: "sli current value",
                value: sli.current,
            });
        }

        let consumption = if sli.current >= sli.target {
            0.0
        } else {
            ((sli.target - sli.current) / (1.0 - sli.target)).min(1.0)
        };
        let weighted_consumption = consumption * sli.weight;
        weighted_total += weighted_consumption;

        sli_breakdown.push(SliBreakdown {
            name: sli.name.clone(),
            current: sli.current,
            target: sli.target,
            weight: sli.weight,
            consumption,
            weighted_consumption,
            status: classify_status(consumption * 100.0),
        });
    }

    // Saturation cap: overweighted inputs never report more than 100%.
    let total_consumption = weighted_total.min(1.0);
    let total_consumption_percent = total_consumption * 100.0;

    Ok(CompositeResult {
        total_consumption,
        total_consumption_percent,
        overall_status: classify_status(total_consumption_percent),
        sli_breakdown,
    })
}
