use chrono::{DateTime, Duration, Utc};

use crate::error::EngineError;
use crate::models::prediction::BudgetPrediction;

/// Extrapolate the per-hour consumption rate to decide whether the budget
/// runs out before the window closes.
///
/// The rate here is consumption-per-hour, not the window-relative multiplier
/// from [`crate::burn::calculate_burn_rate`]; the two are deliberately kept
/// as separate functions. `as_of` anchors the exhaustion timestamp so the
/// call stays a pure function of its inputs.
pub fn predict_exhaustion(
    current_consumption: f64,
    elapsed_hours: f64,
    window_hours: f64,
    as_of: DateTime<Utc>,
) -> Result<BudgetPrediction, EngineError> {
    if !(current_consumption >= 0.0 && current_consumption <= 1.0) {
        return Err(EngineError::OutOfRange {
            what: "current consumption",
            value: current_consumption,
            min: 0.0,
            max: 1.0,
        });
    }
    if !(elapsed_hours >= 0.0) {
        return Err(EngineError::Negative {
            what: "elapsed hours",
            value: elapsed_hours,
        });
    }
    if !(window_hours > 0.0) {
        return Err(EngineError::InvalidWindow(window_hours));
    }
    if elapsed_hours > window_hours {
        return Err(EngineError::ElapsedExceedsWindow {
            elapsed_hours,
            window_hours,
        });
    }

    if elapsed_hours == 0.0 {
        return Ok(BudgetPrediction {
            will_exhaust: false,
            hours_until_exhaustion: None,
            exhaustion_date: None,
            current_burn_rate: 0.0,
            recommendation: "insufficient data: no elapsed time in the window yet".to_string(),
        });
    }

    let burn_rate = current_consumption / elapsed_hours;
    if burn_rate <= 0.0 {
        return Ok(BudgetPrediction {
            will_exhaust: false,
            hours_until_exhaustion: None,
            exhaustion_date: None,
            current_burn_rate: burn_rate,
            recommendation: consumption_recommendation(current_consumption),
        });
    }

    let remaining_budget = 1.0 - current_consumption;
    let hours_until_exhaustion = remaining_budget / burn_rate;
    // Boundary-inclusive: exhaustion landing exactly at window end counts.
    let will_exhaust = hours_until_exhaustion <= window_hours - elapsed_hours;

    if will_exhaust {
        let exhaustion_date =
            as_of + Duration::milliseconds((hours_until_exhaustion * 3_600_000.0) as i64);
        Ok(BudgetPrediction {
            will_exhaust: true,
            hours_until_exhaustion: Some(hours_until_exhaustion),
            exhaustion_date: Some(exhaustion_date),
            current_burn_rate: burn_rate,
            recommendation: exhaustion_recommendation(hours_until_exhaustion),
        })
    } else {
        Ok(BudgetPrediction {
            will_exhaust: false,
            hours_until_exhaustion: None,
            exhaustion_date: None,
            current_burn_rate: burn_rate,
            recommendation: consumption_recommendation(current_consumption),
        })
    }
}

fn exhaustion_recommendation(hours_until_exhaustion: f64) -> String {
    if hours_until_exhaustion < 24.0 {
        "URGENT: budget exhausts within a day; freeze non-critical releases and investigate now"
            .to_string()
    } else if hours_until_exhaustion < 72.0 {
        "budget exhausts within three days; slow the release cadence and review recent changes"
            .to_string()
    } else {
        "budget on track to exhaust inside the window; watch the burn rate closely".to_string()
    }
}

fn consumption_recommendation(current_consumption: f64) -> String {
    if current_consumption < 0.5 {
        "budget consumption is sustainable; normal release velocity is fine".to_string()
    } else if current_consumption < 0.75 {
        "over half the budget is spent; review error sources before large rollouts".to_string()
    } else {
        "budget nearly spent; restrict risky changes for the rest of the window".to_string()
    }
}
