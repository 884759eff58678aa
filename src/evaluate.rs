use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::budget::calculate_time_based_budget;
use crate::burn::{calculate_burn_rate, generate_burn_rate_alerts};
use crate::error::EngineError;
use crate::models::alert::BurnRateAlert;
use crate::models::budget::ErrorBudget;
use crate::models::prediction::BudgetPrediction;
use crate::models::slo::SloDefinition;
use crate::predict::predict_exhaustion;
use crate::status::BudgetStatus;

/// One observed snapshot of service health, as handed over by the metrics
/// source. The engine never queries anything itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Measured availability over the window so far, as a fraction.
    pub current_availability: Option<f64>,
    /// Hours elapsed since the window opened.
    pub elapsed_hours: f64,
}

/// Full evaluation of one SLO against one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SloEvaluation {
    pub slo_name: String,
    pub budget: ErrorBudget,
    /// Window-relative burn rate over the SLO window.
    pub burn_rate: f64,
    pub alerts: Vec<BurnRateAlert>,
    pub prediction: BudgetPrediction,
}

/// Run the whole pipeline for one SLO and one snapshot: budget, burn rate,
/// alerts for the SLO window bucket, and exhaustion prediction. Each stage is
/// also callable on its own.
pub fn evaluate_slo(
    def: &SloDefinition,
    snapshot: &MetricsSnapshot,
    as_of: DateTime<Utc>,
) -> Result<SloEvaluation, EngineError> {
    def.validate()?;

    let budget =
        calculate_time_based_budget(&def.name, def.target, def.window_days, snapshot.current_availability)?;

    let window_hours = def.window_hours();
    let consumed_fraction = budget.consumption_percent / 100.0;
    let burn_rate = calculate_burn_rate(consumed_fraction, snapshot.elapsed_hours, window_hours)?;
    let alerts = generate_burn_rate_alerts(burn_rate, window_hours)?;

    // An over-spent budget is full exhaustion as far as prediction goes.
    let prediction = predict_exhaustion(
        consumed_fraction.min(1.0),
        snapshot.elapsed_hours,
        window_hours,
        as_of,
    )?;

    if budget.status == BudgetStatus::Exhausted {
        tracing::warn!(
            "slo '{}': error budget exhausted ({:.1}% consumed, burn rate {:.2}x)",
            def.name,
            budget.consumption_percent,
            burn_rate,
        );
    } else {
        tracing::debug!(
            "slo '{}': status={} consumption={:.1}% burn_rate={:.2}x",
            def.name,
            budget.status.as_str(),
            budget.consumption_percent,
            burn_rate,
        );
    }

    Ok(SloEvaluation {
        slo_name: def.name.clone(),
        budget,
        burn_rate,
        alerts,
        prediction,
    })
}
