use serde::{Deserialize, Serialize};

/// Four-band health status shared by every budget calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Healthy,
    Concerning,
    Critical,
    Exhausted,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Healthy => "healthy",
            BudgetStatus::Concerning => "concerning",
            BudgetStatus::Critical => "critical",
            BudgetStatus::Exhausted => "exhausted",
        }
    }
}

/// Classify budget consumption (in percent) into the shared status bands.
///
/// The 25/50/75 band edges live only here; every calculator and the
/// composite aggregator route through this function.
pub fn classify_status(consumption_percent: f64) -> BudgetStatus {
    if consumption_percent < 25.0 {
        BudgetStatus::Healthy
    } else if consumption_percent < 50.0 {
        BudgetStatus::Concerning
    } else if consumption_percent < 75.0 {
        BudgetStatus::Critical
    } else {
        BudgetStatus::Exhausted
    }
}
