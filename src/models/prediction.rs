use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Extrapolation of the current burn rate to the end of the window.
///
/// `hours_until_exhaustion` and `exhaustion_date` are both `Some` exactly
/// when `will_exhaust` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetPrediction {
    pub will_exhaust: bool,
    pub hours_until_exhaustion: Option<f64>,
    pub exhaustion_date: Option<DateTime<Utc>>,
    /// Per-hour consumption rate (fraction of budget per hour), not the
    /// window-relative multiplier used for alerting.
    pub current_burn_rate: f64,
    pub recommendation: String,
}
