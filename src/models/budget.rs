use serde::{Deserialize, Serialize};

use crate::status::BudgetStatus;

/// Time-based error budget for an SLO window. Computed fresh on every call,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBudget {
    pub slo_name: String,
    pub slo_target: f64,
    pub window_days: u32,
    pub total_budget_minutes: f64,
    pub consumed_minutes: f64,
    /// Negative when the budget is over-spent.
    pub remaining_minutes: f64,
    pub consumption_percent: f64,
    pub status: BudgetStatus,
    /// Remaining budget expressed in days; negative signals over-budget.
    pub time_remaining_days: f64,
}

/// Request-count error budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBudget {
    pub slo_target: f64,
    pub total_requests: u64,
    pub failed_requests: u64,
    pub allowed_failures: f64,
    pub remaining_failures: f64,
    pub consumption_percent: f64,
    pub status: BudgetStatus,
    /// True when there were no requests at all, which is not the same thing
    /// as a real 0%-consumption result.
    pub no_data: bool,
}

/// Latency-excess budget for a single percentile measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyBudget {
    pub target_ms: f64,
    pub percentile: f64,
    pub current_ms: f64,
    pub window_days: u32,
    pub excess_ms: f64,
    pub consumption_percent: f64,
    pub status: BudgetStatus,
}
