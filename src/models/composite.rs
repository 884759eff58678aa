use serde::{Deserialize, Serialize};

use crate::status::BudgetStatus;

/// One SLI's contribution to a composite budget, as supplied by the caller.
/// Order is preserved in the result breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliInput {
    pub name: String,
    /// Current measured value as a fraction, e.g. 0.998 availability.
    pub current: f64,
    /// Target fraction for this SLI; must lie in (0, 1).
    pub target: f64,
    /// Caller-chosen weight; weights need not sum to 1.
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliBreakdown {
    pub name: String,
    pub current: f64,
    pub target: f64,
    pub weight: f64,
    pub consumption: f64,
    pub weighted_consumption: f64,
    pub status: BudgetStatus,
}

/// Weighted combination of several SLIs into one overall consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeResult {
    /// Saturates at 1.0 no matter how large the weighted sum is.
    pub total_consumption: f64,
    pub total_consumption_percent: f64,
    pub overall_status: BudgetStatus,
    pub sli_breakdown: Vec<SliBreakdown>,
}
