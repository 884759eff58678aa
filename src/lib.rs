pub mod budget;
pub mod burn;
pub mod composite;
pub mod error;
pub mod evaluate;
pub mod models;
pub mod predict;
pub mod status;

// Re-export the public API
pub use budget::{calculate_latency_budget, calculate_request_based_budget, calculate_time_based_budget};
pub use burn::{calculate_burn_rate, generate_burn_rate_alerts};
pub use composite::calculate_composite;
pub use error::EngineError;
pub use evaluate::{MetricsSnapshot, SloEvaluation, evaluate_slo};
pub use models::alert::{AlertLevel, BurnRateAlert};
pub use models::budget::{ErrorBudget, LatencyBudget, RequestBudget};
pub use models::composite::{CompositeResult, SliBreakdown, SliInput};
pub use models::prediction::BudgetPrediction;
pub use models::slo::{SliType, SloDefinition, WindowType};
pub use predict::predict_exhaustion;
pub use status::{BudgetStatus, classify_status};
