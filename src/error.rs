use thiserror::Error;

/// Input validation errors.
///
/// Division-by-zero guards are not errors: a zero elapsed time, a zero
/// expected consumption, or a zero total budget all produce a defined `0.0`
/// fallback instead of `NaN` or a failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("slo target must be within (0, 1) exclusive, got {0}")]
    InvalidTarget(f64),

    #[error("window must be positive, got {0}")]
    InvalidWindow(f64),

    #[error("{what} must be non-negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("{what} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("sli '{sli}' has negative weight {weight}")]
    NegativeWeight { sli: String, weight: f64 },

    #[error("failed requests ({failed}) exceed total requests ({total})")]
    FailedExceedsTotal { failed: u64, total: u64 },

    #[error("elapsed time {elapsed_hours}h exceeds the {window_hours}h window")]
    ElapsedExceedsWindow {
        elapsed_hours: f64,
        window_hours: f64,
    },

    #[error("composite calculation requires at least one sli")]
    EmptyComposite,
}
