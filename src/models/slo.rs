use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliType {
    Availability,
    Latency,
    Throughput,
    Freshness,
    Correctness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    Rolling,
    Calendar,
    RequestBased,
}

/// An SLO as supplied by the caller's config layer. The engine validates the
/// numeric invariants only; schema and file syntax belong to the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SloDefinition {
    pub name: String,
    #[serde(default = "default_sli_type")]
    pub sli_type: SliType,
    /// Target as a fraction, e.g. 0.999 for "three nines".
    pub target: f64,
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_window_type")]
    pub window_type: WindowType,
}

impl SloDefinition {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.target > 0.0 && self.target < 1.0) {
            return Err(EngineError::InvalidTarget(self.target));
        }
        if self.window_days == 0 {
            return Err(EngineError::InvalidWindow(0.0));
        }
        Ok(())
    }

    pub fn window_hours(&self) -> f64 {
        self.window_days as f64 * 24.0
    }

    pub fn window_minutes(&self) -> f64 {
        self.window_days as f64 * 1440.0
    }
}

fn default_sli_type() -> SliType {
    SliType::Availability
}

fn default_window_days() -> u32 {
    30
}

fn default_window_type() -> WindowType {
    WindowType::Rolling
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let def: SloDefinition =
            serde_json::from_str(r#"{"name": "checkout-availability", "target": 0.999}"#).unwrap();
        assert_eq!(def.sli_type, SliType::Availability);
        assert_eq!(def.window_days, 30);
        assert_eq!(def.window_type, WindowType::Rolling);
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_deserialize_explicit_fields() {
        let def: SloDefinition = serde_json::from_str(
            r#"{
                "name": "api-latency",
                "sli_type": "latency",
                "target": 0.99,
                "window_days": 7,
                "window_type": "request_based"
            }"#,
        )
        .unwrap();
        assert_eq!(def.sli_type, SliType::Latency);
        assert_eq!(def.window_type, WindowType::RequestBased);
        assert_eq!(def.window_hours(), 168.0);
        assert_eq!(def.window_minutes(), 10080.0);
    }

    #[test]
    fn test_validate_rejects_bad_target() {
        for target in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let def = SloDefinition {
                name: "bad".to_string(),
                sli_type: SliType::Availability,
                target,
                window_days: 30,
                window_type: WindowType::Rolling,
            };
            assert!(def.validate().is_err(), "target {target} should be rejected");
        }
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let def = SloDefinition {
            name: "bad".to_string(),
            sli_type: SliType::Availability,
            target: 0.999,
            window_days: 0,
            window_type: WindowType::Rolling,
        };
        assert_eq!(def.validate(), Err(EngineError::InvalidWindow(0.0)));
    }
}
