use crate::error::EngineError;
use crate::models::alert::{AlertLevel, BurnRateAlert};

// ═══════════════════════════════════════════════════════════════════
// Multi-window burn-rate policy (Google SRE workbook thresholds)
// ═══════════════════════════════════════════════════════════════════

/// Upper bound of the fast bucket; windows at or under this use the 1h rules.
const FAST_WINDOW_MAX_HOURS: f64 = 1.5;
/// Upper bound of the medium bucket; windows at or under this use the 6h rules.
const MEDIUM_WINDOW_MAX_HOURS: f64 = 8.0;

const FAST_BURN_THRESHOLD: f64 = 14.4;
const MEDIUM_BURN_THRESHOLD: f64 = 6.0;
const SLOW_BURN_THRESHOLD: f64 = 3.0;
const SLOW_INFO_THRESHOLD: f64 = 1.5;

/// Window-relative burn rate: observed consumption divided by the consumption
/// expected at this point in the window. 1.0 lands the budget at exactly zero
/// when the window closes; above 1.0 is unsustainable.
pub fn calculate_burn_rate(
    consumed_fraction: f64,
    elapsed_hours: f64,
    window_hours: f64,
) -> Result<f64, EngineError> {
    if !(consumed_fraction >= 0.0) {
        return Err(EngineError::Negative {
            what: "consumed budget fraction",
            value: consumed_fraction,
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

    if elapsed_hours == 0.0 {
        return Ok(0.0);
    }
    let expected_consumption = elapsed_hours / window_hours;
    if expected_consumption == 0.0 {
        return Ok(0.0);
    }
    Ok(consumed_fraction / expected_consumption)
}

/// Evaluate the burn rate against the one window bucket matching
/// `window_hours` and return at most one alert.
///
/// Only the matching bucket is checked per call; a caller wanting the full
/// multi-window treatment invokes this once per window. Cross-checking all
/// three buckets from a single call is deliberately not done here.
pub fn generate_burn_rate_alerts(
    burn_rate: f64,
    window_hours: f64,
) -> Result<Vec<BurnRateAlert>, EngineError> {
    if !(burn_rate >= 0.0) {
        return Err(EngineError::Negative {
            what: "burn rate",
            value: burn_rate,
        });
    }
    if !(window_hours > 0.0) {
        return Err(EngineError::InvalidWindow(window_hours));
    }

    let mut alerts = Vec::new();

    if window_hours <= FAST_WINDOW_MAX_HOURS {
        if burn_rate > FAST_BURN_THRESHOLD {
            alerts.push(make_alert(
                AlertLevel::Critical,
                burn_rate,
                "1h",
                FAST_BURN_THRESHOLD,
                true,
                "fast burn",
            ));
        }
    } else if window_hours <= MEDIUM_WINDOW_MAX_HOURS {
        if burn_rate > MEDIUM_BURN_THRESHOLD {
            alerts.push(make_alert(
                AlertLevel::High,
                burn_rate,
                "6h",
                MEDIUM_BURN_THRESHOLD,
                true,
                "medium burn",
            ));
        }
    } else if burn_rate > SLOW_BURN_THRESHOLD {
        alerts.push(make_alert(
            AlertLevel::Elevated,
            burn_rate,
            "24h",
            SLOW_BURN_THRESHOLD,
            false,
            "slow burn",
        ));
    } else if burn_rate > SLOW_INFO_THRESHOLD {
        alerts.push(make_alert(
            AlertLevel::Normal,
            burn_rate,
            "24h",
            SLOW_INFO_THRESHOLD,
            false,
            "elevated consumption",
        ));
    }

    Ok(alerts)
}

fn make_alert(
    level: AlertLevel,
    burn_rate: f64,
    window: &str,
    threshold: f64,
    should_page: bool,
    kind: &str,
) -> BurnRateAlert {
    BurnRateAlert {
        level,
        burn_rate,
        window: window.to_string(),
        threshold,
        message: format!("{kind}: {burn_rate:.2}x over the {window} window (threshold {threshold}x)"),
        should_page,
        runbook_url: None,
    }
}
