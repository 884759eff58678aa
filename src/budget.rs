use crate::error::EngineError;
use crate::models::budget::{ErrorBudget, LatencyBudget, RequestBudget};
use crate::status::{BudgetStatus, classify_status};

const MINUTES_PER_DAY: f64 = 1440.0;

/// Fraction of the latency target by which an overshoot exhausts the whole
/// budget: running 50% over target spends 100% of it. Policy choice, not a
/// physical law.
const LATENCY_EXHAUST_FRACTION: f64 = 0.5;

fn check_target(target: f64) -> Result<(), EngineError> {
    // The negated comparison also rejects NaN.
    if !(target > 0.0 && target < 1.0) {
        return Err(EngineError::InvalidTarget(target));
    }
    Ok(())
}

/// Compute a time-based error budget: how many minutes of badness the window
/// allows, and how many are already spent at the observed availability.
pub fn calculate_time_based_budget(
    slo_name: &str,
    target: f64,
    window_days: u32,
    current_availability: Option<f64>,
) -> Result<ErrorBudget, EngineError> {
    check_target(target)?;
    if window_days == 0 {
        return Err(EngineError::InvalidWindow(0.0));
    }
    if let Some(avail) = current_availability {
        if !(avail >= 0.0 && avail <= 1.0) {
            return Err(EngineError::OutOfRange {
                what: "current availability",
                value: avail,
                min: 0.0,
                max: 1.0,
            });
        }
    }

    let window_minutes = window_days as f64 * MINUTES_PER_DAY;
    let total_budget_minutes = window_minutes * (1.0 - target);

    // An availability above target has consumed nothing; at or below target
    // the shortfall is charged against the budget.
    let consumed_minutes = match current_availability {
        Some(avail) if avail <= target => window_minutes * (1.0 - avail),
        _ => 0.0,
    };

    // 0/0 is defined as 0 so an all-budget-is-zero window reads as healthy.
    let consumption_percent = if total_budget_minutes > 0.0 {
        consumed_minutes / total_budget_minutes * 100.0
    } else {
        0.0
    };

    let remaining_minutes = total_budget_minutes - consumed_minutes;

    Ok(ErrorBudget {
        slo_name: slo_name.to_string(),
        slo_target: target,
        window_days,
        total_budget_minutes,
        consumed_minutes,
        remaining_minutes,
        consumption_percent,
        status: classify_status(consumption_percent),
        time_remaining_days: remaining_minutes / MINUTES_PER_DAY,
    })
}

/// Compute a request-count error budget: how many failures the target allows
/// out of the observed request volume.
pub fn calculate_request_based_budget(
    target: f64,
    total_requests: u64,
    failed_requests: u64,
) -> Result<RequestBudget, EngineError> {
    check_target(target)?;
    if failed_requests > total_requests {
        return Err(EngineError::FailedExceedsTotal {
            failed: failed_requests,
            total: total_requests,
        });
    }

    // No traffic at all is a distinct no-data outcome, not a 0% consumption.
    if total_requests == 0 {
        return Ok(RequestBudget {
            slo_target: target,
            total_requests: 0,
            failed_requests: 0,
            allowed_failures: 0.0,
            remaining_failures: 0.0,
            consumption_percent: 0.0,
            status: BudgetStatus::Healthy,
            no_data: true,
        });
    }

    let allowed_failures = total_requests as f64 * (1.0 - target);
    let consumption_percent = if allowed_failures > 0.0 {
        failed_requests as f64 / allowed_failures * 100.0
    } else {
        0.0
    };
    let remaining_failures = (allowed_failures - failed_requests as f64).max(0.0);

    Ok(RequestBudget {
        slo_target: target,
        total_requests,
        failed_requests,
        allowed_failures,
        remaining_failures,
        consumption_percent,
        status: classify_status(consumption_percent),
        no_data: false,
    })
}

/// Compute a latency-excess budget for one percentile measurement. Overshoot
/// is scored against `LATENCY_EXHAUST_FRACTION` of the target and capped at
/// 100% consumption.
pub fn calculate_latency_budget(
    target_ms: f64,
    percentile: f64,
    current_ms: f64,
    window_days: u32,
) -> Result<LatencyBudget, EngineError> {
    if !(target_ms > 0.0) {
        return Err(EngineError::NonPositive {
            what: "latency target (ms)",
            value: target_ms,
        });
    }
    if !(current_ms >= 0.0) {
        return Err(EngineError::Negative {
            what: "current latency (ms)",
            value: current_ms,
        });
    }
    if !(percentile > 0.0 && percentile <= 100.0) {
        return Err(EngineError::OutOfRange {
            what: "percentile",
            value: percentile,
            min: 0.0,
            max: 100.0,
        });
    }
    if window_days == 0 {
        return Err(EngineError::InvalidWindow(0.0));
    }

    let (excess_ms, consumption_percent) = if current_ms <= target_ms {
        (0.0, 0.0)
    } else {
        let excess = current_ms - target_ms;
        let percent = (excess / (target_ms * LATENCY_EXHAUST_FRACTION) * 100.0).min(100.0);
        (excess, percent)
    };

    Ok(LatencyBudget {
        target_ms,
        percentile,
        current_ms,
        window_days,
        excess_ms,
        consumption_percent,
        status: classify_status(consumption_percent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
        assert!(
            (actual - expected).abs() < epsilon,
            "expected {expected}, got {actual} (diff: {})",
            (actual - expected).abs()
        );
    }

    #[test]
    fn test_three_nines_thirty_days() {
        let budget = calculate_time_based_budget("api", 0.999, 30, None).unwrap();
        assert_approx(budget.total_budget_minutes, 43.2, 0.001);
        assert_eq!(budget.consumed_minutes, 0.0);
        assert_eq!(budget.consumption_percent, 0.0);
        assert_eq!(budget.status, BudgetStatus::Healthy);
        assert_approx(budget.time_remaining_days, 43.2 / 1440.0, 1e-9);
    }

    #[test]
    fn test_over_budget_goes_negative() {
        let budget = calculate_time_based_budget("api", 0.999, 30, Some(0.995)).unwrap();
        assert!(budget.consumed_minutes > budget.total_budget_minutes);
        assert!(budget.remaining_minutes < 0.0);
        assert!(budget.time_remaining_days < 0.0);
        assert_eq!(budget.status, BudgetStatus::Exhausted);
        // 0.5% downtime over 30 days is 216 minutes against a 43.2 minute budget.
        assert_approx(budget.consumed_minutes, 216.0, 0.001);
        assert_approx(budget.consumption_percent, 500.0, 0.001);
    }

    #[test]
    fn test_availability_above_target_consumes_nothing() {
        let budget = calculate_time_based_budget("api", 0.99, 30, Some(0.9999)).unwrap();
        assert_eq!(budget.consumed_minutes, 0.0);
        assert_eq!(budget.status, BudgetStatus::Healthy);
    }

    #[test]
    fn test_availability_equal_to_target_is_charged() {
        let budget = calculate_time_based_budget("api", 0.99, 30, Some(0.99)).unwrap();
        assert_approx(budget.consumption_percent, 100.0, 0.001);
        assert_eq!(budget.status, BudgetStatus::Exhausted);
        assert_approx(budget.remaining_minutes, 0.0, 1e-9);
    }

    #[test]
    fn test_total_budget_formula_holds() {
        for target in [0.9, 0.95, 0.99, 0.999, 0.9999] {
            for window_days in [1_u32, 7, 28, 30, 90] {
                let budget = calculate_time_based_budget("api", target, window_days, None).unwrap();
                let expected = window_days as f64 * 1440.0 * (1.0 - target);
                assert_approx(budget.total_budget_minutes, expected, 1e-9);
                assert!(budget.total_budget_minutes >= 0.0);
            }
        }
    }

    #[test]
    fn test_time_based_rejects_bad_input() {
        assert!(matches!(
            calculate_time_based_budget("api", 1.0, 30, None),
            Err(EngineError::InvalidTarget(_))
        ));
        assert!(matches!(
            calculate_time_based_budget("api", 0.0, 30, None),
            Err(EngineError::InvalidTarget(_))
        ));
        assert!(matches!(
            calculate_time_based_budget("api", 0.999, 0, None),
            Err(EngineError::InvalidWindow(_))
        ));
        assert!(matches!(
            calculate_time_based_budget("api", 0.999, 30, Some(1.2)),
            Err(EngineError::OutOfRange { .. })
        ));
        assert!(matches!(
            calculate_time_based_budget("api", 0.999, 30, Some(-0.1)),
            Err(EngineError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_request_budget_no_traffic_is_no_data() {
        let budget = calculate_request_based_budget(0.999, 0, 0).unwrap();
        assert!(budget.no_data);
        assert_eq!(budget.consumption_percent, 0.0);
        assert_eq!(budget.status, BudgetStatus::Healthy);
    }

    #[test]
    fn test_request_budget_basic() {
        // 1% of 100_000 requests = 1000 allowed failures.
        let budget = calculate_request_based_budget(0.99, 100_000, 250).unwrap();
        assert!(!budget.no_data);
        assert_approx(budget.allowed_failures, 1000.0, 0.001);
        assert_approx(budget.consumption_percent, 25.0, 0.001);
        assert_approx(budget.remaining_failures, 750.0, 0.001);
        assert_eq!(budget.status, BudgetStatus::Concerning);
    }

    #[test]
    fn test_request_budget_overspent_clamps_remaining() {
        let budget = calculate_request_based_budget(0.99, 10_000, 500).unwrap();
        assert_approx(budget.consumption_percent, 500.0, 0.001);
        assert_eq!(budget.remaining_failures, 0.0);
        assert_eq!(budget.status, BudgetStatus::Exhausted);
    }

    #[test]
    fn test_request_budget_rejects_failed_over_total() {
        assert!(matches!(
            calculate_request_based_budget(0.99, 10, 11),
            Err(EngineError::FailedExceedsTotal {
                failed: 11,
                total: 10
            })
        ));
    }

    #[test]
    fn test_latency_at_or_below_target_is_healthy() {
        let budget = calculate_latency_budget(200.0, 95.0, 180.0, 30).unwrap();
        assert_eq!(budget.excess_ms, 0.0);
        assert_eq!(budget.consumption_percent, 0.0);
        assert_eq!(budget.status, BudgetStatus::Healthy);

        let at_target = calculate_latency_budget(200.0, 95.0, 200.0, 30).unwrap();
        assert_eq!(at_target.consumption_percent, 0.0);
    }

    #[test]
    fn test_latency_overshoot_scales_against_half_target() {
        // 50 ms over a 200 ms target: 50 / 100 = 50% of the budget.
        let budget = calculate_latency_budget(200.0, 99.0, 250.0, 30).unwrap();
        assert_approx(budget.excess_ms, 50.0, 0.001);
        assert_approx(budget.consumption_percent, 50.0, 0.001);
        assert_eq!(budget.status, BudgetStatus::Critical);
    }

    #[test]
    fn test_latency_overshoot_caps_at_hundred_percent() {
        let budget = calculate_latency_budget(200.0, 99.0, 1000.0, 30).unwrap();
        assert_eq!(budget.consumption_percent, 100.0);
        assert_eq!(budget.status, BudgetStatus::Exhausted);
    }

    #[test]
    fn test_latency_rejects_bad_input() {
        assert!(matches!(
            calculate_latency_budget(0.0, 95.0, 100.0, 30),
            Err(EngineError::NonPositive { .. })
        ));
        assert!(matches!(
            calculate_latency_budget(200.0, 95.0, -1.0, 30),
            Err(EngineError::Negative { .. })
        ));
        assert!(matches!(
            calculate_latency_budget(200.0, 0.0, 100.0, 30),
            Err(EngineError::OutOfRange { .. })
        ));
        assert!(matches!(
            calculate_latency_budget(200.0, 101.0, 100.0, 30),
            Err(EngineError::OutOfRange { .. })
        ));
        assert!(matches!(
            calculate_latency_budget(200.0, 95.0, 100.0, 0),
            Err(EngineError::InvalidWindow(_))
        ));
    }
}
