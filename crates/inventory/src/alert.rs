//! Alert tier classification.
//!
//! Two classifiers on purpose: the per-transaction preview flags `low` at
//! 20% remaining while the standalone sweep flags it below 25%. The
//! asymmetry is inherited business policy, not a defect to unify.

use serde::{Deserialize, Serialize};

/// Qualitative alert bucket derived from remaining-capacity percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Ok,
    Low,
    Critical,
    Insufficient,
}

/// Transaction-path cutoff: at or below this percentage stock is `critical`.
pub const TRANSACTION_CRITICAL_PCT: f64 = 10.0;
/// Transaction-path cutoff: at or below this percentage stock is `low`.
pub const TRANSACTION_LOW_PCT: f64 = 20.0;
/// Sweep cutoff: strictly below this percentage stock is `critical`.
pub const SWEEP_CRITICAL_PCT: f64 = 10.0;
/// Sweep cutoff: strictly below this percentage stock is `low`.
pub const SWEEP_LOW_PCT: f64 = 25.0;

impl AlertLevel {
    /// Classify a previewed (or just-applied) deduction.
    ///
    /// A negative remaining amount is advisory `insufficient`, not an error:
    /// the preview path reports it and lets the caller decide.
    pub fn for_transaction(remaining_amount: f64, percentage_remaining: f64) -> Self {
        if remaining_amount < 0.0 {
            AlertLevel::Insufficient
        } else if percentage_remaining <= TRANSACTION_CRITICAL_PCT {
            AlertLevel::Critical
        } else if percentage_remaining <= TRANSACTION_LOW_PCT {
            AlertLevel::Low
        } else {
            AlertLevel::Ok
        }
    }

    /// Classify a record for the standalone low-stock sweep, relative to its
    /// operator-configured threshold.
    pub fn for_sweep(stock_percentage: f64) -> Self {
        if stock_percentage < SWEEP_CRITICAL_PCT {
            AlertLevel::Critical
        } else if stock_percentage < SWEEP_LOW_PCT {
            AlertLevel::Low
        } else {
            AlertLevel::Ok
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_remaining_is_insufficient_regardless_of_percentage() {
        assert_eq!(AlertLevel::for_transaction(-1.0, 95.0), AlertLevel::Insufficient);
        assert_eq!(AlertLevel::for_transaction(-0.5, 0.0), AlertLevel::Insufficient);
    }

    #[test]
    fn transaction_boundaries_are_inclusive() {
        assert_eq!(AlertLevel::for_transaction(10.0, 10.0), AlertLevel::Critical);
        assert_eq!(AlertLevel::for_transaction(10.0, 10.1), AlertLevel::Low);
        assert_eq!(AlertLevel::for_transaction(20.0, 20.0), AlertLevel::Low);
        assert_eq!(AlertLevel::for_transaction(20.0, 20.1), AlertLevel::Ok);
    }

    #[test]
    fn transaction_healthy_stock_is_ok() {
        assert_eq!(AlertLevel::for_transaction(650.0, 65.0), AlertLevel::Ok);
    }

    #[test]
    fn sweep_boundaries_are_exclusive() {
        assert_eq!(AlertLevel::for_sweep(9.9), AlertLevel::Critical);
        assert_eq!(AlertLevel::for_sweep(10.0), AlertLevel::Low);
        assert_eq!(AlertLevel::for_sweep(24.9), AlertLevel::Low);
        assert_eq!(AlertLevel::for_sweep(25.0), AlertLevel::Ok);
    }
}
