//! Property-based tests for derived event statistics.
//!
//! - Progress percent always lands in 0..=100
//! - Progress percent is monotonic in the amount raised
//! - A zero goal always yields zero percent

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::stats::progress_percent;

/// Strategy for non-negative amounts with cent precision (0.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for strictly positive goals.
fn positive_goal() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn progress_percent_is_bounded(progress in amount(), goal in amount()) {
        let percent = progress_percent(progress, goal);
        prop_assert!(percent <= 100);
    }

    #[test]
    fn progress_percent_is_monotonic(
        progress_a in amount(),
        progress_b in amount(),
        goal in positive_goal(),
    ) {
        let (lo, hi) = if progress_a <= progress_b {
            (progress_a, progress_b)
        } else {
            (progress_b, progress_a)
        };
        prop_assert!(progress_percent(lo, goal) <= progress_percent(hi, goal));
    }

    #[test]
    fn zero_goal_always_yields_zero(progress in amount()) {
        prop_assert_eq!(progress_percent(progress, Decimal::ZERO), 0);
    }
}
