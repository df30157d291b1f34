//! Derived statistics over an event's registrations and fundraising.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Registration counts for one event, broken down by payment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationTally {
    /// All registrations.
    pub total: u64,
    /// Paid registrations.
    pub paid: u64,
    /// Registrations awaiting payment.
    pub pending: u64,
    /// Free registrations.
    pub free: u64,
}

/// Fundraising progress as a whole percentage, clamped to 0..=100.
///
/// Rounds half away from zero, so 32.5% reads as 33%. Defined as 0 when
/// `goal_amount` is zero (or not meaningfully positive), regardless of
/// `progress_amount`.
#[must_use]
pub fn progress_percent(progress_amount: Decimal, goal_amount: Decimal) -> u8 {
    if goal_amount <= Decimal::ZERO {
        return 0;
    }

    let percent = (progress_amount / goal_amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    percent
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .to_u8()
        .unwrap_or(100)
}

/// Estimated ticket revenue: ticket price times paid registrations.
#[must_use]
pub fn revenue_estimate(ticket_price: Decimal, paid_count: u64) -> Decimal {
    ticket_price * Decimal::from(paid_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_progress_percent_basic() {
        assert_eq!(progress_percent(dec!(250), dec!(1000)), 25);
        assert_eq!(progress_percent(dec!(1000), dec!(1000)), 100);
        assert_eq!(progress_percent(dec!(0), dec!(1000)), 0);
    }

    #[test]
    fn test_progress_percent_zero_goal_is_zero() {
        assert_eq!(progress_percent(dec!(0), dec!(0)), 0);
        assert_eq!(progress_percent(dec!(99999), dec!(0)), 0);
    }

    #[test]
    fn test_progress_percent_clamps_overshoot() {
        assert_eq!(progress_percent(dec!(1500), dec!(1000)), 100);
    }

    #[test]
    fn test_progress_percent_rounds() {
        // 333/1000 = 33.3% -> 33; 336/1000 = 33.6% -> 34
        assert_eq!(progress_percent(dec!(333), dec!(1000)), 33);
        assert_eq!(progress_percent(dec!(336), dec!(1000)), 34);
    }

    #[test]
    fn test_progress_percent_rounds_midpoints_up() {
        assert_eq!(progress_percent(dec!(325), dec!(1000)), 33);
        assert_eq!(progress_percent(dec!(335), dec!(1000)), 34);
    }

    #[test]
    fn test_revenue_estimate() {
        assert_eq!(revenue_estimate(dec!(50), 3), dec!(150));
        assert_eq!(revenue_estimate(dec!(50), 0), dec!(0));
        assert_eq!(revenue_estimate(dec!(0), 7), dec!(0));
        assert_eq!(revenue_estimate(dec!(12.50), 4), dec!(50.00));
    }

    #[test]
    fn test_tally_defaults_to_zero() {
        let tally = RegistrationTally::default();
        assert_eq!(tally.total, 0);
        assert_eq!(tally.paid, 0);
        assert_eq!(tally.pending, 0);
        assert_eq!(tally.free, 0);
    }
}
