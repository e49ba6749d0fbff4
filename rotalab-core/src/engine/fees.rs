//! The path-dependent fee schedule.
//!
//! Purchases always pay the flat slippage rate. Redemptions pay a punitive
//! 1.5% when the position was held under 7 days, regardless of the
//! configured minimum hold.

/// Holding-duration threshold below which a redemption is short-term.
pub const SHORT_TERM_DAYS: usize = 7;

/// Punitive redemption rate for short-term exits.
pub const SHORT_TERM_FEE_RATE: f64 = 0.015;

/// True when a redemption after `days_held` days incurs the penalty.
pub fn is_short_term(days_held: usize) -> bool {
    days_held < SHORT_TERM_DAYS
}

/// Fee rate charged when exiting a position held for `days_held` days.
pub fn redemption_fee_rate(days_held: usize, slippage_rate: f64) -> f64 {
    if is_short_term(days_held) {
        SHORT_TERM_FEE_RATE
    } else {
        slippage_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_below_seven_days() {
        for days in 0..SHORT_TERM_DAYS {
            assert_eq!(redemption_fee_rate(days, 0.001), SHORT_TERM_FEE_RATE);
        }
    }

    #[test]
    fn flat_rate_at_and_after_seven_days() {
        assert_eq!(redemption_fee_rate(7, 0.001), 0.001);
        assert_eq!(redemption_fee_rate(120, 0.001), 0.001);
    }

    #[test]
    fn zero_slippage_long_hold_is_free() {
        assert_eq!(redemption_fee_rate(30, 0.0), 0.0);
    }
}
