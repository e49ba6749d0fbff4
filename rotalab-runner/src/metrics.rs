//! Backtest metrics: pure functions over the completed equity path.
//!
//! Every metric is a pure function: equity points and accumulated totals
//! in, scalars out. No dependency on the simulation loop.

use serde::{Deserialize, Serialize};

use rotalab_core::domain::EquityPoint;
use rotalab_core::engine::cash::TRADING_DAYS_PER_YEAR;

/// Aggregate risk/return metrics for one backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestMetrics {
    pub initial_capital: f64,
    /// Initial capital plus every applied injection.
    pub total_invested: f64,
    pub final_capital: f64,
    /// Return on invested capital, not on initial market value.
    pub total_return: f64,
    pub annualized_return: f64,
    pub max_drawdown: f64,
    /// Longest peak-to-trough span in calendar days.
    pub max_drawdown_duration_days: i64,
    pub trade_count: usize,
    pub total_costs: f64,
}

impl BacktestMetrics {
    /// Compute all metrics from the equity path and the run's totals.
    pub fn compute(
        daily_equity: &[EquityPoint],
        initial_capital: f64,
        total_invested: f64,
        trade_count: usize,
        total_costs: f64,
    ) -> Self {
        let final_capital = daily_equity
            .last()
            .map(|point| point.equity)
            .unwrap_or(initial_capital);
        let total = total_return(final_capital, total_invested);
        Self {
            initial_capital,
            total_invested,
            final_capital,
            total_return: total,
            annualized_return: annualized_return(total, daily_equity.len()),
            max_drawdown: max_drawdown(daily_equity),
            max_drawdown_duration_days: max_drawdown_duration_days(daily_equity),
            trade_count,
            total_costs,
        }
    }
}

// ─── Individual metric functions ────────────────────────────────────

/// Return on invested capital: `(final - invested) / invested`.
pub fn total_return(final_capital: f64, total_invested: f64) -> f64 {
    if total_invested <= 0.0 {
        return 0.0;
    }
    (final_capital - total_invested) / total_invested
}

/// `(1 + total)^(252 / max(1, trading_days)) - 1`.
pub fn annualized_return(total_return: f64, trading_days: usize) -> f64 {
    let days = trading_days.max(1) as f64;
    (1.0 + total_return).powf(TRADING_DAYS_PER_YEAR / days) - 1.0
}

/// Largest peak-to-trough fractional decline.
///
/// The running peak starts at zero; the denominator substitutes 1 until a
/// positive peak exists, so the ratio is always defined.
pub fn max_drawdown(daily_equity: &[EquityPoint]) -> f64 {
    let mut peak = 0.0_f64;
    let mut max_dd = 0.0_f64;
    for point in daily_equity {
        if point.equity > peak {
            peak = point.equity;
        }
        let denominator = if peak > 0.0 { peak } else { 1.0 };
        let dd = (peak - point.equity) / denominator;
        if dd > max_dd {
            max_dd = dd;
        }
    }
    max_dd
}

/// Longest span, in calendar days, between a high-water mark and a later
/// lower point before a new high is reached.
///
/// Uses the actual dates, so weekends and holidays inside a drawdown count.
pub fn max_drawdown_duration_days(daily_equity: &[EquityPoint]) -> i64 {
    let Some(first) = daily_equity.first() else {
        return 0;
    };
    let mut peak = 0.0_f64;
    let mut peak_date = first.date;
    let mut max_duration = 0_i64;
    for point in daily_equity {
        if point.equity > peak {
            peak = point.equity;
            peak_date = point.date;
        } else if point.equity < peak {
            let duration = (point.date - peak_date).num_days();
            if duration > max_duration {
                max_duration = duration;
            }
        }
    }
    max_duration
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rotalab_core::domain::Holding;

    fn curve(equities: &[f64]) -> Vec<EquityPoint> {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        equities
            .iter()
            .enumerate()
            .map(|(i, &equity)| EquityPoint {
                date: base_date + chrono::Duration::days(i as i64),
                equity,
                benchmark_a: equity,
                benchmark_b: equity,
                benchmark_market: equity,
                benchmark_cash: equity,
                holding: Holding::Cash,
            })
            .collect()
    }

    // ── Total return ──

    #[test]
    fn total_return_on_invested_capital() {
        assert!((total_return(2200.0, 2000.0) - 0.1).abs() < 1e-12);
        assert!((total_return(1800.0, 2000.0) + 0.1).abs() < 1e-12);
    }

    #[test]
    fn total_return_guards_zero_invested() {
        assert_eq!(total_return(2200.0, 0.0), 0.0);
    }

    // ── Annualized return ──

    #[test]
    fn annualized_over_one_year_is_total() {
        let annual = annualized_return(0.1, 252);
        assert!((annual - 0.1).abs() < 1e-12);
    }

    #[test]
    fn annualized_over_half_year_compounds() {
        let annual = annualized_return(0.1, 126);
        assert!((annual - (1.1_f64.powi(2) - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn annualized_guards_zero_days() {
        let annual = annualized_return(0.1, 0);
        assert!(annual.is_finite());
        assert!(annual > 0.1);
    }

    // ── Max drawdown ──

    #[test]
    fn drawdown_known_path() {
        let points = curve(&[2000.0, 2200.0, 1800.0, 1900.0]);
        let expected = (2200.0 - 1800.0) / 2200.0;
        assert!((max_drawdown(&points) - expected).abs() < 1e-12);
    }

    #[test]
    fn drawdown_monotonic_rise_is_zero() {
        let points = curve(&[2000.0, 2050.0, 2100.0, 2200.0]);
        assert_eq!(max_drawdown(&points), 0.0);
    }

    #[test]
    fn drawdown_empty_is_zero() {
        assert_eq!(max_drawdown(&[]), 0.0);
    }

    #[test]
    fn drawdown_zero_equity_guarded() {
        let points = curve(&[0.0, 0.0]);
        assert_eq!(max_drawdown(&points), 0.0);
    }

    // ── Drawdown duration ──

    #[test]
    fn duration_counts_calendar_days_under_water() {
        // Peak on day 1; under water days 2 through 4; new high on day 5.
        let points = curve(&[100.0, 110.0, 105.0, 103.0, 108.0, 111.0, 109.0, 112.0]);
        assert_eq!(max_drawdown_duration_days(&points), 3);
    }

    #[test]
    fn duration_spans_date_gaps() {
        // A Friday peak and a Monday dip are three calendar days apart.
        let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let mut points = curve(&[100.0, 90.0]);
        points[0].date = friday;
        points[1].date = monday;
        assert_eq!(max_drawdown_duration_days(&points), 3);
    }

    #[test]
    fn duration_zero_without_drawdown() {
        let points = curve(&[100.0, 101.0, 102.0]);
        assert_eq!(max_drawdown_duration_days(&points), 0);
    }

    // ── Aggregate ──

    #[test]
    fn compute_bundles_all_metrics() {
        let points = curve(&[2000.0, 2200.0, 1980.0, 2310.0]);
        let metrics = BacktestMetrics::compute(&points, 2000.0, 2000.0, 3, 12.5);
        assert_eq!(metrics.final_capital, 2310.0);
        assert!((metrics.total_return - 0.155).abs() < 1e-12);
        assert!((metrics.max_drawdown - (2200.0 - 1980.0) / 2200.0).abs() < 1e-12);
        assert_eq!(metrics.trade_count, 3);
        assert_eq!(metrics.total_costs, 12.5);
        assert!(metrics.annualized_return > metrics.total_return);
    }

    #[test]
    fn compute_empty_curve_falls_back_to_initial() {
        let metrics = BacktestMetrics::compute(&[], 2000.0, 2000.0, 0, 0.0);
        assert_eq!(metrics.final_capital, 2000.0);
        assert_eq!(metrics.total_return, 0.0);
        assert_eq!(metrics.max_drawdown, 0.0);
    }
}
