//! Passive comparison series: fully-invested benchmarks and idle cash.

use crate::domain::NavPoint;

use super::cash::daily_cash_rate;

/// Share counts for the three fully-invested benchmarks plus the all-cash
/// balance.
///
/// Benchmarks receive every capital injection at the same day's NAV as the
/// strategy, so their equity paths answer "what if fully invested" under
/// identical cash timing. Benchmark top-ups pay no fee.
#[derive(Debug, Clone)]
pub struct PassiveBenchmarks {
    pub shares_a: f64,
    pub shares_b: f64,
    pub shares_market: f64,
    pub cash_value: f64,
    daily_rate: f64,
}

impl PassiveBenchmarks {
    /// Seed all three benchmarks with `initial_capital` at day-0 NAVs.
    pub fn new(initial_capital: f64, day0: &NavPoint) -> Self {
        Self {
            shares_a: initial_capital / day0.nav_a,
            shares_b: initial_capital / day0.nav_b,
            shares_market: initial_capital / day0.nav_market,
            cash_value: initial_capital,
            daily_rate: daily_cash_rate(),
        }
    }

    /// Apply a capital injection at this day's NAVs.
    pub fn inject(&mut self, amount: f64, day: &NavPoint) {
        self.shares_a += amount / day.nav_a;
        self.shares_b += amount / day.nav_b;
        self.shares_market += amount / day.nav_market;
        self.cash_value += amount;
    }

    /// Advance the cash benchmark by one trading day.
    pub fn accrue(&mut self) {
        self.cash_value *= 1.0 + self.daily_rate;
    }

    pub fn value_a(&self, day: &NavPoint) -> f64 {
        self.shares_a * day.nav_a
    }

    pub fn value_b(&self, day: &NavPoint) -> f64 {
        self.shares_b * day.nav_b
    }

    pub fn value_market(&self, day: &NavPoint) -> f64 {
        self.shares_market * day.nav_market
    }

    pub fn value_cash(&self) -> f64 {
        self.cash_value
    }
}
