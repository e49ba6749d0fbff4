//! EquityPoint: one row of the daily equity curve.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::nav::Holding;

/// Strategy equity and the four passive comparison values for one day.
///
/// Appended once per simulated day, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub equity: f64,
    /// Fully-invested-in-A benchmark value.
    pub benchmark_a: f64,
    /// Fully-invested-in-B benchmark value.
    pub benchmark_b: f64,
    /// Fully-invested-in-the-market-index benchmark value.
    pub benchmark_market: f64,
    /// All-cash benchmark value at the daily-compounded cash rate.
    pub benchmark_cash: f64,
    /// What the strategy held at this day's close.
    pub holding: Holding,
}
