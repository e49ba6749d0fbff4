//! DailySignal: the engine's per-day verdict.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::nav::Holding;

/// Momentum scores, trend-filter verdicts, and the resulting recommendation
/// for one day.
///
/// Scores are `None` while the trailing window lacks history. Callers must
/// treat that as "no signal", never as zero. The final day's signal is
/// surfaced in the backtest result for live decision support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySignal {
    pub date: NaiveDate,
    pub score_a: Option<f64>,
    pub score_b: Option<f64>,
    /// Raw close-above-20-day-average verdict for asset A, recorded whether
    /// or not the trend filter participates in the decision.
    pub pass_ma_a: bool,
    pub pass_ma_b: bool,
    pub recommendation: Holding,
}
