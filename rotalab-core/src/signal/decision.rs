//! The rotation decision rule.

use crate::domain::{Asset, DailySignal, Holding, NavPoint};

use super::momentum::{momentum_score, smoothed_momentum_score};
use super::moving_average::moving_average;
use super::MA_WINDOW;

/// The subset of strategy knobs the signal calculator reads.
#[derive(Debug, Clone, Copy)]
pub struct SignalConfig {
    /// Momentum lookback in trading days.
    pub momentum_window: usize,
    /// Average three lookbacks (0.5x, 1x, 1.5x) instead of one.
    pub use_smoothed_momentum: bool,
    /// Require the close above its 20-day average to qualify.
    pub use_trend_filter: bool,
}

/// Compute the signal for day `idx`.
///
/// An asset qualifies when its momentum score is strictly positive and it
/// passes the trend filter (trivially, when the filter is off). Both
/// qualify: the higher score wins, ties go to asset A. Neither: cash.
///
/// Undefined scores never qualify, so the recommendation stays cash until
/// the lookback is satisfied. The raw moving-average comparisons are
/// recorded even when the filter is off; an undefined average reads as not
/// passed.
pub fn evaluate_signal(series: &[NavPoint], idx: usize, config: &SignalConfig) -> DailySignal {
    let score = |asset| {
        if config.use_smoothed_momentum {
            smoothed_momentum_score(series, idx, config.momentum_window, asset)
        } else {
            momentum_score(series, idx, config.momentum_window, asset)
        }
    };
    let score_a = score(Asset::A);
    let score_b = score(Asset::B);

    let today = &series[idx];
    let pass_ma_a = moving_average(series, idx, MA_WINDOW, Asset::A)
        .is_some_and(|ma| today.nav_a > ma);
    let pass_ma_b = moving_average(series, idx, MA_WINDOW, Asset::B)
        .is_some_and(|ma| today.nav_b > ma);

    let trend_a = !config.use_trend_filter || pass_ma_a;
    let trend_b = !config.use_trend_filter || pass_ma_b;

    let qualifies_a = trend_a && score_a.is_some_and(|s| s > 0.0);
    let qualifies_b = trend_b && score_b.is_some_and(|s| s > 0.0);

    let recommendation = match ((qualifies_a, score_a), (qualifies_b, score_b)) {
        ((true, Some(a)), (true, Some(b))) => {
            // Ties go to asset A.
            if a >= b {
                Holding::Asset(Asset::A)
            } else {
                Holding::Asset(Asset::B)
            }
        }
        ((true, _), _) => Holding::Asset(Asset::A),
        (_, (true, _)) => Holding::Asset(Asset::B),
        _ => Holding::Cash,
    };

    DailySignal {
        date: today.date,
        score_a,
        score_b,
        pass_ma_a,
        pass_ma_b,
        recommendation,
    }
}
