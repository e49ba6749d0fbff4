//! Trailing momentum score.

use crate::domain::{Asset, NavPoint};

/// Fractional NAV change over a trailing `window` days.
///
/// `None` when fewer than `window` prior days exist at `idx`.
pub fn momentum_score(
    series: &[NavPoint],
    idx: usize,
    window: usize,
    asset: Asset,
) -> Option<f64> {
    if idx < window {
        return None;
    }
    let base = series[idx - window].nav(asset);
    Some((series[idx].nav(asset) - base) / base)
}

/// Mean of three momentum scores at half, full, and one-and-a-half times
/// the base window.
///
/// The half window is floored at 2 days. `None` unless all three component
/// scores are defined, so the smoothed variant needs `floor(1.5 * window)`
/// days of history before it fires.
pub fn smoothed_momentum_score(
    series: &[NavPoint],
    idx: usize,
    window: usize,
    asset: Asset,
) -> Option<f64> {
    let half = (window / 2).max(2);
    let long = window + window / 2;
    let short_score = momentum_score(series, idx, half, asset)?;
    let base_score = momentum_score(series, idx, window, asset)?;
    let long_score = momentum_score(series, idx, long, asset)?;
    Some((short_score + base_score + long_score) / 3.0)
}
