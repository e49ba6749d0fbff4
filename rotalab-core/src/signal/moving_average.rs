//! Trailing simple moving average.

use crate::domain::{Asset, NavPoint};

/// Mean of the trailing `window` closes ending at `idx`, inclusive.
///
/// `None` when fewer than `window` closes exist.
pub fn moving_average(
    series: &[NavPoint],
    idx: usize,
    window: usize,
    asset: Asset,
) -> Option<f64> {
    if window == 0 || idx + 1 < window {
        return None;
    }
    let sum: f64 = series[idx + 1 - window..=idx]
        .iter()
        .map(|point| point.nav(asset))
        .sum();
    Some(sum / window as f64)
}
