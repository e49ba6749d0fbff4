//! Strategy configuration.

use serde::{Deserialize, Serialize};

use crate::signal::SignalConfig;

/// Tunable parameters of the rotation strategy.
///
/// Everything the simulation needs besides the NAV series, the injections,
/// and the starting capital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Momentum lookback in trading days.
    pub momentum_window: usize,
    /// Flat per-side transaction cost as a fraction of the traded amount.
    pub slippage_rate: f64,
    /// Average three lookbacks (0.5x, 1x, 1.5x) instead of one.
    pub use_smoothed_momentum: bool,
    /// Require the close above its 20-day average to enter.
    pub use_trend_filter: bool,
    /// Minimum days a position must be held before a rotation may execute.
    /// Independent of the 7-day short-term fee threshold.
    pub min_hold_days: usize,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            momentum_window: 20,
            slippage_rate: 0.0,
            use_smoothed_momentum: false,
            use_trend_filter: false,
            min_hold_days: 7,
        }
    }
}

impl StrategyConfig {
    /// The subset of knobs the signal calculator reads.
    pub fn signal_config(&self) -> SignalConfig {
        SignalConfig {
            momentum_window: self.momentum_window,
            use_smoothed_momentum: self.use_smoothed_momentum,
            use_trend_filter: self.use_trend_filter,
        }
    }
}
