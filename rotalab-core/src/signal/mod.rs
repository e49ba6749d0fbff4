//! Signal calculator: momentum scores, trend filter, and the decision rule.
//!
//! Leaf module. All window math is a pure function of the NAV series and an
//! index, returning `Option<f64>` where `None` means insufficient trailing
//! history.

pub mod decision;
pub mod momentum;
pub mod moving_average;

pub use decision::{evaluate_signal, SignalConfig};
pub use momentum::{momentum_score, smoothed_momentum_score};
pub use moving_average::moving_average;

/// Moving-average window for the trend filter.
///
/// A strategy constant, independent of the configurable momentum lookback.
pub const MA_WINDOW: usize = 20;
