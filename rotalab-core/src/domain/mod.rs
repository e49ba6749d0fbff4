//! Domain types: the vocabulary of the rotation engine.

pub mod equity;
pub mod injection;
pub mod nav;
pub mod signal;
pub mod trade;

pub use equity::EquityPoint;
pub use injection::CapitalInjection;
pub use nav::{Asset, Holding, NavPoint};
pub use signal::DailySignal;
pub use trade::{Trade, TradeReason, TradeSide};
