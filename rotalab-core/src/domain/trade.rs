//! Trade: an immutable ledger entry for every execution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::nav::Asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Why a trade executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeReason {
    /// Rotation entry or exit at the flat slippage rate.
    Rotation,
    /// Redemption inside the 7-day window, charged the punitive rate.
    ShortTermPenalty { days_held: usize },
    /// Buy triggered by a capital injection into an existing position.
    CapitalInjection,
}

impl fmt::Display for TradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotation => write!(f, "rotation"),
            Self::ShortTermPenalty { days_held } => {
                write!(f, "short-term penalty 1.5% (held {days_held}d)")
            }
            Self::CapitalInjection => write!(f, "capital injection"),
        }
    }
}

/// One executed order: a rotation buy/sell or an injection-driven buy.
///
/// `total_amount` is the gross amount the order moved; `cost` is the fee
/// taken out of it. The ledger is append-only and chronological; consumers
/// needing newest-first reverse a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub date: NaiveDate,
    pub asset: Asset,
    pub side: TradeSide,
    pub price: f64,
    pub shares: f64,
    pub total_amount: f64,
    pub cost: f64,
    pub reason: TradeReason,
}
