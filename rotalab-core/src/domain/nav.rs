//! NavPoint: the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One calendar day's closing NAV for both rotation assets and the market
/// benchmark.
///
/// A series passed to the engine must already be time-aligned: strictly
/// increasing dates, no duplicates, all three NAVs present on every row.
/// The engine does not repair gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    pub date: NaiveDate,
    pub nav_a: f64,
    pub nav_b: f64,
    pub nav_market: f64,
}

impl NavPoint {
    /// NAV of the given rotation asset on this day.
    pub fn nav(&self, asset: Asset) -> f64 {
        match asset {
            Asset::A => self.nav_a,
            Asset::B => self.nav_b,
        }
    }

    /// Basic sanity check: all three NAVs strictly positive and finite.
    pub fn is_sane(&self) -> bool {
        self.nav_a > 0.0
            && self.nav_a.is_finite()
            && self.nav_b > 0.0
            && self.nav_b.is_finite()
            && self.nav_market > 0.0
            && self.nav_market.is_finite()
    }
}

/// One of the two investable rotation assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    A,
    B,
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// What the strategy holds at a day's close.
///
/// Doubles as the recommendation type: the state machine rotates whenever
/// the day's recommendation differs from the current holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Holding {
    Cash,
    Asset(Asset),
}

impl Holding {
    pub fn is_cash(&self) -> bool {
        matches!(self, Self::Cash)
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "CASH"),
            Self::Asset(asset) => write!(f, "{asset}"),
        }
    }
}
