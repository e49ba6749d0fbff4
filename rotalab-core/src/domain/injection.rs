//! CapitalInjection: an externally supplied cash top-up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A cash top-up applied on the trading day matching `date`.
///
/// Injections compound into the current position rather than being held
/// aside, and the passive benchmarks receive the identical amount on the
/// same day so the comparison stays fair. Amount must be positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalInjection {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
}
