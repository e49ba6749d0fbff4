//! Backtest runner: wires validation, simulation, and metrics together.
//!
//! `run_backtest()` is the single entry point callers use: it checks the
//! configuration, runs the simulation fold, aggregates metrics, and
//! assembles the final result. Re-invocation with identical inputs is
//! side-effect-free and yields an identical result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rotalab_core::domain::{CapitalInjection, DailySignal, EquityPoint, NavPoint, Trade};
use rotalab_core::engine::{simulate, EngineError};

use crate::config::{ConfigError, RunConfig};
use crate::metrics::BacktestMetrics;

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete result of a single backtest run.
///
/// Created once per invocation, immutable after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Opaque asset identifiers, echoed from the config.
    pub asset_a: String,
    pub asset_b: String,
    pub daily_equity: Vec<EquityPoint>,
    /// Chronological trade ledger.
    pub trades: Vec<Trade>,
    pub metrics: BacktestMetrics,
    /// The final day's signal, for live decision support.
    pub last_signal: DailySignal,
}

/// Default schema version for deserializing older JSON without the field.
fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Run one backtest over `series`.
///
/// The whole series warms up the momentum and trend lookbacks; callers
/// wanting a display window starting at a later date must supply leading
/// history and mark where live tracking starts. `injections` must be
/// sorted by date by the caller.
pub fn run_backtest(
    series: &[NavPoint],
    injections: &[CapitalInjection],
    config: &RunConfig,
) -> Result<BacktestResult, RunError> {
    let config = config.clone().validated()?;
    let outcome = simulate(series, injections, config.initial_capital, &config.strategy)?;
    let metrics = BacktestMetrics::compute(
        &outcome.daily_equity,
        config.initial_capital,
        outcome.total_invested,
        outcome.trades.len(),
        outcome.total_costs,
    );
    Ok(BacktestResult {
        schema_version: SCHEMA_VERSION,
        asset_a: config.asset_a,
        asset_b: config.asset_b,
        daily_equity: outcome.daily_equity,
        trades: outcome.trades,
        metrics,
        last_signal: outcome.last_signal,
    })
}
