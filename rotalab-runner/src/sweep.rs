//! Parameter sweep over independent backtest runs.
//!
//! The simulation is a pure function, so runs parallelize with no shared
//! state; rayon executes the grid and results come back in grid order.

use rayon::prelude::*;

use rotalab_core::domain::{CapitalInjection, NavPoint};

use crate::config::RunConfig;
use crate::runner::{run_backtest, BacktestResult, RunError};

/// Parameter grid specification.
#[derive(Debug, Clone)]
pub struct ParamGrid {
    /// Momentum lookbacks to test.
    pub momentum_windows: Vec<usize>,
    /// Minimum-hold settings to test.
    pub min_hold_days: Vec<usize>,
    /// Slippage rates to test.
    pub slippage_rates: Vec<f64>,
}

impl ParamGrid {
    /// A small default grid around the standard 20-day lookback.
    pub fn momentum_default() -> Self {
        Self {
            momentum_windows: vec![10, 20, 30, 60],
            min_hold_days: vec![7],
            slippage_rates: vec![0.0],
        }
    }

    /// Total number of configurations in this grid.
    pub fn size(&self) -> usize {
        self.momentum_windows.len() * self.min_hold_days.len() * self.slippage_rates.len()
    }

    /// Generate all configurations, overriding `base` per grid point.
    pub fn generate_configs(&self, base: &RunConfig) -> Vec<RunConfig> {
        let mut configs = Vec::with_capacity(self.size());
        for &momentum_window in &self.momentum_windows {
            if momentum_window == 0 {
                continue;
            }
            for &min_hold in &self.min_hold_days {
                for &slippage_rate in &self.slippage_rates {
                    let mut config = base.clone();
                    config.strategy.momentum_window = momentum_window;
                    config.strategy.min_hold_days = min_hold;
                    config.strategy.slippage_rate = slippage_rate;
                    configs.push(config);
                }
            }
        }
        configs
    }
}

/// One grid point with its result.
#[derive(Debug, Clone)]
pub struct SweepEntry {
    pub config: RunConfig,
    pub result: BacktestResult,
}

/// Run every configuration in the grid against the same series.
pub fn sweep(
    grid: &ParamGrid,
    base: &RunConfig,
    series: &[NavPoint],
    injections: &[CapitalInjection],
) -> Result<Vec<SweepEntry>, RunError> {
    let configs = grid.generate_configs(base);
    configs
        .into_par_iter()
        .map(|config| {
            let result = run_backtest(series, injections, &config)?;
            Ok(SweepEntry { config, result })
        })
        .collect()
}
