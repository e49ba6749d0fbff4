//! Serializable run configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rotalab_core::engine::StrategyConfig;

/// Unique identifier for a run configuration (content-addressable hash).
pub type RunId = String;

/// Errors raised while loading or checking a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("initial capital must be positive, got {0}")]
    NonPositiveCapital(f64),
    #[error("momentum window must be at least 1")]
    ZeroMomentumWindow,
}

/// Everything needed to reproduce a backtest, minus the data itself.
///
/// `asset_a` and `asset_b` are opaque identifiers (fund codes, tickers);
/// they are echoed back in results and never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub asset_a: String,
    pub asset_b: String,
    pub initial_capital: f64,
    #[serde(default)]
    pub strategy: StrategyConfig,
}

impl RunConfig {
    pub fn new(asset_a: impl Into<String>, asset_b: impl Into<String>, initial_capital: f64) -> Self {
        Self {
            asset_a: asset_a.into(),
            asset_b: asset_b.into(),
            initial_capital,
            strategy: StrategyConfig::default(),
        }
    }

    /// Computes a deterministic hash ID for this configuration.
    ///
    /// Two runs with identical configs share a RunId, which makes results
    /// addressable for caching and comparison.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }

    /// Parse a config from TOML and check the parameter bounds.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validated()
    }

    /// Check the parameter bounds the engine assumes.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.initial_capital <= 0.0 {
            return Err(ConfigError::NonPositiveCapital(self.initial_capital));
        }
        if self.strategy.momentum_window == 0 {
            return Err(ConfigError::ZeroMomentumWindow);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_id_deterministic() {
        let config = RunConfig::new("161725", "159915", 2000.0);
        assert_eq!(config.run_id(), config.run_id());
        assert!(!config.run_id().is_empty());
    }

    #[test]
    fn run_id_changes_with_params() {
        let config = RunConfig::new("161725", "159915", 2000.0);
        let mut other = config.clone();
        other.strategy.momentum_window = 30;
        assert_ne!(config.run_id(), other.run_id());
    }

    #[test]
    fn toml_roundtrip_with_defaults() {
        let raw = r#"
            asset_a = "161725"
            asset_b = "159915"
            initial_capital = 2000.0
        "#;
        let config = RunConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.asset_a, "161725");
        assert_eq!(config.strategy.momentum_window, 20);
        assert_eq!(config.strategy.min_hold_days, 7);
    }

    #[test]
    fn toml_overrides_strategy_fields() {
        let raw = r#"
            asset_a = "a"
            asset_b = "b"
            initial_capital = 5000.0

            [strategy]
            momentum_window = 60
            slippage_rate = 0.001
            use_trend_filter = true
        "#;
        let config = RunConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.strategy.momentum_window, 60);
        assert_eq!(config.strategy.slippage_rate, 0.001);
        assert!(config.strategy.use_trend_filter);
        assert!(!config.strategy.use_smoothed_momentum);
    }

    #[test]
    fn rejects_non_positive_capital() {
        let raw = r#"
            asset_a = "a"
            asset_b = "b"
            initial_capital = 0.0
        "#;
        let err = RunConfig::from_toml_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveCapital(_)));
    }

    #[test]
    fn rejects_zero_momentum_window() {
        let raw = r#"
            asset_a = "a"
            asset_b = "b"
            initial_capital = 2000.0

            [strategy]
            momentum_window = 0
        "#;
        let err = RunConfig::from_toml_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroMomentumWindow));
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = RunConfig::new("161725", "159915", 2000.0);
        let json = serde_json::to_string_pretty(&config).unwrap();
        let deser: RunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deser);
    }
}
