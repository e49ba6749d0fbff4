//! Export: JSON and CSV artifact generation.
//!
//! Two export formats for backtest results:
//! - **JSON**: full round-trip serialization with schema versioning.
//!   Unknown newer versions are rejected on load.
//! - **CSV**: trade tape and equity curve for external analysis tools.
//!
//! Everything returns strings; persisting them is the caller's concern.

use anyhow::{bail, Context, Result};

use rotalab_core::domain::{EquityPoint, Trade};

use crate::runner::{BacktestResult, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a `BacktestResult` to pretty JSON.
pub fn export_json(result: &BacktestResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize BacktestResult to JSON")
}

/// Deserialize a `BacktestResult` from JSON, rejecting newer schema versions.
pub fn import_json(json: &str) -> Result<BacktestResult> {
    let result: BacktestResult =
        serde_json::from_str(json).context("failed to deserialize BacktestResult from JSON")?;
    if result.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            result.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(result)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the trade tape as CSV.
///
/// Columns: date, asset, side, price, shares, total_amount, cost, reason
pub fn export_trades_csv(trades: &[Trade]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "date",
        "asset",
        "side",
        "price",
        "shares",
        "total_amount",
        "cost",
        "reason",
    ])?;

    for t in trades {
        wtr.write_record([
            &t.date.to_string(),
            &t.asset.to_string(),
            &format!("{:?}", t.side),
            &format!("{:.6}", t.price),
            &format!("{:.6}", t.shares),
            &format!("{:.2}", t.total_amount),
            &format!("{:.2}", t.cost),
            &t.reason.to_string(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Export the equity curve with all benchmark columns as CSV.
pub fn export_equity_csv(daily_equity: &[EquityPoint]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "date",
        "equity",
        "benchmark_a",
        "benchmark_b",
        "benchmark_market",
        "benchmark_cash",
        "holding",
    ])?;

    for point in daily_equity {
        wtr.write_record([
            &point.date.to_string(),
            &format!("{:.2}", point.equity),
            &format!("{:.2}", point.benchmark_a),
            &format!("{:.2}", point.benchmark_b),
            &format!("{:.2}", point.benchmark_market),
            &format!("{:.2}", point.benchmark_cash),
            &point.holding.to_string(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::runner::run_backtest;
    use chrono::NaiveDate;
    use rotalab_core::domain::NavPoint;

    fn sample_result() -> BacktestResult {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let series: Vec<NavPoint> = (0..30)
            .map(|i| NavPoint {
                date: base_date + chrono::Duration::days(i as i64),
                nav_a: 1.01_f64.powi(i),
                nav_b: 1.0,
                nav_market: 1.0,
            })
            .collect();
        let mut config = RunConfig::new("161725", "159915", 2000.0);
        config.strategy.momentum_window = 5;
        run_backtest(&series, &[], &config).unwrap()
    }

    #[test]
    fn json_roundtrip() {
        let result = sample_result();
        let json = export_json(&result).unwrap();
        let back = import_json(&json).unwrap();
        assert_eq!(result, back);
    }

    #[test]
    fn import_rejects_newer_schema() {
        let result = sample_result();
        let mut json: serde_json::Value =
            serde_json::from_str(&export_json(&result).unwrap()).unwrap();
        json["schema_version"] = serde_json::json!(SCHEMA_VERSION + 1);
        let err = import_json(&json.to_string()).unwrap_err();
        assert!(err.to_string().contains("unsupported schema version"));
    }

    #[test]
    fn import_defaults_missing_schema_version() {
        let result = sample_result();
        let mut json: serde_json::Value =
            serde_json::from_str(&export_json(&result).unwrap()).unwrap();
        json.as_object_mut().unwrap().remove("schema_version");
        let back = import_json(&json.to_string()).unwrap();
        assert_eq!(back.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn trades_csv_has_header_and_rows() {
        let result = sample_result();
        let csv = export_trades_csv(&result.trades).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "date,asset,side,price,shares,total_amount,cost,reason"
        );
        assert_eq!(lines.len(), result.trades.len() + 1);
        assert!(lines[1].contains("Buy"));
    }

    #[test]
    fn equity_csv_has_one_row_per_day() {
        let result = sample_result();
        let csv = export_equity_csv(&result.daily_equity).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), result.daily_equity.len() + 1);
        assert!(lines[1].starts_with("2024-01-02,"));
        assert!(lines[1].ends_with("CASH"));
    }
}
