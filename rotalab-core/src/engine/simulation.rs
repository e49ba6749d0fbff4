//! The simulation fold: one synchronous pass over the day sequence.
//!
//! Five phases per day:
//! 1. Apply capital injections dated today
//! 2. Mark to market, append the equity point
//! 3. Settle the pending rotation buy at today's NAV
//! 4. Compute today's signal
//! 5. Evaluate the rotation transition (skipped on settlement days)

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{
    CapitalInjection, DailySignal, EquityPoint, Holding, NavPoint, Trade, TradeReason, TradeSide,
};
use crate::signal::evaluate_signal;

use super::benchmarks::PassiveBenchmarks;
use super::cash::daily_cash_rate;
use super::config::StrategyConfig;
use super::fees::{is_short_term, redemption_fee_rate};
use super::state::SimulationState;

/// Input rejected before the simulation starts.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("nav series has {len} rows, need at least 2")]
    SeriesTooShort { len: usize },
    #[error("initial capital must be positive, got {capital}")]
    NonPositiveCapital { capital: f64 },
    #[error("non-positive nav on {date}")]
    NonPositiveNav { date: NaiveDate },
    #[error("injection '{id}' has non-positive amount {amount}")]
    NonPositiveInjection { id: String, amount: f64 },
}

/// Everything the simulation produced. Metrics are derived downstream from
/// the equity path and the accumulated totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub daily_equity: Vec<EquityPoint>,
    pub trades: Vec<Trade>,
    /// The final day's signal.
    pub last_signal: DailySignal,
    pub final_equity: f64,
    pub total_invested: f64,
    pub total_costs: f64,
}

/// Run the rotation strategy over `series`.
///
/// Pure and idempotent: identical inputs produce identical outcomes. The
/// whole series warms up the momentum and trend lookbacks; callers wanting
/// a display window starting later must supply the leading history
/// themselves. Injections are matched to trading days by exact date;
/// entries dated off-calendar are ignored.
pub fn simulate(
    series: &[NavPoint],
    injections: &[CapitalInjection],
    initial_capital: f64,
    config: &StrategyConfig,
) -> Result<SimulationOutcome, EngineError> {
    validate(series, injections, initial_capital)?;

    let signal_config = config.signal_config();
    let daily_rate = daily_cash_rate();

    let mut state = SimulationState::new(initial_capital);
    let mut benchmarks = PassiveBenchmarks::new(initial_capital, &series[0]);
    let mut daily_equity = Vec::with_capacity(series.len());

    for (idx, today) in series.iter().enumerate() {
        // ─── Phase 1: capital injections ───
        for injection in injections.iter().filter(|inj| inj.date == today.date) {
            apply_injection(&mut state, today, injection, config.slippage_rate);
            benchmarks.inject(injection.amount, today);
        }

        // ─── Phase 2: mark to market ───
        match state.holding {
            Holding::Cash => state.capital *= 1.0 + daily_rate,
            Holding::Asset(asset) => state.capital = state.shares * today.nav(asset),
        }
        benchmarks.accrue();

        daily_equity.push(EquityPoint {
            date: today.date,
            equity: state.capital,
            benchmark_a: benchmarks.value_a(today),
            benchmark_b: benchmarks.value_b(today),
            benchmark_market: benchmarks.value_market(today),
            benchmark_cash: benchmarks.value_cash(),
            holding: state.holding,
        });

        // ─── Phase 3: settle the deferred buy ───
        let settled_today = settle_pending_buy(&mut state, today, idx, config.slippage_rate);

        // ─── Phase 4: today's signal ───
        let signal = evaluate_signal(series, idx, &signal_config);

        // ─── Phase 5: rotation transition ───
        // A settlement day consumes the decision slot: the fresh position is
        // never reversed against the same day's close.
        if !settled_today {
            apply_transition(&mut state, today, idx, &signal, config);
        }
    }

    let last_signal = evaluate_signal(series, series.len() - 1, &signal_config);
    let final_equity = daily_equity
        .last()
        .map(|point| point.equity)
        .unwrap_or(initial_capital);

    Ok(SimulationOutcome {
        daily_equity,
        trades: state.trades,
        last_signal,
        final_equity,
        total_invested: state.total_invested,
        total_costs: state.total_costs,
    })
}

fn validate(
    series: &[NavPoint],
    injections: &[CapitalInjection],
    initial_capital: f64,
) -> Result<(), EngineError> {
    if series.len() < 2 {
        return Err(EngineError::SeriesTooShort { len: series.len() });
    }
    if initial_capital <= 0.0 {
        return Err(EngineError::NonPositiveCapital {
            capital: initial_capital,
        });
    }
    if let Some(bad) = series.iter().find(|point| !point.is_sane()) {
        return Err(EngineError::NonPositiveNav { date: bad.date });
    }
    if let Some(bad) = injections.iter().find(|inj| inj.amount <= 0.0) {
        return Err(EngineError::NonPositiveInjection {
            id: bad.id.clone(),
            amount: bad.amount,
        });
    }
    Ok(())
}

/// Fold a cash top-up into the current holding.
///
/// In cash the amount joins the balance directly. In a position it buys
/// more of the held asset at today's NAV, paying the flat slippage rate.
fn apply_injection(
    state: &mut SimulationState,
    today: &NavPoint,
    injection: &CapitalInjection,
    slippage_rate: f64,
) {
    state.total_invested += injection.amount;
    match state.holding {
        Holding::Cash => state.capital += injection.amount,
        Holding::Asset(asset) => {
            let price = today.nav(asset);
            let cost = injection.amount * slippage_rate;
            let bought = (injection.amount - cost) / price;
            state.shares += bought;
            state.total_costs += cost;
            state.trades.push(Trade {
                date: today.date,
                asset,
                side: TradeSide::Buy,
                price,
                shares: bought,
                total_amount: injection.amount,
                cost,
                reason: TradeReason::CapitalInjection,
            });
        }
    }
}

/// Execute the buy queued on a previous day, if any.
///
/// Returns true when a settlement happened.
fn settle_pending_buy(
    state: &mut SimulationState,
    today: &NavPoint,
    idx: usize,
    slippage_rate: f64,
) -> bool {
    let Some(target) = state.pending_buy.take() else {
        return false;
    };
    let price = today.nav(target);
    let total_amount = state.capital;
    let cost = total_amount * slippage_rate;
    state.capital -= cost;
    state.total_costs += cost;
    state.shares = state.capital / price;
    state.holding = Holding::Asset(target);
    state.last_trade_idx = Some(idx);
    state.trades.push(Trade {
        date: today.date,
        asset: target,
        side: TradeSide::Buy,
        price,
        shares: state.shares,
        total_amount,
        cost,
        reason: TradeReason::Rotation,
    });
    true
}

/// Evaluate the transition rule for one day.
///
/// A transition out of a non-cash holding is deferred, not canceled, until
/// the position has been held `min_hold_days`. Exits from cash are never
/// blocked. The sell executes at today's NAV; the buy side, if any, is
/// queued for next-day settlement.
fn apply_transition(
    state: &mut SimulationState,
    today: &NavPoint,
    idx: usize,
    signal: &DailySignal,
    config: &StrategyConfig,
) {
    if signal.recommendation == state.holding {
        return;
    }

    let unlocked = state.holding.is_cash()
        || state
            .days_held(idx)
            .map_or(true, |held| held >= config.min_hold_days);
    if !unlocked {
        return;
    }

    if let Holding::Asset(asset) = state.holding {
        // Holding an asset implies an entry on record.
        let held = state.days_held(idx).unwrap_or(usize::MAX);
        let price = today.nav(asset);
        let total_amount = state.shares * price;
        let cost = total_amount * redemption_fee_rate(held, config.slippage_rate);
        state.total_costs += cost;
        state.capital = total_amount - cost;
        let reason = if is_short_term(held) {
            TradeReason::ShortTermPenalty { days_held: held }
        } else {
            TradeReason::Rotation
        };
        state.trades.push(Trade {
            date: today.date,
            asset,
            side: TradeSide::Sell,
            price,
            shares: state.shares,
            total_amount,
            cost,
            reason,
        });
        state.shares = 0.0;
        state.holding = Holding::Cash;
    }

    if let Holding::Asset(target) = signal.recommendation {
        state.pending_buy = Some(target);
    }
}
