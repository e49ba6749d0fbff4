//! Day-by-day simulation: state machine, fee model, benchmarks, cash accrual.

pub mod benchmarks;
pub mod cash;
pub mod config;
pub mod fees;
pub mod simulation;
pub mod state;

pub use config::StrategyConfig;
pub use simulation::{simulate, EngineError, SimulationOutcome};
pub use state::SimulationState;
