//! Rotalab Core: the dual-asset momentum-rotation backtesting engine.
//!
//! This crate contains the heart of the system:
//! - Domain types (NAV points, injections, signals, trades, equity points)
//! - Momentum and moving-average signal calculator with the decision rule
//! - Day-by-day simulation fold with the position state machine
//! - Passive benchmark and idle-cash tracking
//!
//! The engine is a pure function of its inputs: no I/O, no clock, no
//! shared state. Data acquisition, persistence, and presentation live in
//! external collaborators that consume the typed results.

pub mod domain;
pub mod engine;
pub mod signal;
