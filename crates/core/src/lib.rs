//! duet core data models.
//!
//! This crate defines the shared vocabulary of the dual-strategy harness:
//! problems, strategies, measurements, the error taxonomy and the call
//! tracker that enforces the recursion ceiling.

#![warn(missing_docs)]

// Identity
mod id;

// Problems and strategies
mod problem;

// Results
mod measurement;
mod error;

// Call tracking
mod tracker;

// Re-exports
pub use id::RunId;
pub use problem::{ProblemKind, Strategy};
pub use measurement::{
    Comparison, FunctionStats, Measurement, Outcome, SessionReport, StrategyRun, Verdict,
};
pub use error::{EvalError, Result, StrategyError, StrategyResult};
pub use tracker::{CallTracker, DEFAULT_RECURSION_LIMIT};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
