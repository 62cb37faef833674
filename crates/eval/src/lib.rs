//! Dual-strategy evaluation.
//!
//! Runs the iterative and recursive form of each problem on identical input,
//! checks that they agree, and records what each one cost.

#![warn(missing_docs)]

pub mod config;
pub mod evaluator;
pub mod profile;
pub mod session;
pub mod report;
pub mod memory;

pub use config::{EvaluatorConfig, DEFAULT_MAX_INPUT, MAX_RECURSION_LIMIT};
pub use evaluator::DualStrategyEvaluator;
pub use profile::Profile;
pub use session::ComparisonSession;
pub use report::{render_json, render_text};
pub use memory::peak_rss_kib;
