//! Measurements, outcomes and session reports.

use crate::error::StrategyError;
use crate::id::RunId;
use crate::problem::{ProblemKind, Strategy};
use crate::Time;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cost of one strategy run on one problem instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Strategy that was measured
    pub strategy: Strategy,

    /// Entry-point function name
    pub function: String,

    /// Wall-clock time of the whole run
    pub elapsed: Duration,

    /// Invocations of the entry point, including self-calls
    pub calls: u64,

    /// Invocations not nested inside another invocation of the same function
    pub primitive_calls: u64,

    /// Deepest tracked frame reached
    pub max_depth: usize,
}

/// What a strategy produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Finished with a value, rendered in decimal
    Completed {
        /// Result value
        value: String,
    },
    /// Failed; the failure belongs to this measurement only
    Failed {
        /// Why it failed
        error: StrategyError,
    },
}

impl Outcome {
    /// The value, if the strategy completed.
    pub fn value(&self) -> Option<&str> {
        match self {
            Outcome::Completed { value } => Some(value),
            Outcome::Failed { .. } => None,
        }
    }

    /// The error, if the strategy failed.
    pub fn error(&self) -> Option<&StrategyError> {
        match self {
            Outcome::Completed { .. } => None,
            Outcome::Failed { error } => Some(error),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Completed { value } => f.write_str(value),
            Outcome::Failed { error } => write!(f, "failed: {}", error),
        }
    }
}

/// One strategy's outcome together with its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRun {
    /// Result or failure
    pub outcome: Outcome,
    /// Cost
    pub measurement: Measurement,
}

/// Whether the two strategies could be checked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Both completed with equal values
    Agreed,
    /// At least one strategy failed, so nothing could be compared
    Inconclusive,
}

/// Both strategies run on the same problem instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Problem compared
    pub problem: ProblemKind,

    /// Rendered input, e.g. `base=7, power=500`
    pub input: String,

    /// Iterative run
    pub iterative: StrategyRun,

    /// Recursive run
    pub recursive: StrategyRun,

    /// Agreement verdict
    pub verdict: Verdict,
}

impl Comparison {
    /// The run for a given strategy.
    pub fn run(&self, strategy: Strategy) -> &StrategyRun {
        match strategy {
            Strategy::Iterative => &self.iterative,
            Strategy::Recursive => &self.recursive,
        }
    }

    /// Recursive time divided by iterative time, when both are non-zero.
    pub fn slowdown(&self) -> Option<f64> {
        let iterative = self.iterative.measurement.elapsed.as_secs_f64();
        let recursive = self.recursive.measurement.elapsed.as_secs_f64();
        if iterative > 0.0 && recursive > 0.0 {
            Some(recursive / iterative)
        } else {
            None
        }
    }
}

/// Per-function profiling statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionStats {
    /// Function name
    pub function: String,

    /// All calls (`ncalls`)
    pub calls: u64,

    /// Calls made while the function was not already executing
    pub primitive_calls: u64,

    /// Time spent in the function itself, excluding tracked callees (`tottime`)
    pub total_time: Duration,

    /// Time spent in primitive calls including callees (`cumtime`)
    pub cumulative_time: Duration,

    /// Deepest frame at which the function ran
    pub max_depth: usize,
}

impl FunctionStats {
    /// Empty statistics for a function.
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            ..Default::default()
        }
    }

    /// Fold another set of statistics for the same function into this one.
    pub fn merge(&mut self, other: &FunctionStats) {
        self.calls += other.calls;
        self.primitive_calls += other.primitive_calls;
        self.total_time += other.total_time;
        self.cumulative_time += other.cumulative_time;
        self.max_depth = self.max_depth.max(other.max_depth);
    }

    /// `tottime` per call.
    pub fn total_per_call(&self) -> Duration {
        per_call(self.total_time, self.calls)
    }

    /// `cumtime` per primitive call.
    pub fn cumulative_per_call(&self) -> Duration {
        per_call(self.cumulative_time, self.primitive_calls)
    }
}

fn per_call(time: Duration, calls: u64) -> Duration {
    if calls == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(time.as_secs_f64() / calls as f64)
}

/// Everything one comparison session produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Session identifier
    pub run_id: RunId,

    /// When the session started
    pub started_at: Time,

    /// Wall-clock duration of the whole session
    pub elapsed: Duration,

    /// Recursion ceiling in force
    pub recursion_limit: usize,

    /// One entry per problem instance, in run order
    pub comparisons: Vec<Comparison>,

    /// Profile rows, sorted by own time descending
    pub profile: Vec<FunctionStats>,

    /// Peak resident set size in KiB, when the platform reports it
    pub peak_memory_kib: Option<u64>,
}

impl SessionReport {
    /// Total calls across all profiled functions.
    pub fn total_calls(&self) -> u64 {
        self.profile.iter().map(|s| s.calls).sum()
    }

    /// Total primitive calls across all profiled functions.
    pub fn total_primitive_calls(&self) -> u64 {
        self.profile.iter().map(|s| s.primitive_calls).sum()
    }

    /// Comparisons in which the recursive strategy hit the depth ceiling.
    pub fn depth_failures(&self) -> impl Iterator<Item = &Comparison> {
        self.comparisons.iter().filter(|c| {
            c.recursive
                .outcome
                .error()
                .is_some_and(StrategyError::is_recursion_limit)
        })
    }
}
