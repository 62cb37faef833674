//! Call tracking with an explicit recursion ceiling.
//!
//! Every strategy entry point, and every recursive self-call, runs inside
//! [`CallTracker::call`]. The tracker refuses to open a frame once the stack
//! holds `limit` frames, which makes the depth failure a property of the
//! configuration rather than of the native stack.
//!
//! Timing follows the deterministic-profiler convention:
//!
//! ```text
//! tottime  = elapsed - time spent in tracked callees
//! cumtime  = elapsed, counted for primitive calls only
//! ```

use crate::error::{StrategyError, StrategyResult};
use crate::measurement::FunctionStats;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Recursion ceiling used when nothing else is configured.
pub const DEFAULT_RECURSION_LIMIT: usize = 1000;

#[derive(Debug)]
struct Frame {
    function: &'static str,
    started: Instant,
    child_time: Duration,
}

/// Tracks call depth and per-function cost.
#[derive(Debug)]
pub struct CallTracker {
    limit: usize,
    stack: Vec<Frame>,
    active: HashMap<&'static str, usize>,
    stats: HashMap<&'static str, FunctionStats>,
}

impl CallTracker {
    /// Create a tracker that allows at most `limit` nested frames.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            stack: Vec::new(),
            active: HashMap::new(),
            stats: HashMap::new(),
        }
    }

    /// The recursion ceiling.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of frames currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Run `body` inside a tracked frame for `function`.
    ///
    /// Fails with [`StrategyError::RecursionLimit`] without running `body`
    /// when the stack is already at the ceiling.
    pub fn call<T>(
        &mut self,
        function: &'static str,
        body: impl FnOnce(&mut Self) -> StrategyResult<T>,
    ) -> StrategyResult<T> {
        if self.stack.len() >= self.limit {
            return Err(StrategyError::RecursionLimit {
                function: function.to_string(),
                limit: self.limit,
            });
        }

        let active = self.active.entry(function).or_insert(0);
        let primitive = *active == 0;
        *active += 1;

        self.stack.push(Frame {
            function,
            started: Instant::now(),
            child_time: Duration::ZERO,
        });
        let depth = self.stack.len();

        let result = body(self);

        if let Some(frame) = self.stack.pop() {
            self.close(frame, depth, primitive);
        }

        result
    }

    fn close(&mut self, frame: Frame, depth: usize, primitive: bool) {
        let elapsed = frame.started.elapsed();

        if let Some(active) = self.active.get_mut(frame.function) {
            *active = active.saturating_sub(1);
        }

        let stats = self
            .stats
            .entry(frame.function)
            .or_insert_with(|| FunctionStats::new(frame.function));
        stats.calls += 1;
        stats.total_time += elapsed.saturating_sub(frame.child_time);
        stats.max_depth = stats.max_depth.max(depth);
        if primitive {
            stats.primitive_calls += 1;
            stats.cumulative_time += elapsed;
        }

        if let Some(parent) = self.stack.last_mut() {
            parent.child_time += elapsed;
        }
    }

    /// Statistics recorded so far for one function.
    pub fn stats_for(&self, function: &str) -> Option<&FunctionStats> {
        self.stats.get(function)
    }

    /// Consume the tracker, yielding statistics for every function seen.
    pub fn into_stats(self) -> Vec<FunctionStats> {
        self.stats.into_values().collect()
    }
}

impl Default for CallTracker {
    fn default() -> Self {
        Self::new(DEFAULT_RECURSION_LIMIT)
    }
}
