//! Session-wide profile aggregated from every strategy run.

use duet_core::FunctionStats;
use std::collections::HashMap;
use std::time::Duration;

/// Per-function statistics accumulated across a session.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    functions: HashMap<String, FunctionStats>,
}

impl Profile {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold statistics from one tracker into the profile.
    pub fn absorb(&mut self, stats: impl IntoIterator<Item = FunctionStats>) {
        for stat in stats {
            self.functions
                .entry(stat.function.clone())
                .or_insert_with(|| FunctionStats::new(stat.function.clone()))
                .merge(&stat);
        }
    }

    /// Statistics for one function.
    pub fn get(&self, function: &str) -> Option<&FunctionStats> {
        self.functions.get(function)
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Rows ordered by own time descending, ties broken by name.
    pub fn rows(&self) -> Vec<FunctionStats> {
        let mut rows: Vec<_> = self.functions.values().cloned().collect();
        rows.sort_by(|a, b| {
            b.total_time
                .cmp(&a.total_time)
                .then_with(|| a.function.cmp(&b.function))
        });
        rows
    }

    /// Sum of own time over all functions.
    pub fn total_time(&self) -> Duration {
        self.functions.values().map(|s| s.total_time).sum()
    }
}
