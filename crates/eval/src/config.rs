//! Evaluator configuration.

use duet_core::{EvalError, Result, DEFAULT_RECURSION_LIMIT};

/// Highest recursion ceiling the evaluator accepts.
pub const MAX_RECURSION_LIMIT: usize = 20_000;

/// Default cap on input magnitude.
pub const DEFAULT_MAX_INPUT: u64 = 100_000;

/// Native stack reserved per tracked frame when sizing a worker thread.
const FRAME_STACK_BYTES: usize = 8 * 1024;

/// Native stack reserved for everything outside the tracked frames.
const BASE_STACK_BYTES: usize = 8 * 1024 * 1024;

/// Configuration for the dual-strategy evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Maximum nested frames a recursive strategy may open
    pub recursion_limit: usize,
    /// Inputs with a larger magnitude are rejected before running
    pub max_input: u64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            max_input: DEFAULT_MAX_INPUT,
        }
    }
}

impl EvaluatorConfig {
    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.recursion_limit == 0 || self.recursion_limit > MAX_RECURSION_LIMIT {
            return Err(EvalError::InvalidConfig(format!(
                "recursion limit must be between 1 and {}, got {}",
                MAX_RECURSION_LIMIT, self.recursion_limit
            )));
        }
        if self.max_input == 0 {
            return Err(EvalError::InvalidConfig(
                "maximum input must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Stack size for a thread that runs comparisons under this ceiling.
    pub fn worker_stack_size(&self) -> usize {
        BASE_STACK_BYTES + self.recursion_limit * FRAME_STACK_BYTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.recursion_limit, 1000);
        assert_eq!(config.max_input, 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = EvaluatorConfig { recursion_limit: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(EvalError::InvalidConfig(_))));
    }

    #[test]
    fn test_limit_above_maximum_rejected() {
        let config = EvaluatorConfig {
            recursion_limit: MAX_RECURSION_LIMIT + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EvaluatorConfig { recursion_limit: MAX_RECURSION_LIMIT, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_max_input_rejected() {
        let config = EvaluatorConfig { max_input: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stack_grows_with_limit() {
        let small = EvaluatorConfig { recursion_limit: 10, ..Default::default() };
        let large = EvaluatorConfig { recursion_limit: 10_000, ..Default::default() };
        assert!(large.worker_stack_size() > small.worker_stack_size());
    }
}
