//! Error taxonomy for strategy runs and comparisons.

use crate::ProblemKind;
use serde::{Deserialize, Serialize};

/// Result of running one strategy.
pub type StrategyResult<T> = std::result::Result<T, StrategyError>;

/// Failures confined to a single measurement.
///
/// These are caught by the evaluator and reported as the outcome of the
/// strategy that produced them; the comparison run carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyError {
    /// The recursion ceiling was reached
    #[error("recursive variant exceeded depth limit of {limit} in {function}")]
    RecursionLimit {
        /// Function whose frame could not be entered
        function: String,
        /// Configured ceiling
        limit: usize,
    },

    /// A modulo by zero was attempted
    #[error("division by zero in {function}")]
    DivisionByZero {
        /// Function that divided
        function: String,
    },

    /// The divisor scan finished without finding any divisor
    #[error("no common divisor found for {num1} and {num2}")]
    NoCommonDivisor {
        /// First operand
        num1: i64,
        /// Second operand
        num2: i64,
    },
}

impl StrategyError {
    /// Whether this is the expected depth-ceiling failure.
    pub fn is_recursion_limit(&self) -> bool {
        matches!(self, StrategyError::RecursionLimit { .. })
    }
}

/// Session-level result type.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors that abort a comparison run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Both strategies completed but disagree
    #[error("{problem} strategies disagree for {input}: iterative = {iterative}, recursive = {recursive}")]
    Mismatch {
        /// Problem being compared
        problem: ProblemKind,
        /// Rendered input
        input: String,
        /// Iterative result
        iterative: String,
        /// Recursive result
        recursive: String,
    },

    /// Input rejected before either strategy ran
    #[error("input {input} for {problem} has magnitude {magnitude}, above the maximum of {max}")]
    InputTooLarge {
        /// Problem being compared
        problem: ProblemKind,
        /// Rendered input
        input: String,
        /// Measured magnitude
        magnitude: u64,
        /// Maximum in force for this problem
        max: u64,
    },

    /// Evaluator configuration out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursion_limit_message() {
        let err = StrategyError::RecursionLimit {
            function: "calc_exp_rec".to_string(),
            limit: 1000,
        };
        assert!(err.is_recursion_limit());
        assert_eq!(
            err.to_string(),
            "recursive variant exceeded depth limit of 1000 in calc_exp_rec"
        );
    }

    #[test]
    fn test_strategy_error_serializes_tagged() {
        let err = StrategyError::DivisionByZero {
            function: "calc_gcd_rec".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "division_by_zero");
        assert_eq!(json["function"], "calc_gcd_rec");
    }

    #[test]
    fn test_mismatch_message_names_both_values() {
        let err = EvalError::Mismatch {
            problem: ProblemKind::Gcd,
            input: "num1=10, num2=4".to_string(),
            iterative: "2".to_string(),
            recursive: "-2".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("gcd strategies disagree"));
        assert!(message.contains("iterative = 2"));
        assert!(message.contains("recursive = -2"));
    }
}
