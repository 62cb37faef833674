//! Problem identity and evaluation strategies.

use serde::{Deserialize, Serialize};

/// The numeric problems the harness knows how to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// Integer exponentiation `base^power`
    Exponent,
    /// Greatest common divisor of two integers
    Gcd,
    /// Ways to climb a staircase taking 1, 2 or 3 steps at a time
    Staircase,
}

impl ProblemKind {
    /// Short, stable name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            ProblemKind::Exponent => "exponent",
            ProblemKind::Gcd => "gcd",
            ProblemKind::Staircase => "staircase",
        }
    }
}

impl std::fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a problem is solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Explicit loops, no self-invocation
    Iterative,
    /// Self-invocation with a base case
    Recursive,
}

impl Strategy {
    /// Both strategies, in the order they are run.
    pub const ALL: [Strategy; 2] = [Strategy::Iterative, Strategy::Recursive];

    /// Lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Iterative => "iterative",
            Strategy::Recursive => "recursive",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ProblemKind::Staircase).unwrap();
        assert_eq!(json, "\"staircase\"");
    }

    #[test]
    fn test_strategy_order() {
        assert_eq!(Strategy::ALL, [Strategy::Iterative, Strategy::Recursive]);
        assert_eq!(Strategy::Recursive.to_string(), "recursive");
    }
}
