//! Problem instances binding an input to its iterative and recursive forms.

use crate::exponent::{calc_exp_nonrec, calc_exp_rec, EXP_ITERATIVE, EXP_RECURSIVE};
use crate::gcd::{calc_gcd_nonrec, calc_gcd_rec, GCD_ITERATIVE, GCD_RECURSIVE};
use crate::staircase::{
    count_steps_nonrec, count_steps_rec, MAX_RECURSIVE_STEPS, STEPS_ITERATIVE, STEPS_RECURSIVE,
};
use duet_core::{CallTracker, ProblemKind, Strategy, StrategyResult};
use num_bigint::{BigInt, BigUint};
use std::fmt;

/// A problem that can be solved both iteratively and recursively.
///
/// Implementations must be pure: the same input always yields the same
/// output, and the two strategies are expected to agree.
pub trait Problem {
    /// Value both strategies produce.
    type Output: PartialEq + fmt::Display;

    /// Which problem this is.
    fn kind(&self) -> ProblemKind;

    /// Size of the input, checked against the evaluator's maximum.
    fn magnitude(&self) -> u64;

    /// Problem-specific bound on [`Problem::magnitude`], tighter than the
    /// evaluator's own when the recursive form's cost is not linear.
    fn max_magnitude(&self) -> Option<u64> {
        None
    }

    /// Entry-point function name for a strategy.
    fn function(&self, strategy: Strategy) -> &'static str;

    /// Solve with explicit loops.
    fn iterative(&self) -> StrategyResult<Self::Output>;

    /// Solve by self-invocation; every call opens a frame on `tracker`.
    fn recursive(&self, tracker: &mut CallTracker) -> StrategyResult<Self::Output>;
}

/// `base^power`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponent {
    /// Base
    pub base: i64,
    /// Power; non-positive powers yield 1
    pub power: i64,
}

impl Problem for Exponent {
    type Output = BigInt;

    fn kind(&self) -> ProblemKind {
        ProblemKind::Exponent
    }

    fn magnitude(&self) -> u64 {
        self.power.max(0).unsigned_abs()
    }

    fn function(&self, strategy: Strategy) -> &'static str {
        match strategy {
            Strategy::Iterative => EXP_ITERATIVE,
            Strategy::Recursive => EXP_RECURSIVE,
        }
    }

    fn iterative(&self) -> StrategyResult<BigInt> {
        Ok(calc_exp_nonrec(self.base, self.power))
    }

    fn recursive(&self, tracker: &mut CallTracker) -> StrategyResult<BigInt> {
        calc_exp_rec(self.base, self.power, tracker)
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base={}, power={}", self.base, self.power)
    }
}

/// Greatest common divisor of two integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gcd {
    /// First operand
    pub num1: i64,
    /// Second operand
    pub num2: i64,
}

impl Problem for Gcd {
    type Output = BigInt;

    fn kind(&self) -> ProblemKind {
        ProblemKind::Gcd
    }

    fn magnitude(&self) -> u64 {
        self.num1.unsigned_abs().max(self.num2.unsigned_abs())
    }

    fn function(&self, strategy: Strategy) -> &'static str {
        match strategy {
            Strategy::Iterative => GCD_ITERATIVE,
            Strategy::Recursive => GCD_RECURSIVE,
        }
    }

    fn iterative(&self) -> StrategyResult<BigInt> {
        calc_gcd_nonrec(self.num1, self.num2)
    }

    fn recursive(&self, tracker: &mut CallTracker) -> StrategyResult<BigInt> {
        calc_gcd_rec(self.num1, self.num2, tracker)
    }
}

impl fmt::Display for Gcd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "num1={}, num2={}", self.num1, self.num2)
    }
}

/// Ways to climb `steps` stairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Staircase {
    /// Number of stairs
    pub steps: u32,
}

impl Problem for Staircase {
    type Output = BigUint;

    fn kind(&self) -> ProblemKind {
        ProblemKind::Staircase
    }

    fn magnitude(&self) -> u64 {
        u64::from(self.steps)
    }

    fn max_magnitude(&self) -> Option<u64> {
        Some(u64::from(MAX_RECURSIVE_STEPS))
    }

    fn function(&self, strategy: Strategy) -> &'static str {
        match strategy {
            Strategy::Iterative => STEPS_ITERATIVE,
            Strategy::Recursive => STEPS_RECURSIVE,
        }
    }

    fn iterative(&self) -> StrategyResult<BigUint> {
        Ok(count_steps_nonrec(self.steps))
    }

    fn recursive(&self, tracker: &mut CallTracker) -> StrategyResult<BigUint> {
        count_steps_rec(self.steps, tracker)
    }
}

impl fmt::Display for Staircase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "steps={}", self.steps)
    }
}

/// Any of the known problems, for heterogeneous run lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemInstance {
    /// Exponentiation
    Exponent(Exponent),
    /// Greatest common divisor
    Gcd(Gcd),
    /// Staircase counting
    Staircase(Staircase),
}

impl ProblemInstance {
    /// `base^power`.
    pub fn exponent(base: i64, power: i64) -> Self {
        Self::Exponent(Exponent { base, power })
    }

    /// `gcd(num1, num2)`.
    pub fn gcd(num1: i64, num2: i64) -> Self {
        Self::Gcd(Gcd { num1, num2 })
    }

    /// Staircase of `steps` stairs.
    pub fn staircase(steps: u32) -> Self {
        Self::Staircase(Staircase { steps })
    }

    /// Which problem this is.
    pub fn kind(&self) -> ProblemKind {
        match self {
            Self::Exponent(p) => p.kind(),
            Self::Gcd(p) => p.kind(),
            Self::Staircase(p) => p.kind(),
        }
    }
}

impl fmt::Display for ProblemInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exponent(p) => fmt::Display::fmt(p, f),
            Self::Gcd(p) => fmt::Display::fmt(p, f),
            Self::Staircase(p) => fmt::Display::fmt(p, f),
        }
    }
}

/// The three instances compared by a default run.
pub fn default_instances() -> Vec<ProblemInstance> {
    vec![
        ProblemInstance::exponent(7, 500),
        ProblemInstance::gcd(49, 28),
        ProblemInstance::staircase(22),
    ]
}
