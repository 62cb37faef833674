//! The numeric problems compared by duet.
//!
//! Each problem comes as a pair of free functions, one iterative and one
//! recursive. The recursive forms take a [`duet_core::CallTracker`], which
//! carries the recursion ceiling and records their call cost.

#![warn(missing_docs)]

pub mod exponent;
pub mod gcd;
pub mod staircase;
pub mod problem;

pub use exponent::{calc_exp_nonrec, calc_exp_rec};
pub use gcd::{calc_gcd_nonrec, calc_gcd_rec};
pub use staircase::{count_steps_nonrec, count_steps_rec};
pub use problem::{default_instances, Exponent, Gcd, Problem, ProblemInstance, Staircase};
