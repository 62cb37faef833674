//! Integer exponentiation by repeated multiplication.

use duet_core::{CallTracker, StrategyResult};
use num_bigint::BigInt;

/// Function name of the iterative form.
pub const EXP_ITERATIVE: &str = "calc_exp_nonrec";
/// Function name of the recursive form.
pub const EXP_RECURSIVE: &str = "calc_exp_rec";

/// `base^power` by multiplying `base` into an accumulator `power` times.
///
/// Non-positive powers yield 1.
pub fn calc_exp_nonrec(base: i64, power: i64) -> BigInt {
    let mut total = BigInt::from(1);
    if power <= 0 {
        return total;
    }
    for _ in 0..power {
        total *= base;
    }
    total
}

/// `base^power` as `base * f(base, power - 1)`.
///
/// Opens one tracked frame per call, so `power + 1` frames in total.
pub fn calc_exp_rec(base: i64, power: i64, tracker: &mut CallTracker) -> StrategyResult<BigInt> {
    tracker.call(EXP_RECURSIVE, |tracker| {
        if power <= 0 {
            return Ok(BigInt::from(1));
        }
        Ok(calc_exp_rec(base, power - 1, tracker)? * base)
    })
}
