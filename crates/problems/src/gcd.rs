//! Greatest common divisor, in the two forms the harness compares.
//!
//! Neither form is the Euclidean algorithm. The iterative form scans every
//! candidate divisor; the recursive form reduces by subtraction and is only
//! correct for some inputs. When the two disagree the evaluator reports a
//! mismatch.

use duet_core::{CallTracker, StrategyError, StrategyResult};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;

/// Function name of the iterative form.
pub const GCD_ITERATIVE: &str = "calc_gcd_nonrec";
/// Function name of the recursive form.
pub const GCD_RECURSIVE: &str = "calc_gcd_rec";

/// Largest integer in `1..=min(num1, num2)` dividing both operands.
///
/// Fails with [`StrategyError::NoCommonDivisor`] when the scan range is empty,
/// i.e. when the smaller operand is below 1.
pub fn calc_gcd_nonrec(num1: i64, num2: i64) -> StrategyResult<BigInt> {
    let small = if num1 > num2 { num2 } else { num1 };

    (1..=small)
        .filter(|i| num1 % i == 0 && num2 % i == 0)
        .last()
        .map(BigInt::from)
        .ok_or(StrategyError::NoCommonDivisor { num1, num2 })
}

/// `num2` if it divides `num1`, otherwise `f(num2, num1 - num2)`.
///
/// Remainders use floored division, so the result carries the divisor's sign.
/// With `num1 < num2` the operands grow in magnitude each step and only the
/// recursion ceiling stops them.
pub fn calc_gcd_rec(
    num1: impl Into<BigInt>,
    num2: impl Into<BigInt>,
    tracker: &mut CallTracker,
) -> StrategyResult<BigInt> {
    subtract_step(num1.into(), num2.into(), tracker)
}

fn subtract_step(num1: BigInt, num2: BigInt, tracker: &mut CallTracker) -> StrategyResult<BigInt> {
    tracker.call(GCD_RECURSIVE, |tracker| {
        if is_zero(&floored_rem(&num1, &num2)?) {
            return Ok(num2);
        }
        let next = num1 - &num2;
        subtract_step(num2, next, tracker)
    })
}

fn floored_rem(a: &BigInt, b: &BigInt) -> StrategyResult<BigInt> {
    if is_zero(b) {
        return Err(StrategyError::DivisionByZero {
            function: GCD_RECURSIVE.to_string(),
        });
    }
    Ok(a.mod_floor(b))
}

fn is_zero(n: &BigInt) -> bool {
    n.sign() == Sign::NoSign
}
