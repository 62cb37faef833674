//! Ways to climb a staircase taking 1, 2 or 3 steps at a time.
//!
//! A tribonacci-like recurrence with `f(0) = 1, f(1) = 1, f(2) = 2, f(3) = 4`
//! and `f(n) = f(n-1) + f(n-2) + f(n-3)` beyond that.

use duet_core::{CallTracker, StrategyResult};
use num_bigint::BigUint;

/// Function name of the iterative form.
pub const STEPS_ITERATIVE: &str = "count_steps_nonrec";
/// Function name of the recursive form.
pub const STEPS_RECURSIVE: &str = "count_steps_rec";

/// Largest step count the evaluator hands to the recursive form.
///
/// The triple recursion makes exponentially many calls: 30 steps already
/// take 30 905 041 calls.
pub const MAX_RECURSIVE_STEPS: u32 = 30;

const BASE_CASES: [u32; 4] = [1, 1, 2, 4];

/// Bottom-up table of counts for `0..=steps`.
pub fn count_steps_nonrec(steps: u32) -> BigUint {
    let steps = steps as usize;
    if steps < BASE_CASES.len() {
        return BigUint::from(BASE_CASES[steps]);
    }

    let mut table: Vec<BigUint> = BASE_CASES.iter().copied().map(BigUint::from).collect();
    table.reserve(steps + 1 - BASE_CASES.len());

    for i in BASE_CASES.len()..=steps {
        let next = &table[i - 1] + &table[i - 2] + &table[i - 3];
        table.push(next);
    }

    table.swap_remove(steps)
}

/// Top-down triple recursion without memoization.
///
/// Call count grows like the counts themselves; `steps = 22` makes 235 957
/// calls.
pub fn count_steps_rec(steps: u32, tracker: &mut CallTracker) -> StrategyResult<BigUint> {
    tracker.call(STEPS_RECURSIVE, |tracker| match steps {
        0..=3 => Ok(BigUint::from(BASE_CASES[steps as usize])),
        _ => {
            let total = count_steps_rec(steps - 1, tracker)?
                + count_steps_rec(steps - 2, tracker)?
                + count_steps_rec(steps - 3, tracker)?;
            Ok(total)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        let mut tracker = CallTracker::default();
        for (n, expected) in [(0, 1u32), (1, 1), (2, 2), (3, 4)] {
            assert_eq!(count_steps_nonrec(n), BigUint::from(expected));
            assert_eq!(count_steps_rec(n, &mut tracker).unwrap(), BigUint::from(expected));
        }
    }

    #[test]
    fn test_twenty_two_steps() {
        let mut tracker = CallTracker::default();
        assert_eq!(count_steps_nonrec(22), BigUint::from(410_744u32));
        assert_eq!(count_steps_rec(22, &mut tracker).unwrap(), BigUint::from(410_744u32));

        let stats = tracker.stats_for(STEPS_RECURSIVE).unwrap();
        assert_eq!(stats.calls, 235_957);
        assert_eq!(stats.primitive_calls, 1);
    }

    #[test]
    fn test_forms_agree_up_to_twenty_five() {
        for n in 0..=25 {
            let mut tracker = CallTracker::default();
            assert_eq!(
                count_steps_nonrec(n),
                count_steps_rec(n, &mut tracker).unwrap(),
                "steps = {}",
                n
            );
        }
    }

    #[test]
    fn test_iterative_counts_stay_exact_past_u128() {
        assert_eq!(
            count_steps_nonrec(200).to_string(),
            "52622583840983769603765180599790256716084480555530641"
        );
    }

    #[test]
    fn test_recursive_depth_is_linear() {
        let mut tracker = CallTracker::new(5);
        assert!(count_steps_rec(10, &mut tracker).unwrap_err().is_recursion_limit());
    }
}
