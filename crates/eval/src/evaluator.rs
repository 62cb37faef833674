//! The dual-strategy evaluator.

use crate::config::EvaluatorConfig;
use crate::profile::Profile;
use duet_core::{
    CallTracker, Comparison, EvalError, FunctionStats, Measurement, Outcome, Result, Strategy,
    StrategyResult, StrategyRun, Verdict,
};
use duet_problems::{Problem, ProblemInstance};
use std::fmt;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Runs both strategies of a problem on the same input and compares them.
///
/// ```text
/// guard input → iterative → recursive → compare → Comparison
/// ```
///
/// Each strategy run gets a fresh [`CallTracker`] bounded by the configured
/// recursion ceiling. Tracker statistics are folded into a session-wide
/// [`Profile`].
#[derive(Debug)]
pub struct DualStrategyEvaluator {
    config: EvaluatorConfig,
    profile: Profile,
}

impl DualStrategyEvaluator {
    /// Create an evaluator, rejecting out-of-range configuration.
    pub fn new(config: EvaluatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            profile: Profile::new(),
        })
    }

    /// The configuration in force.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Profile accumulated so far.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Compare the two strategies of `problem`.
    ///
    /// Strategy failures are recorded in the returned [`Comparison`]. Only a
    /// disagreement between two completed strategies, or an oversized input,
    /// is an error.
    pub fn evaluate<P>(&mut self, problem: &P) -> Result<Comparison>
    where
        P: Problem + fmt::Display,
    {
        let input = problem.to_string();
        let magnitude = problem.magnitude();
        let max = problem
            .max_magnitude()
            .map_or(self.config.max_input, |cap| cap.min(self.config.max_input));
        if magnitude > max {
            return Err(EvalError::InputTooLarge {
                problem: problem.kind(),
                input,
                magnitude,
                max,
            });
        }

        info!("Comparing {} ({})", problem.kind(), input);

        let (iterative_result, iterative) = self.measure(problem, Strategy::Iterative);
        let (recursive_result, recursive) = self.measure(problem, Strategy::Recursive);

        let verdict = match (&iterative_result, &recursive_result) {
            (Ok(a), Ok(b)) if a == b => Verdict::Agreed,
            (Ok(a), Ok(b)) => {
                error!("{} strategies disagree for {}: {} != {}", problem.kind(), input, a, b);
                return Err(EvalError::Mismatch {
                    problem: problem.kind(),
                    input,
                    iterative: a.to_string(),
                    recursive: b.to_string(),
                });
            }
            _ => Verdict::Inconclusive,
        };

        Ok(Comparison {
            problem: problem.kind(),
            input,
            iterative: StrategyRun {
                outcome: outcome(iterative_result),
                measurement: iterative,
            },
            recursive: StrategyRun {
                outcome: outcome(recursive_result),
                measurement: recursive,
            },
            verdict,
        })
    }

    /// Compare the two strategies of any known problem.
    pub fn evaluate_instance(&mut self, instance: &ProblemInstance) -> Result<Comparison> {
        match instance {
            ProblemInstance::Exponent(p) => self.evaluate(p),
            ProblemInstance::Gcd(p) => self.evaluate(p),
            ProblemInstance::Staircase(p) => self.evaluate(p),
        }
    }

    fn measure<P: Problem>(
        &mut self,
        problem: &P,
        strategy: Strategy,
    ) -> (StrategyResult<P::Output>, Measurement) {
        let function = problem.function(strategy);
        let mut tracker = CallTracker::new(self.config.recursion_limit);

        let started = Instant::now();
        let result = match strategy {
            Strategy::Iterative => tracker.call(function, |_| problem.iterative()),
            Strategy::Recursive => problem.recursive(&mut tracker),
        };
        let elapsed = started.elapsed();

        let stats = tracker
            .stats_for(function)
            .cloned()
            .unwrap_or_else(|| FunctionStats::new(function));
        self.profile.absorb(tracker.into_stats());

        match &result {
            Ok(_) => debug!(
                "{} {} finished in {:?} ({} calls)",
                strategy, function, elapsed, stats.calls
            ),
            Err(e) => warn!("{} {} failed: {}", strategy, function, e),
        }

        let measurement = Measurement {
            strategy,
            function: function.to_string(),
            elapsed,
            calls: stats.calls,
            primitive_calls: stats.primitive_calls,
            max_depth: stats.max_depth,
        };

        (result, measurement)
    }
}

fn outcome<T: fmt::Display>(result: StrategyResult<T>) -> Outcome {
    match result {
        Ok(value) => Outcome::Completed {
            value: value.to_string(),
        },
        Err(error) => Outcome::Failed { error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duet_core::{ProblemKind, StrategyError};
    use duet_problems::{Exponent, Gcd, Staircase};

    fn evaluator(recursion_limit: usize) -> DualStrategyEvaluator {
        DualStrategyEvaluator::new(EvaluatorConfig {
            recursion_limit,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_exponent_agrees_under_default_ceiling() {
        let mut evaluator = evaluator(1000);
        let comparison = evaluator.evaluate(&Exponent { base: 7, power: 500 }).unwrap();

        assert_eq!(comparison.verdict, Verdict::Agreed);
        assert_eq!(comparison.iterative.outcome, comparison.recursive.outcome);
        assert_eq!(comparison.iterative.measurement.calls, 1);
        assert_eq!(comparison.recursive.measurement.calls, 501);
        assert_eq!(comparison.recursive.measurement.max_depth, 501);
    }

    #[test]
    fn test_depth_failure_is_recorded_not_raised() {
        let mut evaluator = evaluator(100);
        let comparison = evaluator.evaluate(&Exponent { base: 7, power: 500 }).unwrap();

        assert_eq!(comparison.verdict, Verdict::Inconclusive);
        assert!(comparison.iterative.outcome.value().is_some());
        assert_eq!(
            comparison.recursive.outcome.error(),
            Some(&StrategyError::RecursionLimit {
                function: "calc_exp_rec".to_string(),
                limit: 100
            })
        );
        assert_eq!(comparison.recursive.measurement.calls, 100);
    }

    #[test]
    fn test_gcd_forty_nine_twenty_eight() {
        let mut evaluator = evaluator(1000);
        let comparison = evaluator.evaluate(&Gcd { num1: 49, num2: 28 }).unwrap();
        assert_eq!(comparison.verdict, Verdict::Agreed);
        assert_eq!(comparison.recursive.outcome.value(), Some("7"));
        assert_eq!(comparison.recursive.measurement.calls, 3);
    }

    #[test]
    fn test_mismatch_is_an_error() {
        let mut evaluator = evaluator(1000);
        let err = evaluator.evaluate(&Gcd { num1: 10, num2: 4 }).unwrap_err();
        assert_eq!(
            err,
            EvalError::Mismatch {
                problem: ProblemKind::Gcd,
                input: "num1=10, num2=4".to_string(),
                iterative: "2".to_string(),
                recursive: "-2".to_string(),
            }
        );
    }

    #[test]
    fn test_oversized_input_rejected_before_running() {
        let mut evaluator = DualStrategyEvaluator::new(EvaluatorConfig {
            max_input: 30,
            ..Default::default()
        })
        .unwrap();

        let err = evaluator.evaluate(&Staircase { steps: 31 }).unwrap_err();
        assert!(matches!(err, EvalError::InputTooLarge { magnitude: 31, max: 30, .. }));
        assert!(evaluator.profile().is_empty());
    }

    #[test]
    fn test_staircase_capped_below_max_input() {
        let mut evaluator = evaluator(1000);

        let err = evaluator.evaluate(&Staircase { steps: 200 }).unwrap_err();
        assert!(matches!(err, EvalError::InputTooLarge { magnitude: 200, max: 30, .. }));
        assert!(evaluator.profile().is_empty());

        let comparison = evaluator.evaluate(&Staircase { steps: 10 }).unwrap();
        assert_eq!(comparison.recursive.outcome.value(), Some("274"));
    }

    #[test]
    fn test_profile_accumulates_across_instances() {
        let mut evaluator = evaluator(1000);
        for instance in duet_problems::default_instances() {
            evaluator.evaluate_instance(&instance).unwrap();
        }

        let profile = evaluator.profile();
        assert_eq!(profile.get("count_steps_rec").unwrap().calls, 235_957);
        assert_eq!(profile.get("calc_exp_rec").unwrap().calls, 501);
        assert_eq!(profile.get("calc_gcd_rec").unwrap().calls, 3);
        assert_eq!(profile.get("count_steps_nonrec").unwrap().calls, 1);
        assert_eq!(profile.rows().len(), 6);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = DualStrategyEvaluator::new(EvaluatorConfig {
            recursion_limit: 0,
            ..Default::default()
        });
        assert!(matches!(result, Err(EvalError::InvalidConfig(_))));
    }
}
