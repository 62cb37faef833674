//! Comparison sessions: a run list evaluated back to back.

use crate::config::EvaluatorConfig;
use crate::evaluator::DualStrategyEvaluator;
use crate::memory::peak_rss_kib;
use duet_core::{Result, RunId, SessionReport};
use duet_problems::ProblemInstance;
use std::time::Instant;
use tracing::info;

/// Evaluates problem instances in order and collects a [`SessionReport`].
///
/// A mismatch aborts the session; every other failure is recorded in the
/// comparison it belongs to and the session carries on.
#[derive(Debug)]
pub struct ComparisonSession {
    run_id: RunId,
    evaluator: DualStrategyEvaluator,
}

impl ComparisonSession {
    /// Create a session with a fresh run id.
    pub fn new(config: EvaluatorConfig) -> Result<Self> {
        Ok(Self {
            run_id: RunId::new(),
            evaluator: DualStrategyEvaluator::new(config)?,
        })
    }

    /// This session's id.
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Evaluate every instance and build the report.
    pub fn run(mut self, instances: &[ProblemInstance]) -> Result<SessionReport> {
        let started_at = chrono::Utc::now();
        let started = Instant::now();
        info!("Starting session {} with {} problems", self.run_id, instances.len());

        let mut comparisons = Vec::with_capacity(instances.len());
        for instance in instances {
            comparisons.push(self.evaluator.evaluate_instance(instance)?);
        }

        let elapsed = started.elapsed();
        info!("Session {} finished in {:?}", self.run_id, elapsed);

        Ok(SessionReport {
            run_id: self.run_id,
            started_at,
            elapsed,
            recursion_limit: self.evaluator.config().recursion_limit,
            comparisons,
            profile: self.evaluator.profile().rows(),
            peak_memory_kib: peak_rss_kib(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duet_core::{EvalError, Verdict};
    use duet_problems::default_instances;

    #[test]
    fn test_default_session() {
        let session = ComparisonSession::new(EvaluatorConfig::default()).unwrap();
        let run_id = session.run_id();
        let report = session.run(&default_instances()).unwrap();

        assert_eq!(report.run_id, run_id);
        assert_eq!(report.comparisons.len(), 3);
        assert!(report.comparisons.iter().all(|c| c.verdict == Verdict::Agreed));
        assert_eq!(report.comparisons[2].recursive.outcome.value(), Some("410744"));
        assert_eq!(report.profile[0].function, "count_steps_rec");
        assert_eq!(report.total_calls(), 1 + 501 + 1 + 3 + 1 + 235_957);
        assert_eq!(report.total_primitive_calls(), 6);
    }

    #[test]
    fn test_depth_failure_does_not_stop_session() {
        let config = EvaluatorConfig { recursion_limit: 100, ..Default::default() };
        let report = ComparisonSession::new(config)
            .unwrap()
            .run(&default_instances())
            .unwrap();

        assert_eq!(report.comparisons.len(), 3);
        assert_eq!(report.comparisons[0].verdict, Verdict::Inconclusive);
        assert_eq!(report.comparisons[1].verdict, Verdict::Agreed);
        assert_eq!(report.comparisons[2].verdict, Verdict::Agreed);
        assert_eq!(report.depth_failures().count(), 1);
        assert_eq!(report.recursion_limit, 100);
    }

    #[test]
    fn test_mismatch_aborts_session() {
        let instances = vec![
            ProblemInstance::gcd(10, 4),
            ProblemInstance::staircase(5),
        ];
        let err = ComparisonSession::new(EvaluatorConfig::default())
            .unwrap()
            .run(&instances)
            .unwrap_err();
        assert!(matches!(err, EvalError::Mismatch { .. }));
    }

    #[test]
    fn test_oversized_input_aborts_session() {
        let config = EvaluatorConfig { max_input: 10, ..Default::default() };
        let err = ComparisonSession::new(config)
            .unwrap()
            .run(&[ProblemInstance::staircase(11)])
            .unwrap_err();
        assert!(matches!(err, EvalError::InputTooLarge { .. }));
    }
}
