use log::debug;

use crate::builder::build_program;
use crate::domain::engine::Engine;
use crate::domain::engine_factory::{create_engine, EngineType};
use crate::domain::validate::validate_witness;
use crate::error::SolveError;
use crate::models::{BoundQuery, EngineOutcome, WeightVector};

/// Answers threshold bound queries by formulating one 0/1 integer program
/// per call and handing it to the configured engine.
///
/// Each query is self-contained: the program and the returned witness live
/// only for the duration of the call, and no result is carried across calls.
/// Any accumulation over successive queries is the caller's own state.
pub struct BoundSolver {
    engine: Box<dyn Engine>,
}

impl BoundSolver {
    pub fn new(engine: Box<dyn Engine>) -> Self {
        BoundSolver { engine }
    }

    /// Solver backed by the default engine.
    pub fn with_default_engine() -> Self {
        BoundSolver::new(create_engine(EngineType::Microlp))
    }

    /// Maximum achievable weighted sum strictly below `threshold`.
    ///
    /// `Ok(None)` means no 0/1 selection stays below the threshold; that is
    /// an expected outcome, distinct from engine failures.
    pub fn upper_bound(
        &self,
        weights: &WeightVector,
        threshold: i64,
    ) -> Result<Option<i64>, SolveError> {
        self.bound(weights, BoundQuery::UpperBound { threshold })
    }

    /// Minimum achievable weighted sum at or above `threshold`.
    ///
    /// `Ok(None)` means every 0/1 selection stays below the threshold.
    pub fn lower_bound(
        &self,
        weights: &WeightVector,
        threshold: i64,
    ) -> Result<Option<i64>, SolveError> {
        self.bound(weights, BoundQuery::LowerBound { threshold })
    }

    /// Whether some 0/1 selection satisfies `lower <= sum < upper`.
    ///
    /// Engine failures surface as errors; they are never reported as an
    /// infeasible window, so a malfunctioning backend cannot hide behind a
    /// logically valid "false".
    pub fn is_feasible(
        &self,
        weights: &WeightVector,
        upper: i64,
        lower: i64,
    ) -> Result<bool, SolveError> {
        let program = build_program(weights, BoundQuery::Feasibility { upper, lower });
        debug!(
            "checking {} <= sum < {} over {} variables with {}",
            lower,
            upper,
            weights.len(),
            self.engine.name()
        );

        match self.engine.solve(&program)? {
            EngineOutcome::Optimal(assignment) => {
                validate_witness(program.num_vars, &assignment)?;
                Ok(true)
            }
            EngineOutcome::Infeasible => Ok(false),
        }
    }

    fn bound(&self, weights: &WeightVector, query: BoundQuery) -> Result<Option<i64>, SolveError> {
        let program = build_program(weights, query);
        debug!(
            "solving {:?} over {} variables with {}",
            query,
            weights.len(),
            self.engine.name()
        );

        match self.engine.solve(&program)? {
            EngineOutcome::Optimal(assignment) => {
                validate_witness(program.num_vars, &assignment)?;
                // Recompute the sum from the witness; the engine's reported
                // objective is not trusted across the sign flip used for
                // upper-bound rows.
                Ok(Some(weights.weighted_sum(&assignment)))
            }
            EngineOutcome::Infeasible => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IntegerProgram;

    /// Engine stub that replays a fixed outcome, for exercising the result
    /// plumbing without a real backend.
    struct FixedEngine(Result<EngineOutcome, SolveError>);

    impl Engine for FixedEngine {
        fn solve(&self, _program: &IntegerProgram) -> Result<EngineOutcome, SolveError> {
            self.0.clone()
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_bound_recomputes_sum_from_witness() {
        let solver = BoundSolver::new(Box::new(FixedEngine(Ok(EngineOutcome::Optimal(vec![
            1, 0, 1,
        ])))));
        let weights = WeightVector::new(vec![1, 2, 3]);
        assert_eq!(solver.upper_bound(&weights, 10).unwrap(), Some(4));
    }

    #[test]
    fn test_bound_maps_infeasible_to_none() {
        let solver = BoundSolver::new(Box::new(FixedEngine(Ok(EngineOutcome::Infeasible))));
        let weights = WeightVector::new(vec![1, 2, 3]);
        assert_eq!(solver.lower_bound(&weights, 100).unwrap(), None);
    }

    #[test]
    fn test_bound_rejects_short_witness() {
        let solver = BoundSolver::new(Box::new(FixedEngine(Ok(EngineOutcome::Optimal(vec![1])))));
        let weights = WeightVector::new(vec![1, 2, 3]);
        let err = solver.upper_bound(&weights, 10).unwrap_err();
        assert!(matches!(err, SolveError::ContractViolation(_)));
    }

    #[test]
    fn test_bound_rejects_negative_witness_value() {
        let solver = BoundSolver::new(Box::new(FixedEngine(Ok(EngineOutcome::Optimal(vec![
            1, -1, 0,
        ])))));
        let weights = WeightVector::new(vec![1, 2, 3]);
        let err = solver.lower_bound(&weights, 0).unwrap_err();
        assert!(matches!(err, SolveError::ContractViolation(_)));
    }

    #[test]
    fn test_is_feasible_does_not_hide_engine_failures() {
        let solver = BoundSolver::new(Box::new(FixedEngine(Err(SolveError::Execution(
            "iteration limit".to_string(),
        )))));
        let weights = WeightVector::new(vec![5]);
        let err = solver.is_feasible(&weights, 5, 5).unwrap_err();
        assert_eq!(err, SolveError::Execution("iteration limit".to_string()));
    }
}
