use crate::error::SolveError;
use crate::models::{EngineOutcome, IntegerProgram};

/// Common interface for 0/1 integer-programming engines.
///
/// An engine receives the full program shape (variable count, all-integral
/// {0,1} domains, `>=` rows, objective vector and direction) and reports
/// either a witness assignment, infeasibility, or a failure. Engines never
/// interpret the query that produced the program; that stays with the bound
/// solver.
pub trait Engine: Send + Sync {
    /// Solve one program, blocking until the engine returns.
    ///
    /// # Returns
    /// * `Ok(EngineOutcome::Optimal(..))` with one value per variable
    /// * `Ok(EngineOutcome::Infeasible)` when no assignment satisfies the rows
    /// * `Err(..)` when the engine could not build or finish the solve
    fn solve(&self, program: &IntegerProgram) -> Result<EngineOutcome, SolveError>;

    /// Get the engine name for logging/debugging
    fn name(&self) -> &str;
}
