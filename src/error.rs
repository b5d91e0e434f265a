use thiserror::Error;

/// Failure modes of one bound query.
///
/// Infeasibility is deliberately absent: a query whose constraint set admits
/// no assignment is a normal outcome and is reported through the result
/// value (`None` / `false`), never through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The engine could not allocate or build its internal model.
    #[error("engine could not build model: {0}")]
    Construction(String),

    /// The engine ran but stopped short of optimality for a reason other
    /// than infeasibility (numerical trouble, iteration limits).
    #[error("engine failed to solve: {0}")]
    Execution(String),

    /// The returned assignment breaks the formulation contract: wrong
    /// length, a negative value, or a value outside {0,1}. Indicates an
    /// engine/formulation mismatch and aborts the query.
    #[error("witness contract violated: {0}")]
    ContractViolation(String),
}
