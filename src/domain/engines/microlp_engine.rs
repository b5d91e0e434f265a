use crate::domain::engine::Engine;
use crate::error::SolveError;
use crate::models::{Direction, EngineOutcome, IntegerProgram};

use microlp::{ComparisonOp, Error as MicrolpError, LinearExpr, OptimizationDirection, Problem};

/// microlp engine implementation: pure-Rust simplex with branch-and-bound
/// for the integral variables. The default backend.
pub struct MicrolpEngine;

impl MicrolpEngine {
    pub fn new() -> Self {
        MicrolpEngine
    }
}

impl Engine for MicrolpEngine {
    fn solve(&self, program: &IntegerProgram) -> Result<EngineOutcome, SolveError> {
        let direction = match program.direction {
            Direction::Maximize => OptimizationDirection::Maximize,
            // Feasibility-only programs carry an all-zero objective, so the
            // direction is arbitrary.
            Direction::Minimize | Direction::None => OptimizationDirection::Minimize,
        };

        let mut problem = Problem::new(direction);
        let vars: Vec<microlp::Variable> = program
            .objective
            .iter()
            .map(|&coeff| problem.add_integer_var(coeff as f64, (0, 1)))
            .collect();

        for row in &program.rows {
            let mut expr = LinearExpr::empty();
            let mut terms = 0;
            for (i, &coeff) in row.coeffs.iter().enumerate() {
                if coeff == 0 {
                    continue;
                }
                expr.add(vars[i], coeff as f64);
                terms += 1;
            }

            // A row with no nonzero coefficient reduces to `0 >= rhs`;
            // decide it here instead of handing the engine an empty row.
            if terms == 0 {
                if row.rhs > 0 {
                    return Ok(EngineOutcome::Infeasible);
                }
                continue;
            }
            problem.add_constraint(expr, ComparisonOp::Ge, row.rhs as f64);
        }

        // Every surviving row was decided above when there are no variables.
        if program.num_vars == 0 {
            return Ok(EngineOutcome::Optimal(Vec::new()));
        }

        match problem.solve() {
            Ok(solution) => {
                let assignment: Vec<i64> = vars
                    .iter()
                    .map(|&var| solution.var_value(var).round() as i64)
                    .collect();
                Ok(EngineOutcome::Optimal(assignment))
            }
            Err(MicrolpError::Infeasible) => Ok(EngineOutcome::Infeasible),
            Err(MicrolpError::Unbounded) => Err(SolveError::Execution(
                "engine reported unbounded over {0,1} domains".to_string(),
            )),
            Err(MicrolpError::InternalError(details)) => Err(SolveError::Execution(details)),
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }
}
