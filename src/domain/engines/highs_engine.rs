use crate::domain::engine::Engine;
use crate::error::SolveError;
use crate::models::{Direction, EngineOutcome, IntegerProgram};

use ::highs::{ColProblem, HighsModelStatus, Sense};

/// HiGHS engine implementation
pub struct HighsEngine;

impl HighsEngine {
    pub fn new() -> Self {
        HighsEngine
    }
}

impl Engine for HighsEngine {
    fn solve(&self, program: &IntegerProgram) -> Result<EngineOutcome, SolveError> {
        let sense = match program.direction {
            Direction::Maximize => Sense::Maximise,
            Direction::Minimize | Direction::None => Sense::Minimise,
        };

        let mut problem = ColProblem::new();

        // Add the >=-rows first, dropping rows that reduce to `0 >= rhs`.
        let mut row_handles = Vec::with_capacity(program.rows.len());
        for row in &program.rows {
            if row.coeffs.iter().all(|&c| c == 0) {
                if row.rhs > 0 {
                    return Ok(EngineOutcome::Infeasible);
                }
                row_handles.push(None);
                continue;
            }
            row_handles.push(Some(problem.add_row(row.rhs as f64..)));
        }

        if program.num_vars == 0 {
            return Ok(EngineOutcome::Optimal(Vec::new()));
        }

        // Columns carry the objective coefficient, the {0,1} domain and the
        // per-row factors for that variable.
        for (col_idx, &obj_coeff) in program.objective.iter().enumerate() {
            let row_factors: Vec<_> = program
                .rows
                .iter()
                .zip(row_handles.iter())
                .filter_map(|(row, handle)| {
                    let coeff = row.coeffs[col_idx];
                    match handle {
                        Some(h) if coeff != 0 => Some((*h, coeff as f64)),
                        _ => None,
                    }
                })
                .collect();

            problem.add_integer_column(obj_coeff as f64, 0.0..=1.0, &row_factors);
        }

        let mut model = problem.optimise(sense);
        model.set_option("output_flag", false);
        let solved = model.solve();

        match solved.status() {
            HighsModelStatus::Optimal => {
                let solution = solved.get_solution();
                let assignment: Vec<i64> = solution
                    .columns()
                    .iter()
                    .map(|&value| value.round() as i64)
                    .collect();
                Ok(EngineOutcome::Optimal(assignment))
            }
            HighsModelStatus::Infeasible => Ok(EngineOutcome::Infeasible),
            other => Err(SolveError::Execution(format!(
                "HiGHS stopped with status {:?}",
                other
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
