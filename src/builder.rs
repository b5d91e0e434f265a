use crate::models::{BoundQuery, ConstraintRow, Direction, IntegerProgram, WeightVector};

/// Build the 0/1 integer program for one query.
///
/// For each variable i this emits an `x_i >= 0` row and a `-x_i >= -1` row
/// on top of the integral {0,1} domain, then the threshold row(s) for the
/// query mode. Strict `sum < T` conditions become `sum <= T - 1` (written as
/// a negated `>=` row); weights and thresholds stay integers throughout, so
/// no floating-point tolerance enters the formulation.
///
/// A zero-length weight vector is not special-cased: the only assignment is
/// the empty one with sum 0, and the emitted threshold rows either admit it
/// or make the program immediately infeasible.
pub fn build_program(weights: &WeightVector, query: BoundQuery) -> IntegerProgram {
    let n = weights.len();
    let mut rows = Vec::with_capacity(2 * n + 2);

    for i in 0..n {
        // x_i >= 0
        rows.push(ConstraintRow {
            coeffs: unit_row(n, i, 1),
            rhs: 0,
        });
        // x_i <= 1, as -x_i >= -1
        rows.push(ConstraintRow {
            coeffs: unit_row(n, i, -1),
            rhs: -1,
        });
    }

    let w = weights.weights();
    let negated: Vec<i64> = w.iter().map(|&wi| -wi).collect();

    match query {
        BoundQuery::UpperBound { threshold } => {
            // sum(w x) < T, as -sum(w x) >= -T + 1
            rows.push(ConstraintRow {
                coeffs: negated,
                rhs: -threshold + 1,
            });
            IntegerProgram {
                num_vars: n,
                rows,
                objective: w.to_vec(),
                direction: Direction::Maximize,
            }
        }
        BoundQuery::LowerBound { threshold } => {
            // sum(w x) >= T
            rows.push(ConstraintRow {
                coeffs: w.to_vec(),
                rhs: threshold,
            });
            IntegerProgram {
                num_vars: n,
                rows,
                objective: w.to_vec(),
                direction: Direction::Minimize,
            }
        }
        BoundQuery::Feasibility { upper, lower } => {
            // sum(w x) < U and sum(w x) >= L, no objective
            rows.push(ConstraintRow {
                coeffs: negated,
                rhs: -upper + 1,
            });
            rows.push(ConstraintRow {
                coeffs: w.to_vec(),
                rhs: lower,
            });
            IntegerProgram {
                num_vars: n,
                rows,
                objective: vec![0; n],
                direction: Direction::None,
            }
        }
    }
}

fn unit_row(n: usize, i: usize, coeff: i64) -> Vec<i64> {
    let mut row = vec![0; n];
    row[i] = coeff;
    row
}
