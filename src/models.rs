use serde::{Deserialize, Serialize};

/// Integer weight attached to one binary decision variable.
pub type Weight = i64;

// ---------- Query-side types: owned & serde-friendly ----------

/// Ordered integer weights, one entry per binary decision variable.
///
/// Insertion order defines the variable indices `0..n-1` used throughout a
/// query; callers map those indices back onto their own input/node ordering.
/// Weights may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightVector(Vec<Weight>);

impl WeightVector {
    pub fn new(weights: Vec<Weight>) -> Self {
        WeightVector(weights)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn weights(&self) -> &[Weight] {
        &self.0
    }

    /// Weighted sum of a 0/1 assignment over these weights.
    ///
    /// The assignment must have one value per weight; bound queries always
    /// recompute their result through this instead of trusting an engine's
    /// reported objective.
    pub fn weighted_sum(&self, assignment: &[i64]) -> Weight {
        self.0.iter().zip(assignment).map(|(w, x)| w * x).sum()
    }
}

impl From<Vec<Weight>> for WeightVector {
    fn from(weights: Vec<Weight>) -> Self {
        WeightVector(weights)
    }
}

/// One bound query against a weight vector.
///
/// Exactly one mode is active per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundQuery {
    /// Maximum achievable weighted sum strictly below `threshold`.
    UpperBound { threshold: i64 },
    /// Minimum achievable weighted sum at or above `threshold`.
    LowerBound { threshold: i64 },
    /// Whether some assignment satisfies `lower <= sum < upper`.
    Feasibility { upper: i64, lower: i64 },
}

// ---------- Program (wire) types handed to an engine ----------

/// Objective direction of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Maximize,
    Minimize,
    /// Feasibility-only solve; the objective row is all zeros and any
    /// direction the engine picks is acceptable.
    None,
}

/// One `coeffs . x >= rhs` constraint row. The relation is always `>=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintRow {
    pub coeffs: Vec<i64>,
    pub rhs: i64,
}

/// The transient 0/1 integer program built for one query.
///
/// Every variable is integral with domain {0,1}; the formulation never
/// introduces other ranges. Each row `coeffs` vector has `num_vars` entries,
/// as does `objective`. Engine adapters must preserve this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerProgram {
    pub num_vars: usize,
    pub rows: Vec<ConstraintRow>,
    pub objective: Vec<i64>,
    pub direction: Direction,
}

/// What an engine reported for one solve call.
///
/// Engine failures are carried separately as [`crate::error::SolveError`];
/// infeasibility is an expected outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutcome {
    /// A witness assignment, one value per variable, each in {0,1}.
    Optimal(Vec<i64>),
    /// The constraint set admits no assignment.
    Infeasible,
}
