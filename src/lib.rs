//! Weight-bound queries for threshold-logic gates.
//!
//! Given an integer weight vector over binary inputs, a query asks for the
//! tightest achievable weighted sum strictly below a threshold, the tightest
//! at or above it, or whether any 0/1 selection lands inside a half-open
//! window. Each query is formulated as a small 0/1 integer program and
//! handed to a pluggable solving engine.
//!
//! ```
//! use threshold_bounds::{BoundSolver, WeightVector};
//!
//! let solver = BoundSolver::with_default_engine();
//! let weights = WeightVector::new(vec![1, 2, 3]);
//!
//! // Tightest sum strictly below 4 is 3 ({3} or {1,2}).
//! assert_eq!(solver.upper_bound(&weights, 4).unwrap(), Some(3));
//! ```

pub mod bounds;
pub mod builder;
pub mod domain;
pub mod error;
pub mod models;

pub use bounds::BoundSolver;
pub use builder::build_program;
pub use domain::engine::Engine;
pub use domain::engine_factory::{create_engine, EngineType};
pub use error::SolveError;
pub use models::{
    BoundQuery, ConstraintRow, Direction, EngineOutcome, IntegerProgram, Weight, WeightVector,
};
