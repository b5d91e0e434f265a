pub mod microlp_engine;

#[cfg(feature = "highs-solver")]
pub mod highs_engine;

pub use microlp_engine::MicrolpEngine;

#[cfg(feature = "highs-solver")]
pub use highs_engine::HighsEngine;
