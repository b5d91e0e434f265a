pub mod engine;
pub mod engine_factory;
pub mod engines;
pub mod validate;
