use crate::domain::engine::Engine;
use crate::domain::engines::MicrolpEngine;

#[cfg(feature = "highs-solver")]
use crate::domain::engines::HighsEngine;

/// Available engine backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineType {
    Microlp,
    #[cfg(feature = "highs-solver")]
    Highs,
}

impl EngineType {
    /// Parse engine type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "microlp" => Some(EngineType::Microlp),
            #[cfg(feature = "highs-solver")]
            "highs" => Some(EngineType::Highs),
            _ => None,
        }
    }
}

/// Create an engine instance based on the specified type
pub fn create_engine(engine_type: EngineType) -> Box<dyn Engine> {
    match engine_type {
        EngineType::Microlp => Box::new(MicrolpEngine::new()),
        #[cfg(feature = "highs-solver")]
        EngineType::Highs => Box::new(HighsEngine::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_type_from_str() {
        assert_eq!(EngineType::from_str("microlp"), Some(EngineType::Microlp));
        assert_eq!(EngineType::from_str("Microlp"), Some(EngineType::Microlp));
        #[cfg(feature = "highs-solver")]
        assert_eq!(EngineType::from_str("highs"), Some(EngineType::Highs));
        #[cfg(feature = "highs-solver")]
        assert_eq!(EngineType::from_str("HiGHS"), Some(EngineType::Highs));
        assert_eq!(EngineType::from_str("unknown"), None);
    }

    #[test]
    fn test_create_microlp_engine() {
        let engine = create_engine(EngineType::Microlp);
        assert_eq!(engine.name(), "microlp");
    }

    #[cfg(feature = "highs-solver")]
    #[test]
    fn test_create_highs_engine() {
        let engine = create_engine(EngineType::Highs);
        assert_eq!(engine.name(), "HiGHS");
    }
}
