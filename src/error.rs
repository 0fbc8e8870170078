//! Error types for the presentation engine
//!
//! Nothing here reaches the visitor: every failure is either a programming
//! defect (bad embedded YAML, bad threshold literal) or is degraded to a
//! default by the caller.

use thiserror::Error;

/// Main error type for the engine
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Intersection threshold {0} is outside [0.0, 1.0]")]
    InvalidThreshold(f32),

    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    #[error("Configuration error in {source_name}: {source}")]
    Config {
        source_name: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
}

impl FolioError {
    pub(crate) fn config(source_name: &'static str, source: serde_yaml::Error) -> Self {
        Self::Config {
            source_name,
            source,
        }
    }
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, FolioError>;
