//! Shared error types for the crate

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading matcher configuration.
///
/// Scoring and ranking are total over their inputs, so configuration is
/// the only fallible surface the crate exposes.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Weight set rejected by validation
    #[error("Invalid match weights: {0}")]
    InvalidWeights(String),

    /// Auto-match threshold outside the confidence range
    #[error("Auto-match threshold {0} must be between 0.0 and 1.0")]
    InvalidThreshold(f64),
}

impl ConfigError {
    /// Create a read error with path context
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
