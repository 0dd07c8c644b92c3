//! Matcher configuration, loaded from a `titleshift.toml` file.
//!
//! Loading is forgiving the way long-running importers need it to be:
//! unreadable files and out-of-range values fall back to defaults with a
//! warning instead of aborting a migration run. Callers that build a
//! [`MatcherConfig`] in code can use [`MatcherConfig::validate`] for strict
//! checking.

use crate::confidence::Confidence;
use crate::errors::ConfigError;
use crate::scoring::MatchWeights;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for scoring and unattended match selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum confidence for unattended match selection (0.0-1.0)
    #[serde(default = "default_auto_match_threshold")]
    pub auto_match_threshold: f64,

    /// Term weights for the scorer
    #[serde(default)]
    pub weights: MatchWeights,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            auto_match_threshold: default_auto_match_threshold(),
            weights: MatchWeights::default(),
        }
    }
}

impl MatcherConfig {
    /// Strictly validate weights and threshold
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights
            .validate()
            .map_err(ConfigError::InvalidWeights)?;

        if !is_valid_threshold(self.auto_match_threshold) {
            return Err(ConfigError::InvalidThreshold(self.auto_match_threshold));
        }

        Ok(())
    }

    /// The auto-match threshold as a typed confidence
    pub fn threshold(&self) -> Confidence {
        Confidence::new(self.auto_match_threshold)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigError::read(path, source))?;
        parse_config(&contents)
    }

    /// Load configuration from a file, falling back to defaults on any failure.
    ///
    /// A missing file is the normal case and only logged at debug level.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::debug!("Loaded matcher config from {}", path.display());
                config
            }
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::debug!("No config at {}. Using defaults.", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{}. Using default matcher config.", e);
                Self::default()
            }
        }
    }
}

/// Pure function to parse config from TOML contents.
///
/// Malformed TOML is an error; out-of-range weights or threshold values
/// are replaced with defaults so one bad number cannot take down a run.
pub fn parse_config(contents: &str) -> Result<MatcherConfig, ConfigError> {
    let mut config: MatcherConfig = toml::from_str(contents)?;

    if let Err(reason) = config.weights.validate() {
        log::warn!("Invalid match weights: {}. Using defaults.", reason);
        config.weights = MatchWeights::default();
    }

    if !is_valid_threshold(config.auto_match_threshold) {
        log::warn!(
            "Auto-match threshold {} out of range. Using default.",
            config.auto_match_threshold
        );
        config.auto_match_threshold = default_auto_match_threshold();
    }

    Ok(config)
}

fn is_valid_threshold(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

pub fn default_auto_match_threshold() -> f64 {
    0.75 // Above any single-field coincidence; a title match alone scores 0.5
}
