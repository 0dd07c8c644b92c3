// Export modules for library usage
pub mod catalog;
pub mod config;
pub mod confidence;
pub mod errors;
pub mod ranking;
pub mod scoring;

// Re-export commonly used types
pub use crate::catalog::{CatalogItem, PublicationStatus};

pub use crate::confidence::Confidence;

pub use crate::scoring::{breakdown, score, score_with, MatchBreakdown, MatchWeights};

pub use crate::ranking::{
    auto_match, filter_by_threshold, rank_candidates, rank_candidates_par, take_top,
    ScoredCandidate,
};

pub use crate::config::{parse_config, MatcherConfig};

pub use crate::errors::ConfigError;
