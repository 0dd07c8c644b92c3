//! Migration match scoring.
//!
//! Estimates how likely two catalog records describe the same work. Each
//! scored field contributes an additive weighted term and the sum is
//! clamped to the confidence scale. The scorer is total: every pair of
//! records gets a score, and missing metadata only lowers it.

mod terms;
pub mod weights;

use crate::catalog::CatalogItem;
use crate::confidence::Confidence;
use serde::{Deserialize, Serialize};

pub use weights::MatchWeights;

/// Per-term contributions for one scored pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub title: f64,        // Exact or containment hit, 0.0-0.5 at default weights
    pub author: f64,       // 0.0 or 0.3 at default weights
    pub status: f64,       // 0.0 or 0.1 at default weights
    pub genres: f64,       // Overlap-scaled, 0.0-0.1 at default weights
    pub total: Confidence, // Clamped sum of the terms
}

/// Score a candidate against a source record with the default weights.
///
/// # Examples
///
/// ```rust
/// use titleshift::catalog::{CatalogItem, PublicationStatus};
/// use titleshift::scoring::score;
///
/// let source = CatalogItem::new("Berserk").with_status(PublicationStatus::Completed);
/// let candidate = CatalogItem::new("BERSERK").with_status(PublicationStatus::Ongoing);
///
/// assert_eq!(score(&source, &candidate).value(), 0.5);
/// ```
pub fn score(source: &CatalogItem, candidate: &CatalogItem) -> Confidence {
    score_with(source, candidate, &MatchWeights::default())
}

/// Score a candidate against a source record with explicit weights
pub fn score_with(
    source: &CatalogItem,
    candidate: &CatalogItem,
    weights: &MatchWeights,
) -> Confidence {
    breakdown(source, candidate, weights).total
}

/// Score a candidate and report every term contribution
pub fn breakdown(
    source: &CatalogItem,
    candidate: &CatalogItem,
    weights: &MatchWeights,
) -> MatchBreakdown {
    let title = terms::title_term(
        &source.title,
        &candidate.title,
        weights.title_exact,
        weights.title_partial,
    );
    let author = terms::author_term(&source.author, &candidate.author, weights.author);
    let status = terms::status_term(source.status, candidate.status, weights.status);
    let genres = terms::genre_term(&source.genres, &candidate.genres, weights.genres);
    let total = Confidence::new(title + author + status + genres);

    MatchBreakdown {
        title,
        author,
        status,
        genres,
        total,
    }
}
