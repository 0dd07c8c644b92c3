//! Candidate ranking and unattended match selection.
//!
//! The scorer only rates pairs; ordering policy lives here. Candidates are
//! ranked by confidence descending, and ties keep the order the candidate
//! catalog arrived in, which is how search backends already sort by their
//! own relevance.

use crate::catalog::CatalogItem;
use crate::confidence::Confidence;
use crate::scoring::{self, MatchWeights};
use rayon::prelude::*;
use serde::Serialize;

/// One candidate with the confidence it earned against a source record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub item: CatalogItem,
    /// Position the candidate held in the incoming catalog order
    pub catalog_position: usize,
    pub confidence: Confidence,
}

/// Score and rank candidates against a source record.
///
/// Returns candidates sorted by confidence descending. Equal confidences
/// keep their incoming order.
pub fn rank_candidates(
    source: &CatalogItem,
    candidates: Vec<CatalogItem>,
    weights: &MatchWeights,
) -> Vec<ScoredCandidate> {
    let scored = candidates
        .into_iter()
        .enumerate()
        .map(|(position, item)| score_candidate(source, item, position, weights))
        .collect();
    sort_by_confidence(scored)
}

/// Score candidates in parallel, then rank them.
///
/// Scoring fans out across the rayon pool; the sort stays sequential and
/// stable, so the result is identical to [`rank_candidates`].
pub fn rank_candidates_par(
    source: &CatalogItem,
    candidates: Vec<CatalogItem>,
    weights: &MatchWeights,
) -> Vec<ScoredCandidate> {
    let scored = candidates
        .into_par_iter()
        .enumerate()
        .map(|(position, item)| score_candidate(source, item, position, weights))
        .collect();
    sort_by_confidence(scored)
}

fn score_candidate(
    source: &CatalogItem,
    item: CatalogItem,
    catalog_position: usize,
    weights: &MatchWeights,
) -> ScoredCandidate {
    let result = scoring::breakdown(source, &item, weights);
    log::trace!(
        "Scored candidate '{}' against '{}': {} (title {:.3}, author {:.3}, status {:.3}, genres {:.3})",
        item.title,
        source.title,
        result.total,
        result.title,
        result.author,
        result.status,
        result.genres
    );
    ScoredCandidate {
        item,
        catalog_position,
        confidence: result.total,
    }
}

/// Sorts by confidence descending (highest first); stable for ties
fn sort_by_confidence(mut items: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    items.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    items
}

/// Take the top N ranked candidates
pub fn take_top(ranked: Vec<ScoredCandidate>, limit: usize) -> Vec<ScoredCandidate> {
    ranked.into_iter().take(limit).collect()
}

/// Keep only candidates at or above the confidence cutoff
pub fn filter_by_threshold(
    ranked: Vec<ScoredCandidate>,
    min_confidence: Confidence,
) -> Vec<ScoredCandidate> {
    ranked
        .into_iter()
        .filter(|candidate| candidate.confidence >= min_confidence)
        .collect()
}

/// Pick the best candidate if it clears the threshold.
///
/// This is the unattended path: rank everything, then accept the leader
/// only when its confidence reaches `threshold`. Anything weaker is left
/// for manual review.
pub fn auto_match(
    source: &CatalogItem,
    candidates: Vec<CatalogItem>,
    threshold: Confidence,
    weights: &MatchWeights,
) -> Option<ScoredCandidate> {
    let best = rank_candidates(source, candidates, weights).into_iter().next()?;

    if best.confidence >= threshold {
        log::debug!(
            "Auto-matched '{}' to '{}' at {}",
            source.title,
            best.item.title,
            best.confidence
        );
        Some(best)
    } else {
        log::debug!(
            "No auto-match for '{}': best candidate '{}' at {} is under threshold {}",
            source.title,
            best.item.title,
            best.confidence,
            threshold
        );
        None
    }
}
