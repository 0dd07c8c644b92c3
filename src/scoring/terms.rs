// Pure functions for match term calculation

use crate::catalog::PublicationStatus;
use std::collections::BTreeSet;

/// Calculate the title term from the two titles
pub fn title_term(source: &str, candidate: &str, exact_weight: f64, partial_weight: f64) -> f64 {
    // Blank titles are out of contract; without the guard a blank side
    // would match every title through the vacuous containment check
    if source.trim().is_empty() || candidate.trim().is_empty() {
        return 0.0;
    }

    let source = source.to_lowercase();
    let candidate = candidate.to_lowercase();

    if source == candidate {
        exact_weight
    } else if source.contains(&candidate) || candidate.contains(&source) {
        partial_weight
    } else {
        0.0
    }
}

/// Calculate the author term, counted only when the source lists an author
pub fn author_term(source: &str, candidate: &str, weight: f64) -> f64 {
    if source.trim().is_empty() {
        return 0.0;
    }

    if source.to_lowercase() == candidate.to_lowercase() {
        weight
    } else {
        0.0
    }
}

/// Calculate the status term from the two publication statuses
pub fn status_term(source: PublicationStatus, candidate: PublicationStatus, weight: f64) -> f64 {
    if source == candidate {
        weight
    } else {
        0.0
    }
}

/// Calculate the genre term from tag overlap against the larger set
pub fn genre_term(source: &BTreeSet<String>, candidate: &BTreeSet<String>, weight: f64) -> f64 {
    let overlap = source.intersection(candidate).count();
    let denominator = source.len().max(candidate.len()).max(1);
    (overlap as f64 / denominator as f64) * weight
}
