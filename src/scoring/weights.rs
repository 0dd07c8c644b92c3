//! Term weights for migration match scoring
//!
//! The defaults mirror the longstanding hand-tuned values: the four maximal
//! term weights sum to 1.0, so a record that agrees on every field scores
//! exactly full confidence before the clamp ever matters.

use serde::{Deserialize, Serialize};

/// Weights applied to each scored term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    /// Weight for an exact (case-insensitive) title match (0.0-1.0)
    #[serde(default = "default_title_exact_weight")]
    pub title_exact: f64,

    /// Weight for one title containing the other (0.0-1.0)
    #[serde(default = "default_title_partial_weight")]
    pub title_partial: f64,

    /// Weight for an author match (0.0-1.0)
    #[serde(default = "default_author_weight")]
    pub author: f64,

    /// Weight for matching publication status (0.0-1.0)
    #[serde(default = "default_status_weight")]
    pub status: f64,

    /// Maximum weight of the genre overlap term (0.0-1.0)
    #[serde(default = "default_genre_weight")]
    pub genres: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            title_exact: default_title_exact_weight(),
            title_partial: default_title_partial_weight(),
            author: default_author_weight(),
            status: default_status_weight(),
            genres: default_genre_weight(),
        }
    }
}

impl MatchWeights {
    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    /// Validate every weight and the exact/partial title relationship
    pub fn validate(&self) -> Result<(), String> {
        let named = [
            (self.title_exact, "Exact title"),
            (self.title_partial, "Partial title"),
            (self.author, "Author"),
            (self.status, "Status"),
            (self.genres, "Genre"),
        ];
        for (weight, name) in named {
            Self::validate_weight(weight, name)?;
        }

        // A containment hit must never outscore an exact hit
        if self.title_partial > self.title_exact {
            return Err(format!(
                "Partial title weight {:.3} must not exceed exact title weight {:.3}",
                self.title_partial, self.title_exact
            ));
        }

        Ok(())
    }

    /// Maximum total a match can accumulate before the clamp
    pub fn max_total(&self) -> f64 {
        self.title_exact + self.author + self.status + self.genres
    }

    /// Normalize the maximal term weights to sum to 1.0
    ///
    /// The partial title weight is rescaled alongside the exact weight so
    /// the ratio between containment and exact hits is preserved.
    pub fn normalize(&mut self) {
        let sum = self.max_total();
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            let partial_ratio = if self.title_exact > 0.0 {
                self.title_partial / self.title_exact
            } else {
                0.0
            };
            self.title_exact /= sum;
            self.author /= sum;
            self.status /= sum;
            self.genres /= sum;
            self.title_partial = self.title_exact * partial_ratio;
        }
    }
}

pub fn default_title_exact_weight() -> f64 {
    0.5 // Title is the strongest signal two records are the same work
}
pub fn default_title_partial_weight() -> f64 {
    0.3 // Containment covers subtitle and localization variants
}
pub fn default_author_weight() -> f64 {
    0.3 // Author agreement, only counted when the source lists one
}
pub fn default_status_weight() -> f64 {
    0.1 // Status drifts between sources, so it stays a weak signal
}
pub fn default_genre_weight() -> f64 {
    0.1 // Full genre agreement, scaled down by partial overlap
}
