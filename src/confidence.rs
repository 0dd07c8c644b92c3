//! Clamped confidence scale for migration match scoring.
//!
//! Every score the crate hands out lives on a single 0-1 scale. Encoding
//! the clamp in a newtype keeps out-of-range and non-finite values from
//! ever reaching ranking order or threshold comparisons.
//!
//! # Examples
//!
//! ```rust
//! use titleshift::confidence::Confidence;
//!
//! // Create confidences with automatic bounds enforcement
//! let confidence = Confidence::new(0.85);
//! assert_eq!(confidence.value(), 0.85);
//!
//! // Out-of-bounds values are clamped
//! let clamped = Confidence::new(1.5);
//! assert_eq!(clamped.value(), 1.0);
//!
//! // Non-finite values collapse to zero
//! let guarded = Confidence::new(f64::NAN);
//! assert_eq!(guarded.value(), 0.0);
//! ```

use serde::{Deserialize, Serialize};

/// Match confidence on the 0-1 scale.
///
/// A value of 1.0 means every scored field agrees; 0.0 means nothing does.
/// Values are automatically clamped to the [0.0, 1.0] range and non-finite
/// input collapses to 0.0, so derived comparisons behave totally.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// No confidence at all
    pub const ZERO: Confidence = Confidence(0.0);

    /// Every scored field agrees
    pub const CERTAIN: Confidence = Confidence(1.0);

    /// Create a new confidence, clamping to [0.0, 1.0].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use titleshift::confidence::Confidence;
    /// let confidence = Confidence::new(0.85);
    /// assert_eq!(confidence.value(), 0.85);
    ///
    /// let clamped = Confidence::new(-0.2);
    /// assert_eq!(clamped.value(), 0.0);
    /// ```
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw confidence value.
    pub fn value(self) -> f64 {
        self.0
    }
}

// Implement Display for user-facing output
impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
