//! Catalog record types shared by the scorer and the ranking helpers

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Publication status of a title as reported by a content source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Ongoing,
    Completed,
    Hiatus,
    Cancelled,
    #[default]
    Unknown,
}

impl PublicationStatus {
    /// Get the display name for this status
    pub fn display_name(&self) -> &str {
        match self {
            PublicationStatus::Ongoing => "ongoing",
            PublicationStatus::Completed => "completed",
            PublicationStatus::Hiatus => "hiatus",
            PublicationStatus::Cancelled => "cancelled",
            PublicationStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One title record as a content source reports it.
///
/// `title` is expected to be non-empty. `author` may be blank and `genres`
/// may be empty; absent fields simply contribute nothing to a match score.
/// Sources disagree on metadata quality, so nothing here is normalized at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub status: PublicationStatus,
    #[serde(default)]
    pub genres: BTreeSet<String>,
}

impl CatalogItem {
    /// Create a new catalog item with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            status: PublicationStatus::Unknown,
            genres: BTreeSet::new(),
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the publication status
    pub fn with_status(mut self, status: PublicationStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the genre tags
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }
}
