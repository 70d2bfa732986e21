//! Review records submitted against story chapters

use crate::episode::Episode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored review
///
/// Reviews accumulate append-only per episode; there is no update or
/// delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Chapter being reviewed
    pub episode: Episode,

    /// Numeric rating
    pub stars: i32,

    /// Free-text commentary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,

    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Create a review stamped with the current wall-clock time
    pub fn new(episode: Episode, stars: i32, commentary: Option<String>) -> Self {
        Self {
            episode,
            stars,
            commentary,
            created_at: Utc::now(),
        }
    }
}

/// Data for submitting a new review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub stars: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

impl NewReview {
    pub fn new(stars: i32) -> Self {
        Self {
            stars,
            commentary: None,
        }
    }

    pub fn with_commentary(mut self, commentary: impl Into<String>) -> Self {
        self.commentary = Some(commentary.into());
        self
    }
}
