//! Append-only review log
//!
//! The only mutator in the engine. Reviews accumulate per episode;
//! writers serialize on the lock so concurrent submissions to the
//! same episode never lose an entry, and readers only ever see fully
//! appended records.

use chrono::{DateTime, Utc};
use holocron_core::{Episode, Error, NewReview, Result, Review};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

/// Processing time charged to every review write. Shapes the write
/// path's observable timing; correctness does not depend on it.
const REVIEW_WRITE_DELAY: Duration = Duration::from_millis(25);

/// Per-episode review storage
///
/// The backing map is never handed out; mutation goes through
/// [`ReviewLog::add`] only.
#[derive(Debug, Default)]
pub struct ReviewLog {
    reviews: RwLock<HashMap<Episode, Vec<Review>>>,
}

impl ReviewLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a review, stamping it with the current wall-clock time
    ///
    /// Not idempotent: repeated identical submissions append repeated
    /// records. The timestamp is server-assigned; client content is
    /// stored verbatim.
    pub async fn add(&self, episode: Episode, input: NewReview) -> Result<Review> {
        // Synthetic processing delay, taken before the lock so
        // writers only serialize on the append itself.
        tokio::time::sleep(REVIEW_WRITE_DELAY).await;

        let review = Review::new(episode, input.stars, input.commentary);
        {
            let mut reviews = self
                .reviews
                .write()
                .map_err(|e| Error::Internal(format!("Lock error: {}", e)))?;
            reviews.entry(episode).or_default().push(review.clone());
        }

        tracing::info!("Stored review for {}: {} stars", episode, review.stars);
        Ok(review)
    }

    /// Reviews stored for an episode, in submission order
    ///
    /// `since` keeps only reviews created strictly after the given
    /// instant.
    pub fn for_episode(
        &self,
        episode: Episode,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Review>> {
        let reviews = self
            .reviews
            .read()
            .map_err(|e| Error::Internal(format!("Lock error: {}", e)))?;
        let stored = reviews.get(&episode).map(Vec::as_slice).unwrap_or(&[]);
        Ok(stored
            .iter()
            .filter(|r| since.map_or(true, |t| r.created_at > t))
            .cloned()
            .collect())
    }
}
