//! Entity store trait definition

use crate::error::StoreResult;
use async_trait::async_trait;
use holocron_core::{Droid, Human, Starship};

/// Trait for entity store implementations
///
/// The store is seeded once at process start and treated as read-only
/// by everything that consumes it. Lookups return `Ok(None)` for
/// unknown ids; an `Err` means the backend itself failed.
#[async_trait]
pub trait EntityStore: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Lookup by id
    // ─────────────────────────────────────────────────────────────────────────

    /// Get a human by id
    async fn human(&self, id: &str) -> StoreResult<Option<Human>>;

    /// Get a droid by id
    async fn droid(&self, id: &str) -> StoreResult<Option<Droid>>;

    /// Get a starship by id
    async fn starship(&self, id: &str) -> StoreResult<Option<Starship>>;

    // ─────────────────────────────────────────────────────────────────────────
    // Listing by kind
    // ─────────────────────────────────────────────────────────────────────────
    //
    // Listings are ordered ascending by id so that every consumer
    // (search in particular) sees a deterministic within-kind order.

    /// All humans, ascending by id
    async fn humans(&self) -> StoreResult<Vec<Human>>;

    /// All droids, ascending by id
    async fn droids(&self) -> StoreResult<Vec<Droid>>;

    /// All starships, ascending by id
    async fn starships(&self) -> StoreResult<Vec<Starship>>;
}
