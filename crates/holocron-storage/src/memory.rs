//! In-memory entity store

use crate::error::StoreResult;
use crate::seed;
use crate::traits::EntityStore;
use async_trait::async_trait;
use holocron_core::{Droid, Human, Starship};
use std::collections::BTreeMap;

/// In-memory entity store
///
/// Populated once at construction and immutable afterwards, so
/// concurrent readers need no synchronization. `BTreeMap` keys give
/// every listing a stable ascending-by-id order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    humans: BTreeMap<String, Human>,
    droids: BTreeMap<String, Droid>,
    starships: BTreeMap<String, Starship>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the canonical seed dataset
    pub fn with_default_dataset() -> Self {
        let store = seed::default_dataset();
        tracing::debug!(
            "Seeded memory store: {} humans, {} droids, {} starships",
            store.humans.len(),
            store.droids.len(),
            store.starships.len()
        );
        store
    }

    pub fn insert_human(&mut self, human: Human) {
        self.humans.insert(human.fields.id.clone(), human);
    }

    pub fn insert_droid(&mut self, droid: Droid) {
        self.droids.insert(droid.fields.id.clone(), droid);
    }

    pub fn insert_starship(&mut self, starship: Starship) {
        self.starships.insert(starship.id.clone(), starship);
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn human(&self, id: &str) -> StoreResult<Option<Human>> {
        Ok(self.humans.get(id).cloned())
    }

    async fn droid(&self, id: &str) -> StoreResult<Option<Droid>> {
        Ok(self.droids.get(id).cloned())
    }

    async fn starship(&self, id: &str) -> StoreResult<Option<Starship>> {
        Ok(self.starships.get(id).cloned())
    }

    async fn humans(&self) -> StoreResult<Vec<Human>> {
        Ok(self.humans.values().cloned().collect())
    }

    async fn droids(&self) -> StoreResult<Vec<Droid>> {
        Ok(self.droids.values().cloned().collect())
    }

    async fn starships(&self) -> StoreResult<Vec<Starship>> {
        Ok(self.starships.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_and_absence() {
        let mut store = MemoryStore::new();
        store.insert_human(Human::new("1000", "Luke Skywalker"));

        let found = store.human("1000").await.unwrap();
        assert_eq!(found.unwrap().fields.name, "Luke Skywalker");

        assert!(store.human("9999").await.unwrap().is_none());
        assert!(store.droid("1000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_listings_are_ordered_by_id() {
        let mut store = MemoryStore::new();
        store.insert_droid(Droid::new("2001", "R2-D2"));
        store.insert_droid(Droid::new("2000", "C-3PO"));

        let droids = store.droids().await.unwrap();
        let ids: Vec<&str> = droids.iter().map(|d| d.fields.id.as_str()).collect();
        assert_eq!(ids, ["2000", "2001"]);
    }

    #[tokio::test]
    async fn test_default_dataset_sanity() {
        let store = MemoryStore::with_default_dataset();

        let luke = store.human("1000").await.unwrap().unwrap();
        assert_eq!(luke.fields.name, "Luke Skywalker");
        assert_eq!(luke.fields.friend_ids, ["1002", "1003", "2000", "2001"]);

        let falcon = store.starship("3000").await.unwrap().unwrap();
        assert_eq!(falcon.length_meters, 34.37);

        assert_eq!(store.humans().await.unwrap().len(), 5);
        assert_eq!(store.droids().await.unwrap().len(), 2);
        assert_eq!(store.starships().await.unwrap().len(), 4);
    }
}
