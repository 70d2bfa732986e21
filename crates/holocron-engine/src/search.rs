//! Name search across every entity kind

use holocron_core::{Result, SearchResult};
use holocron_storage::EntityStore;
use std::sync::Arc;

/// Case-sensitive substring search over entity names
///
/// Results come back humans first, then droids, then starships, each
/// kind in the store's ascending-id order.
#[derive(Clone)]
pub struct NameSearch {
    store: Arc<dyn EntityStore>,
}

impl NameSearch {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn search(&self, text: &str) -> Result<Vec<SearchResult>> {
        let mut results = Vec::new();

        for human in self.store.humans().await? {
            if human.fields.name.contains(text) {
                results.push(SearchResult::Human(human));
            }
        }
        for droid in self.store.droids().await? {
            if droid.fields.name.contains(text) {
                results.push(SearchResult::Droid(droid));
            }
        }
        for ship in self.store.starships().await? {
            if ship.name.contains(text) {
                results.push(SearchResult::Starship(ship));
            }
        }

        tracing::debug!("Search for {:?} returned {} results", text, results.len());
        Ok(results)
    }
}
