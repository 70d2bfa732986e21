//! Polymorphic character resolution

use holocron_core::{Character, Result};
use holocron_storage::EntityStore;
use std::sync::Arc;

/// Resolves bare identifiers to concrete character variants
#[derive(Clone)]
pub struct CharacterResolver {
    store: Arc<dyn EntityStore>,
}

impl CharacterResolver {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Resolve an id to its concrete character kind
    ///
    /// Probes the human map first, then the droid map; the first match
    /// wins. The seed data keeps id spaces disjoint by numeric-prefix
    /// convention, but nothing enforces that, so the probe order is
    /// part of the contract. An unknown id is `Ok(None)`, not an
    /// error.
    pub async fn character(&self, id: &str) -> Result<Option<Character>> {
        if let Some(human) = self.store.human(id).await? {
            return Ok(Some(Character::Human(human)));
        }
        if let Some(droid) = self.store.droid(id).await? {
            return Ok(Some(Character::Droid(droid)));
        }
        Ok(None)
    }

    /// Resolve a list of ids, preserving length and order
    ///
    /// Missing ids resolve to `None` in place (a gap, not a failure).
    /// A hard store error aborts the whole call with the first error
    /// encountered.
    pub async fn characters(&self, ids: &[String]) -> Result<Vec<Option<Character>>> {
        let mut resolved = Vec::with_capacity(ids.len());
        for id in ids {
            resolved.push(self.character(id).await?);
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_core::{Droid, Human};
    use holocron_storage::MemoryStore;

    fn resolver() -> CharacterResolver {
        let mut store = MemoryStore::new();
        store.insert_human(Human::new("1000", "Luke Skywalker"));
        store.insert_droid(Droid::new("2000", "C-3PO"));
        CharacterResolver::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_dispatches_to_concrete_kind() {
        let resolver = resolver();

        let luke = resolver.character("1000").await.unwrap().unwrap();
        assert!(matches!(luke, Character::Human(_)));

        let threepio = resolver.character("2000").await.unwrap().unwrap();
        assert!(matches!(threepio, Character::Droid(_)));
    }

    #[tokio::test]
    async fn test_unknown_id_is_a_gap_not_an_error() {
        let resolver = resolver();
        assert!(resolver.character("9999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_resolution_preserves_order_and_gaps() {
        let resolver = resolver();
        let ids = vec!["1000".to_string(), "2000".to_string(), "9999".to_string()];

        let resolved = resolver.characters(&ids).await.unwrap();
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].as_ref().unwrap().id(), "1000");
        assert_eq!(resolved[1].as_ref().unwrap().id(), "2000");
        assert!(resolved[2].is_none());
    }

    #[tokio::test]
    async fn test_duplicate_ids_resolve_independently() {
        let resolver = resolver();
        let ids = vec!["1000".to_string(), "1000".to_string()];

        let resolved = resolver.characters(&ids).await.unwrap();
        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|c| c.is_some()));
    }
}
