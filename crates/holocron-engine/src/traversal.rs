//! Relationship traversal
//!
//! Friends are heterogeneous (human or droid) and go through the
//! polymorphic resolver, keeping a `None` slot for every missing id.
//! Starships are homogeneous and resolve directly against the
//! starship map, dropping missing ids outright. The asymmetry is
//! deliberate: the friends list feeds positional cursors, the
//! starship list does not.

use crate::resolver::CharacterResolver;
use holocron_core::{Character, CharacterFields, Human, Result, Starship};
use holocron_storage::EntityStore;
use std::sync::Arc;

/// Expands relationship id lists into resolved entities
#[derive(Clone)]
pub struct Traversal {
    resolver: CharacterResolver,
    store: Arc<dyn EntityStore>,
}

impl Traversal {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            resolver: CharacterResolver::new(store.clone()),
            store,
        }
    }

    /// The resolver this traversal dispatches characters through
    pub fn resolver(&self) -> &CharacterResolver {
        &self.resolver
    }

    /// Resolve a character's friends, gaps preserved
    pub async fn friends(&self, fields: &CharacterFields) -> Result<Vec<Option<Character>>> {
        self.resolver.characters(&fields.friend_ids).await
    }

    /// Resolve a human's starships, missing ids dropped
    pub async fn starships(&self, human: &Human) -> Result<Vec<Starship>> {
        let mut ships = Vec::new();
        for id in &human.starship_ids {
            if let Some(ship) = self.store.starship(id).await? {
                ships.push(ship);
            }
        }
        Ok(ships)
    }
}
