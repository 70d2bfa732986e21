//! Canonical seed dataset
//!
//! By convention ids are partitioned by numeric prefix: 1000s are
//! humans, 2000s droids, 3000s starships. Nothing enforces this
//! structurally; the polymorphic probe relies on it not colliding.

use crate::memory::MemoryStore;
use holocron_core::{Droid, Episode, Human, Starship};

const ALL_EPISODES: [Episode; 3] = [Episode::NewHope, Episode::Empire, Episode::Jedi];

/// Build the canonical dataset the catalog ships with
pub fn default_dataset() -> MemoryStore {
    let mut store = MemoryStore::new();

    store.insert_human(
        Human::new("1000", "Luke Skywalker")
            .with_height(1.72)
            .with_mass(77.0)
            .with_friends(&["1002", "1003", "2000", "2001"])
            .with_appearances(&ALL_EPISODES)
            .with_starships(&["3001", "3003"]),
    );
    store.insert_human(
        Human::new("1001", "Darth Vader")
            .with_height(2.02)
            .with_mass(136.0)
            .with_friends(&["1004"])
            .with_appearances(&ALL_EPISODES)
            .with_starships(&["3002"]),
    );
    store.insert_human(
        Human::new("1002", "Han Solo")
            .with_height(1.8)
            .with_mass(80.0)
            .with_friends(&["1000", "1003", "2001"])
            .with_appearances(&ALL_EPISODES)
            .with_starships(&["3000", "3003"]),
    );
    store.insert_human(
        Human::new("1003", "Leia Organa")
            .with_height(1.5)
            .with_mass(49.0)
            .with_friends(&["1000", "1002", "2000", "2001"])
            .with_appearances(&ALL_EPISODES),
    );
    store.insert_human(
        Human::new("1004", "Wilhuff Tarkin")
            .with_height(1.8)
            .with_friends(&["1001"])
            .with_appearances(&[Episode::NewHope]),
    );

    store.insert_droid(
        Droid::new("2000", "C-3PO")
            .with_primary_function("Protocol")
            .with_friends(&["1000", "1002", "1003", "2001"])
            .with_appearances(&ALL_EPISODES),
    );
    store.insert_droid(
        Droid::new("2001", "R2-D2")
            .with_primary_function("Astromech")
            .with_friends(&["1000", "1002", "1003"])
            .with_appearances(&ALL_EPISODES),
    );

    store.insert_starship(
        Starship::new("3000", "Millennium Falcon", 34.37)
            .with_history(vec![[1, 2], [4, 5], [1, 2], [3, 2]]),
    );
    store.insert_starship(
        Starship::new("3001", "X-Wing", 12.5)
            .with_history(vec![[6, 4], [3, 2], [2, 3], [5, 1]]),
    );
    store.insert_starship(
        Starship::new("3002", "TIE Advanced x1", 9.2)
            .with_history(vec![[3, 2], [7, 2], [6, 4], [3, 2]]),
    );
    store.insert_starship(
        Starship::new("3003", "Imperial shuttle", 20.0)
            .with_history(vec![[1, 7], [3, 5], [5, 3], [7, 1]]),
    );

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::EntityStore;

    #[tokio::test]
    async fn test_relationship_lists_reference_seeded_ids() {
        let store = default_dataset();

        for human in store.humans().await.unwrap() {
            for id in &human.starship_ids {
                assert!(
                    store.starship(id).await.unwrap().is_some(),
                    "dangling starship id {} on {}",
                    id,
                    human.fields.name
                );
            }
        }
    }

    #[tokio::test]
    async fn test_tarkin_has_no_mass_on_record() {
        let store = default_dataset();
        let tarkin = store.human("1004").await.unwrap().unwrap();
        assert_eq!(tarkin.mass, 0.0);
        assert!(tarkin.starship_ids.is_empty());
    }
}
