//! Query result types

use crate::character::{Droid, Human};
use crate::starship::Starship;
use serde::{Deserialize, Serialize};

/// A polymorphic search hit
///
/// Search spans every kind in the catalog; results keep their
/// concrete type so callers can dispatch on kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchResult {
    Human(Human),
    Droid(Droid),
    Starship(Starship),
}

impl SearchResult {
    pub fn id(&self) -> &str {
        match self {
            Self::Human(human) => &human.fields.id,
            Self::Droid(droid) => &droid.fields.id,
            Self::Starship(ship) => &ship.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Human(human) => &human.fields.name,
            Self::Droid(droid) => &droid.fields.name,
            Self::Starship(ship) => &ship.name,
        }
    }
}
