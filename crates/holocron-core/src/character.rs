//! Character types: humans, droids and the polymorphic view over them

use crate::episode::Episode;
use crate::starship::LengthUnit;
use serde::{Deserialize, Serialize};

/// Attributes shared by every character kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterFields {
    /// Unique identifier (unique within a kind)
    pub id: String,

    /// Display name
    pub name: String,

    /// Ordered ids of befriended characters; order drives pagination
    #[serde(default)]
    pub friend_ids: Vec<String>,

    /// Chapters this character appears in
    #[serde(default)]
    pub appears_in: Vec<Episode>,
}

impl CharacterFields {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            friend_ids: Vec::new(),
            appears_in: Vec::new(),
        }
    }
}

/// A human character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Human {
    #[serde(flatten)]
    pub fields: CharacterFields,

    /// Height in meters
    pub height_meters: f64,

    /// Mass in kilograms; zero when unknown
    pub mass: f64,

    /// Ordered ids of piloted starships
    #[serde(default)]
    pub starship_ids: Vec<String>,
}

impl Human {
    /// Create a new human with empty relationship lists
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            fields: CharacterFields::new(id, name),
            height_meters: 0.0,
            mass: 0.0,
            starship_ids: Vec::new(),
        }
    }

    pub fn with_height(mut self, meters: f64) -> Self {
        self.height_meters = meters;
        self
    }

    pub fn with_mass(mut self, kilograms: f64) -> Self {
        self.mass = kilograms;
        self
    }

    pub fn with_friends(mut self, ids: &[&str]) -> Self {
        self.fields.friend_ids = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_appearances(mut self, episodes: &[Episode]) -> Self {
        self.fields.appears_in = episodes.to_vec();
        self
    }

    pub fn with_starships(mut self, ids: &[&str]) -> Self {
        self.starship_ids = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Height converted to the requested unit
    pub fn height(&self, unit: LengthUnit) -> f64 {
        unit.from_meters(self.height_meters)
    }
}

/// A droid character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Droid {
    #[serde(flatten)]
    pub fields: CharacterFields,

    /// What this droid was built for (e.g. "Protocol")
    pub primary_function: String,
}

impl Droid {
    /// Create a new droid with empty relationship lists
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            fields: CharacterFields::new(id, name),
            primary_function: String::new(),
        }
    }

    pub fn with_primary_function(mut self, function: impl Into<String>) -> Self {
        self.primary_function = function.into();
        self
    }

    pub fn with_friends(mut self, ids: &[&str]) -> Self {
        self.fields.friend_ids = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_appearances(mut self, episodes: &[Episode]) -> Self {
        self.fields.appears_in = episodes.to_vec();
        self
    }
}

/// Polymorphic view over the character kinds
///
/// A closed tagged union: dispatch is by the explicit kind tag, never
/// by structural inspection. The accessors below form the capability
/// interface every character kind supports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Character {
    Human(Human),
    Droid(Droid),
}

impl Character {
    pub fn id(&self) -> &str {
        &self.fields().id
    }

    pub fn name(&self) -> &str {
        &self.fields().name
    }

    pub fn friend_ids(&self) -> &[String] {
        &self.fields().friend_ids
    }

    pub fn appears_in(&self) -> &[Episode] {
        &self.fields().appears_in
    }

    /// The shared attribute set behind the variant
    pub fn fields(&self) -> &CharacterFields {
        match self {
            Self::Human(human) => &human.fields,
            Self::Droid(droid) => &droid.fields,
        }
    }
}
