//! Starship type and length unit handling

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Feet per meter, for length conversion
pub const FEET_PER_METER: f64 = 3.28084;

/// Units a length can be reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LengthUnit {
    #[default]
    Meter,
    Foot,
}

impl LengthUnit {
    /// Convert a value stored in meters into this unit
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            Self::Meter => meters,
            Self::Foot => meters * FEET_PER_METER,
        }
    }
}

impl std::str::FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "METER" => Ok(Self::Meter),
            "FOOT" => Ok(Self::Foot),
            other => Err(Error::InvalidArgument(format!(
                "unsupported length unit: {}",
                other
            ))),
        }
    }
}

/// A starship in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Starship {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Hull length, stored in meters
    pub length_meters: f64,

    /// Coordinate pairs visited, in travel order
    #[serde(default)]
    pub history: Vec<[i32; 2]>,
}

impl Starship {
    pub fn new(id: impl Into<String>, name: impl Into<String>, length_meters: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            length_meters,
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<[i32; 2]>) -> Self {
        self.history = history;
        self
    }

    /// Hull length converted to the requested unit
    pub fn length(&self, unit: LengthUnit) -> f64 {
        unit.from_meters(self.length_meters)
    }
}
