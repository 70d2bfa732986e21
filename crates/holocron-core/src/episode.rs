//! Story chapters that characters appear in and reviews are keyed by

use serde::{Deserialize, Serialize};

/// A story chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Episode {
    NewHope,
    Empire,
    Jedi,
}

impl std::fmt::Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewHope => write!(f, "NEWHOPE"),
            Self::Empire => write!(f, "EMPIRE"),
            Self::Jedi => write!(f, "JEDI"),
        }
    }
}
