//! Holocron Core - Data model and pagination engine
//!
//! This crate provides the core data types for the Holocron object
//! graph: characters, starships, reviews, the opaque cursor codec and
//! the connection paginator used for relationship lists.

pub mod character;
pub mod connection;
pub mod cursor;
pub mod episode;
pub mod error;
pub mod query;
pub mod review;
pub mod starship;

pub use character::{Character, CharacterFields, Droid, Human};
pub use connection::{FriendsConnection, PageInfo};
pub use episode::Episode;
pub use error::{Error, Result};
pub use query::SearchResult;
pub use review::{NewReview, Review};
pub use starship::{LengthUnit, Starship, FEET_PER_METER};
