//! Holocron Engine - Resolution and pagination over the object graph
//!
//! This crate turns the read-only entity store into a query surface:
//! polymorphic character resolution, relationship traversal,
//! cursor-paginated friend connections, name search, and the review
//! write path. Compose a [`QueryEngine`] over a store at startup and
//! thread it through explicitly; nothing here is global.

pub mod connection;
pub mod engine;
pub mod resolver;
pub mod reviews;
pub mod search;
pub mod traversal;

pub use connection::{ConnectionResolver, FriendsEdge};
pub use engine::QueryEngine;
pub use resolver::CharacterResolver;
pub use reviews::ReviewLog;
pub use search::NameSearch;
pub use traversal::Traversal;
