//! Holocron Storage - Entity store boundary
//!
//! This crate owns the read-only store interface the resolution
//! engine queries against, plus the seeded in-memory backend. Entity
//! data is populated once at startup and never mutated afterwards.

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::EntityStore;
