//! The composed query engine

use crate::connection::{ConnectionResolver, FriendsEdge};
use crate::resolver::CharacterResolver;
use crate::reviews::ReviewLog;
use crate::search::NameSearch;
use crate::traversal::Traversal;
use chrono::{DateTime, Utc};
use holocron_core::{
    Character, CharacterFields, Droid, Episode, FriendsConnection, Human, NewReview, Result,
    Review, SearchResult, Starship,
};
use holocron_storage::EntityStore;
use std::sync::Arc;

/// The chosen one when asking about the Empire era
const EMPIRE_HERO_ID: &str = "1000";

/// Default hero for every other chapter
const DEFAULT_HERO_ID: &str = "2001";

/// Query surface over the object graph
///
/// Owns the review log and shares the read-only store with its
/// sub-resolvers. Construct one at startup and pass it by reference;
/// there is no ambient global state.
pub struct QueryEngine {
    store: Arc<dyn EntityStore>,
    resolver: CharacterResolver,
    traversal: Traversal,
    connections: ConnectionResolver,
    search: NameSearch,
    reviews: ReviewLog,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        let traversal = Traversal::new(store.clone());
        Self {
            resolver: CharacterResolver::new(store.clone()),
            connections: ConnectionResolver::new(traversal.clone()),
            search: NameSearch::new(store.clone()),
            reviews: ReviewLog::new(),
            traversal,
            store,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Entity lookup
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolve an id polymorphically (human probed before droid)
    pub async fn character(&self, id: &str) -> Result<Option<Character>> {
        self.resolver.character(id).await
    }

    pub async fn human(&self, id: &str) -> Result<Option<Human>> {
        Ok(self.store.human(id).await?)
    }

    pub async fn droid(&self, id: &str) -> Result<Option<Droid>> {
        Ok(self.store.droid(id).await?)
    }

    pub async fn starship(&self, id: &str) -> Result<Option<Starship>> {
        Ok(self.store.starship(id).await?)
    }

    /// The hero of a chapter; the Empire era has a human one
    pub async fn hero(&self, episode: Option<Episode>) -> Result<Option<Character>> {
        let id = match episode {
            Some(Episode::Empire) => EMPIRE_HERO_ID,
            _ => DEFAULT_HERO_ID,
        };
        self.resolver.character(id).await
    }

    /// Case-sensitive name search across all kinds
    pub async fn search(&self, text: &str) -> Result<Vec<SearchResult>> {
        self.search.search(text).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Relationships
    // ─────────────────────────────────────────────────────────────────────────

    /// A character's friends, order preserved, gaps kept as `None`
    pub async fn friends(&self, fields: &CharacterFields) -> Result<Vec<Option<Character>>> {
        self.traversal.friends(fields).await
    }

    /// A human's starships, missing ids dropped
    pub async fn starships(&self, human: &Human) -> Result<Vec<Starship>> {
        self.traversal.starships(human).await
    }

    /// Paginate a friend id list into a connection
    pub fn friends_connection(
        &self,
        fields: &CharacterFields,
        first: Option<i32>,
        after: Option<&str>,
    ) -> Result<FriendsConnection> {
        self.connections
            .friends_connection(fields.friend_ids.clone(), first, after)
    }

    /// Materialize a connection's edges (resolves the window only)
    pub async fn edges(&self, connection: &FriendsConnection) -> Result<Vec<FriendsEdge>> {
        self.connections.edges(connection).await
    }

    /// Resolve the full friend list behind a connection
    pub async fn connection_friends(
        &self,
        connection: &FriendsConnection,
    ) -> Result<Vec<Option<Character>>> {
        self.connections.friends(connection).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reviews
    // ─────────────────────────────────────────────────────────────────────────

    /// Store a review for an episode and return the stored value
    pub async fn create_review(&self, episode: Episode, input: NewReview) -> Result<Review> {
        self.reviews.add(episode, input).await
    }

    /// Reviews for an episode, optionally only those after `since`
    pub fn reviews(&self, episode: Episode, since: Option<DateTime<Utc>>) -> Result<Vec<Review>> {
        self.reviews.for_episode(episode, since)
    }
}
