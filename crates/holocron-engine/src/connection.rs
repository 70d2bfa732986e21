//! Friend connection resolution
//!
//! Pagination arithmetic lives in `holocron_core::connection`; this
//! module materializes a connection's edges against the store, which
//! is deferred until the edges are actually requested.

use crate::traversal::Traversal;
use holocron_core::{cursor, Character, FriendsConnection, Result};
use serde::{Deserialize, Serialize};

/// One element of a connection: a resolved node plus the cursor
/// marking its absolute offset in the backing id list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendsEdge {
    pub cursor: String,

    /// `None` when the id at this position no longer resolves
    pub node: Option<Character>,
}

/// Resolves connection fields that need store access
#[derive(Clone)]
pub struct ConnectionResolver {
    traversal: Traversal,
}

impl ConnectionResolver {
    pub fn new(traversal: Traversal) -> Self {
        Self { traversal }
    }

    /// Build a paginated connection over a friend id list
    pub fn friends_connection(
        &self,
        ids: Vec<String>,
        first: Option<i32>,
        after: Option<&str>,
    ) -> Result<FriendsConnection> {
        FriendsConnection::paginate(ids, first, after)
    }

    /// Materialize the edges of a connection's window
    ///
    /// Only ids inside `[from, to)` are resolved. Each edge's cursor
    /// encodes its absolute offset in the full list, so it can be fed
    /// back as `after` to continue from that position.
    pub async fn edges(&self, connection: &FriendsConnection) -> Result<Vec<FriendsEdge>> {
        let nodes = self.traversal.resolver().characters(connection.window()).await?;
        Ok(nodes
            .into_iter()
            .enumerate()
            .map(|(i, node)| FriendsEdge {
                cursor: cursor::encode(connection.from + i),
                node,
            })
            .collect())
    }

    /// Resolve the full friend list behind a connection, ignoring the
    /// window
    pub async fn friends(&self, connection: &FriendsConnection) -> Result<Vec<Option<Character>>> {
        self.traversal.resolver().characters(&connection.ids).await
    }
}
