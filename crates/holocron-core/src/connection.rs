//! Cursor-paginated view over a relationship list

use crate::cursor;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Page metadata for a connection window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    /// Cursor of the first edge in the window; `None` when empty
    pub start_cursor: Option<String>,

    /// Cursor of the last edge in the window; `None` when empty
    pub end_cursor: Option<String>,

    /// Whether ids remain beyond the window
    pub has_next_page: bool,
}

/// A request-scoped window over an ordered relationship id list
///
/// Holds the full id sequence plus a half-open window `[from, to)`
/// into it. Edge materialization is deferred: the connection itself
/// never touches a store, so a query that only asks for counts or
/// page metadata resolves nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendsConnection {
    /// Full ordered id sequence the window points into
    pub ids: Vec<String>,

    /// Window start, inclusive
    pub from: usize,

    /// Window end, exclusive
    pub to: usize,
}

impl FriendsConnection {
    /// Apply cursor/count pagination to an id list
    ///
    /// `after` is an opaque cursor naming the offset to start from
    /// (exclusive of nothing — the decoded offset is the first edge
    /// position); `first` caps the window size. A malformed cursor
    /// fails with `InvalidCursor`; a negative `first` fails with
    /// `InvalidArgument`. A well-formed cursor pointing past the end
    /// of the list yields the empty window `[from, from)` rather than
    /// an error.
    pub fn paginate(ids: Vec<String>, first: Option<i32>, after: Option<&str>) -> Result<Self> {
        let from = match after {
            Some(cursor) => cursor::decode(cursor)?,
            None => 0,
        };

        let len = ids.len();
        let to = match first {
            None => len,
            Some(n) if n < 0 => {
                return Err(Error::InvalidArgument(format!(
                    "negative page size: {}",
                    n
                )))
            }
            Some(n) => usize::min(from.saturating_add(n as usize), len),
        };
        // A cursor past the end clamps to an empty window, never a
        // backwards one.
        let to = to.max(from);

        Ok(Self { ids, from, to })
    }

    /// Number of ids in the backing list, ignoring the window
    pub fn total_count(&self) -> usize {
        self.ids.len()
    }

    /// The id subsequence selected by the window
    pub fn window(&self) -> &[String] {
        if self.from >= self.ids.len() {
            return &[];
        }
        &self.ids[self.from..self.to]
    }

    pub fn page_info(&self) -> PageInfo {
        if self.from >= self.to {
            return PageInfo {
                start_cursor: None,
                end_cursor: None,
                has_next_page: false,
            };
        }
        PageInfo {
            start_cursor: Some(cursor::encode(self.from)),
            end_cursor: Some(cursor::encode(self.to - 1)),
            has_next_page: self.to < self.ids.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("id{}", i)).collect()
    }

    #[test]
    fn test_no_arguments_selects_full_list() {
        let conn = FriendsConnection::paginate(ids(4), None, None).unwrap();
        assert_eq!((conn.from, conn.to), (0, 4));
        assert_eq!(conn.window().len(), 4);
    }

    #[test]
    fn test_first_caps_the_window() {
        let conn = FriendsConnection::paginate(ids(4), Some(2), None).unwrap();
        assert_eq!((conn.from, conn.to), (0, 2));
    }

    #[test]
    fn test_after_moves_the_start() {
        let conn =
            FriendsConnection::paginate(ids(4), Some(2), Some(&cursor::encode(1))).unwrap();
        assert_eq!((conn.from, conn.to), (1, 3));
        assert_eq!(conn.window(), ["id1".to_string(), "id2".to_string()]);
    }

    #[test]
    fn test_first_clamps_to_list_length() {
        let conn =
            FriendsConnection::paginate(ids(2), Some(5), Some(&cursor::encode(1))).unwrap();
        assert_eq!((conn.from, conn.to), (1, 2));
    }

    #[test]
    fn test_cursor_past_end_yields_empty_window() {
        let conn =
            FriendsConnection::paginate(ids(3), Some(2), Some(&cursor::encode(7))).unwrap();
        assert_eq!((conn.from, conn.to), (7, 7));
        assert!(conn.window().is_empty());
        assert!(!conn.page_info().has_next_page);
    }

    #[test]
    fn test_cursor_past_end_without_first() {
        let conn = FriendsConnection::paginate(ids(3), None, Some(&cursor::encode(7))).unwrap();
        assert_eq!((conn.from, conn.to), (7, 7));
        assert!(conn.window().is_empty());
    }

    #[test]
    fn test_negative_first_is_rejected() {
        let err = FriendsConnection::paginate(ids(3), Some(-1), None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_malformed_cursor_is_rejected() {
        let err = FriendsConnection::paginate(ids(3), Some(2), Some("garbage")).unwrap_err();
        assert!(matches!(err, Error::InvalidCursor(_)));
    }

    #[test]
    fn test_page_info() {
        let conn = FriendsConnection::paginate(ids(4), Some(2), None).unwrap();
        let info = conn.page_info();
        assert_eq!(info.start_cursor.as_deref(), Some(cursor::encode(0).as_str()));
        assert_eq!(info.end_cursor.as_deref(), Some(cursor::encode(1).as_str()));
        assert!(info.has_next_page);

        let last = FriendsConnection::paginate(ids(4), Some(2), Some(&cursor::encode(2))).unwrap();
        assert!(!last.page_info().has_next_page);
    }

    #[test]
    fn test_total_count_ignores_window() {
        let conn = FriendsConnection::paginate(ids(9), Some(2), None).unwrap();
        assert_eq!(conn.total_count(), 9);
    }
}
