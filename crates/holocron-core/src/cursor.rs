//! Opaque pagination cursor codec
//!
//! A cursor is the base64 (standard alphabet) encoding of the ASCII
//! string `cursor<offset>`, where `<offset>` is a zero-based decimal
//! position in a relationship list. The string carries no ordering
//! semantics; only `decode(encode(i)) == i` is guaranteed.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Literal prefix embedded before the offset numeral
const CURSOR_PREFIX: &str = "cursor";

/// Encode a zero-based offset as an opaque cursor
pub fn encode(offset: usize) -> String {
    STANDARD.encode(format!("{}{}", CURSOR_PREFIX, offset))
}

/// Decode an opaque cursor back to its offset
///
/// Fails with `InvalidCursor` on invalid base64, a missing prefix, or
/// a non-numeric remainder.
pub fn decode(cursor: &str) -> Result<usize> {
    let bytes = STANDARD
        .decode(cursor)
        .map_err(|e| Error::InvalidCursor(format!("not valid base64: {}", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| Error::InvalidCursor(format!("not valid UTF-8: {}", e)))?;
    let digits = text
        .strip_prefix(CURSOR_PREFIX)
        .ok_or_else(|| Error::InvalidCursor(format!("missing '{}' prefix", CURSOR_PREFIX)))?;
    digits
        .parse::<usize>()
        .map_err(|e| Error::InvalidCursor(format!("bad offset '{}': {}", digits, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for offset in [0, 1, 2, 41, 1000, usize::MAX] {
            assert_eq!(decode(&encode(offset)).unwrap(), offset);
        }
    }

    #[test]
    fn test_known_encoding() {
        // base64("cursor1") — fixed wire format
        assert_eq!(encode(1), "Y3Vyc29yMQ==");
    }

    #[test]
    fn test_rejects_invalid_base64() {
        let err = decode("not base64!!").unwrap_err();
        assert!(matches!(err, Error::InvalidCursor(_)));
    }

    #[test]
    fn test_rejects_missing_prefix() {
        let cursor = STANDARD.encode("offset7");
        let err = decode(&cursor).unwrap_err();
        assert!(matches!(err, Error::InvalidCursor(_)));
    }

    #[test]
    fn test_rejects_non_numeric_offset() {
        let cursor = STANDARD.encode("cursorabc");
        let err = decode(&cursor).unwrap_err();
        assert!(matches!(err, Error::InvalidCursor(_)));
    }

    #[test]
    fn test_rejects_negative_offset() {
        let cursor = STANDARD.encode("cursor-1");
        let err = decode(&cursor).unwrap_err();
        assert!(matches!(err, Error::InvalidCursor(_)));
    }

    #[test]
    fn test_rejects_empty_offset() {
        let cursor = STANDARD.encode("cursor");
        assert!(decode(&cursor).is_err());
    }
}
