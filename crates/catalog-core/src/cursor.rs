//! Module: cursor
//! Responsibility: the pagination boundary value and its opaque wire token.
//! Does not own: windowing semantics or view-state persistence.
//! Boundary: tokens cross into user-editable URL state and back.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// Defensive decode bound for untrusted cursor token input.
const MAX_CURSOR_TOKEN_LEN: usize = 8 * 1024;

///
/// CursorDecodeError
///

#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum CursorDecodeError {
    #[error("cursor token is empty")]
    Empty,

    #[error("cursor token exceeds max length: {len} chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("cursor token is not a JSON string array: {reason}")]
    Malformed { reason: String },
}

///
/// PageCursor
///
/// Ordered segment tuple marking a pagination boundary: the navigation prefix
/// concatenated with either a full asset key or a one-segment namespace.
/// Equality and ordering are structural and lexicographic over segments; the
/// JSON-array token form exists only for addressable-state persistence and
/// stays opaque outside this module.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PageCursor(Vec<String>);

impl PageCursor {
    /// Build a boundary cursor from the navigation prefix and a key or
    /// namespace tail.
    #[must_use]
    pub fn from_parts(prefix: &[String], tail: &[String]) -> Self {
        let mut segments = Vec::with_capacity(prefix.len() + tail.len());
        segments.extend_from_slice(prefix);
        segments.extend_from_slice(tail);

        Self(segments)
    }

    /// Borrow the ordered boundary segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Encode this cursor as its opaque JSON-array wire token.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::Value::from(self.0.clone()).to_string()
    }

    /// Decode an opaque wire token back into a cursor.
    ///
    /// Tokens arrive from user-editable URL state, so decoding is bounded and
    /// strict: trimmed, length-capped, and the payload must be a JSON array
    /// of strings.
    pub fn decode(token: &str) -> Result<Self, CursorDecodeError> {
        let token = token.trim();

        if token.is_empty() {
            return Err(CursorDecodeError::Empty);
        }

        if token.len() > MAX_CURSOR_TOKEN_LEN {
            return Err(CursorDecodeError::TooLong {
                len: token.len(),
                max: MAX_CURSOR_TOKEN_LEN,
            });
        }

        let segments: Vec<String> =
            serde_json::from_str(token).map_err(|err| CursorDecodeError::Malformed {
                reason: err.to_string(),
            })?;

        Ok(Self(segments))
    }

    /// Ordering of the candidate boundary `prefix ++ tail` relative to this
    /// cursor, without materializing the concatenation.
    #[must_use]
    pub fn boundary_cmp(&self, prefix: &[String], tail: &[String]) -> Ordering {
        prefix
            .iter()
            .chain(tail)
            .map(String::as_str)
            .cmp(self.0.iter().map(String::as_str))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{CursorDecodeError, MAX_CURSOR_TOKEN_LEN, PageCursor};
    use proptest::prelude::*;
    use std::cmp::Ordering;

    fn parts(segments: &[&str]) -> Vec<String> {
        segments.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn from_parts_concatenates_prefix_and_tail() {
        let cursor = PageCursor::from_parts(&parts(&["warehouse"]), &parts(&["raw", "events"]));
        assert_eq!(cursor.segments(), parts(&["warehouse", "raw", "events"]));
    }

    #[test]
    fn encode_produces_the_json_array_token() {
        let cursor = PageCursor::from_parts(&parts(&["warehouse"]), &parts(&["raw"]));
        assert_eq!(cursor.encode(), r#"["warehouse","raw"]"#);
    }

    #[test]
    fn decode_rejects_empty_and_whitespace_tokens() {
        let err = PageCursor::decode("").expect_err("empty token should be rejected");
        assert_eq!(err, CursorDecodeError::Empty);

        let err = PageCursor::decode("  \n\t").expect_err("whitespace token should be rejected");
        assert_eq!(err, CursorDecodeError::Empty);
    }

    #[test]
    fn decode_enforces_max_token_length() {
        let padding = "a".repeat(MAX_CURSOR_TOKEN_LEN);
        let oversized = format!("[\"{padding}\"]");

        let err = PageCursor::decode(&oversized).expect_err("oversized token should be rejected");
        assert_eq!(
            err,
            CursorDecodeError::TooLong {
                len: oversized.len(),
                max: MAX_CURSOR_TOKEN_LEN,
            }
        );
    }

    #[test]
    fn decode_rejects_non_array_and_non_string_payloads() {
        for token in ["{}", "\"warehouse\"", "[1,2]", "[\"a\",null]", "not json"] {
            let result = PageCursor::decode(token);
            assert!(
                matches!(result, Err(CursorDecodeError::Malformed { .. })),
                "token {token:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn decode_accepts_surrounding_whitespace() {
        let cursor =
            PageCursor::decode("  [\"warehouse\",\"raw\"]  ").expect("padded token should decode");
        assert_eq!(cursor.segments(), parts(&["warehouse", "raw"]));
    }

    #[test]
    fn boundary_cmp_matches_materialized_comparison() {
        let cursor = PageCursor::from_parts(&parts(&["warehouse"]), &parts(&["raw"]));

        let before = (parts(&["warehouse"]), parts(&["clean"]));
        let equal = (parts(&["warehouse"]), parts(&["raw"]));
        let after = (parts(&["warehouse"]), parts(&["raw", "events"]));

        assert_eq!(cursor.boundary_cmp(&before.0, &before.1), Ordering::Less);
        assert_eq!(cursor.boundary_cmp(&equal.0, &equal.1), Ordering::Equal);
        assert_eq!(cursor.boundary_cmp(&after.0, &after.1), Ordering::Greater);
    }

    proptest! {
        #[test]
        fn encode_decode_round_trip_is_stable(segments in proptest::collection::vec(".*", 0..6)) {
            let cursor = PageCursor::from_parts(&[], &segments);
            let decoded = PageCursor::decode(&cursor.encode()).expect("encoded token should decode");
            prop_assert_eq!(decoded, cursor);
        }

        #[test]
        fn boundary_cmp_agrees_with_cursor_ordering(
            prefix in proptest::collection::vec("[a-z]{0,4}", 0..3),
            tail in proptest::collection::vec("[a-z]{0,4}", 0..3),
            other in proptest::collection::vec("[a-z]{0,4}", 0..5),
        ) {
            let cursor = PageCursor::from_parts(&[], &other);
            let candidate = PageCursor::from_parts(&prefix, &tail);
            prop_assert_eq!(cursor.boundary_cmp(&prefix, &tail), candidate.cmp(&cursor));
        }
    }
}
