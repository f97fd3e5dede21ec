
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// AssetKey
///
/// Ordered path segments uniquely identifying one catalog asset.
/// Segment order is significant; equality, hashing, and ordering are
/// structural, with ordering lexicographic over segments so that sorted keys
/// agree with the sorted order of their serialized paths.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Eq, Hash, IntoIterator, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct AssetKey(Vec<String>);

impl AssetKey {
    /// Build a key from ordered path segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Borrow the ordered path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this key agrees with `prefix` on every position up to its
    /// length.
    #[must_use]
    pub fn starts_with(&self, prefix: &[String]) -> bool {
        self.starts_with_parts(prefix, &[])
    }

    /// Whether this key agrees with `prefix ++ tail` on every position up to
    /// the combined length.
    #[must_use]
    pub fn starts_with_parts(&self, prefix: &[String], tail: &[String]) -> bool {
        let total = prefix.len().saturating_add(tail.len());

        self.0.len() >= total
            && self
                .0
                .iter()
                .zip(prefix.iter().chain(tail))
                .all(|(segment, expected)| segment == expected)
    }

    /// The namespace slice immediately after `prefix_len`: at most one
    /// segment.
    ///
    /// Keys no longer than the prefix yield an empty slice; grouping treats
    /// those as one shared anonymous namespace.
    #[must_use]
    pub fn namespace(&self, prefix_len: usize) -> &[String] {
        let start = prefix_len.min(self.0.len());
        let end = prefix_len.saturating_add(1).min(self.0.len());

        &self.0[start..end]
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

///
/// CatalogEntry
///
/// Seam between the paginator and the caller's asset records. Entries are
/// opaque payload; only the key participates in windowing and grouping.
///

pub trait CatalogEntry {
    fn key(&self) -> &AssetKey;
}

// A bare key is a valid entry; tests and thin callers rely on this.
impl CatalogEntry for AssetKey {
    fn key(&self) -> &Self {
        self
    }
}
