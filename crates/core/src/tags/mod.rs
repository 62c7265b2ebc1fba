//! Buyer Tags
//!
//! A small, sorted collection of merchant-assigned customer tags, used by the
//! evaluator's eligibility gate.

use serde::Deserialize;
use smallvec::SmallVec;

/// A sorted, deduplicated set of buyer tags backed by `SmallVec<[String; 5]>`.
///
/// Carts rarely carry more than a handful of tags, so small inputs stay on the
/// stack and membership checks use binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct TagSet {
    tags: SmallVec<[String; 5]>,
}

impl TagSet {
    /// Create a new tag set from owned strings, sorting and deduplicating.
    #[must_use]
    pub fn new(tags: SmallVec<[String; 5]>) -> Self {
        let mut set = Self { tags };

        set.tags.sort();
        set.tags.dedup();

        set
    }

    /// Create a new tag set from string slices.
    #[must_use]
    pub fn from_strs(tags: &[&str]) -> Self {
        Self::new(
            tags.iter()
                .map(ToString::to_string)
                .collect::<SmallVec<[String; 5]>>(),
        )
    }

    /// Check whether this set contains the given tag exactly.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags
            .binary_search_by(|probe| probe.as_str().cmp(tag))
            .is_ok()
    }

    /// Whether the set holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of tags in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Iterate the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags.into_iter().collect())
    }
}
