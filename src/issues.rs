//! Outcome of a key check.
//!
//! A [`Report`] is a plain value: the engine never prints or exits. Callers
//! decide how to render it and which exit status it maps to.

use serde::Serialize;

use crate::core::search::SearchError;

/// A key whose search could not be performed.
///
/// The key is also listed in [`Report::unused_keys`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFailure {
    pub key: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: SearchError,
}

fn serialize_error<S: serde::Serializer>(error: &SearchError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(error)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Keys the manifest requires that the catalog does not define.
    pub undefined_keys: Vec<String>,
    /// Catalog keys with no reference in the source tree, in catalog order.
    pub unused_keys: Vec<String>,
    pub search_failures: Vec<SearchFailure>,
    pub catalog_key_count: usize,
    pub searched_key_count: usize,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.undefined_keys.is_empty() && self.unused_keys.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.undefined_keys.len() + self.unused_keys.len()
    }
}
