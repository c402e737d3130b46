//! Textual key search over a source tree.
//!
//! ## Module Structure
//!
//! - `pattern`: Boundary-anchored regex built from an escaped key
//! - `tree`: In-process searcher that walks and caches a source tree

pub mod pattern;
pub mod tree;

use std::time::Instant;

use thiserror::Error;

pub use pattern::{KeyPattern, key_pattern};
pub use tree::{Exclusions, TreeSearcher};

/// A search that could not be performed, as opposed to one that found nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid search pattern: {0}")]
    Pattern(String),
    #[error("source tree unavailable: {0}")]
    Unavailable(String),
    #[error("search time budget exhausted")]
    TimedOut,
}

/// Capability to look up textual references to a message key.
///
/// Implementations must be safe to call from many threads at once; the
/// reconciliation engine issues one search per unresolved catalog key.
pub trait KeySearcher: Sync {
    /// Does one-off work shared by every search before any search starts.
    ///
    /// Work still running at `deadline` fails with [`SearchError::TimedOut`].
    fn prepare(&self, _deadline: Option<Instant>) -> Result<(), SearchError> {
        Ok(())
    }

    /// Returns `Ok(true)` if `key` is referenced as a standalone token.
    fn search(&self, key: &str) -> Result<bool, SearchError>;
}
