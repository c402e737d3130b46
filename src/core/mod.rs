//! Core key-reconciliation engine.
//!
//! ## Module Structure
//!
//! - `data`: Shared data types (`KeySet`)
//! - `parsers`: Manifest and catalog parsers
//! - `search`: Boundary-aware key search over a source tree
//! - `reconcile`: Combines the above into a [`Report`](crate::issues::Report)

pub mod data;
pub mod parsers;
pub mod reconcile;
pub mod search;

pub use data::KeySet;
pub use parsers::ManifestKeys;
pub use reconcile::{ReconcileOptions, reconcile};
