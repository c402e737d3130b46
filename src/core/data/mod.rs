//! Core data types shared by the parsers and the reconciliation engine.

pub mod keys;

pub use keys::KeySet;
