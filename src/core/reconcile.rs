//! Reconciliation of manifest keys, catalog keys and source references.
//!
//! 1. Known keys missing from the catalog are reported as undefined.
//! 2. Catalog keys that are neither known nor possibly-used are searched for
//!    in parallel, one task per key.
//! 3. Each task writes only its own result slot. Slots are merged in catalog
//!    order, so output never depends on completion order.
//!
//! The searcher prepares once before the fan-out, inside the time budget. If
//! preparing fails, every pending key fails with the same error.
//!
//! A search that fails counts as "not found". The failure is also recorded
//! separately so it can be told apart from a genuinely unused key.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::core::{
    KeySet, ManifestKeys,
    search::{KeySearcher, SearchError},
};
use crate::issues::{Report, SearchFailure};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileOptions {
    /// Upper bound on concurrent searches. `None` uses one per CPU.
    pub jobs: Option<usize>,
    /// Wall-clock budget covering searcher preparation and all searches.
    /// Preparation still running, and searches not started, when the budget
    /// runs out fail with [`SearchError::TimedOut`].
    pub timeout: Option<Duration>,
}

pub fn reconcile<S: KeySearcher>(
    manifest: &ManifestKeys,
    catalog: &KeySet,
    searcher: &S,
    options: &ReconcileOptions,
) -> Result<Report> {
    let undefined_keys: Vec<String> = manifest
        .known
        .iter()
        .filter(|key| !catalog.contains(key))
        .map(String::from)
        .collect();

    let pending: Vec<&str> = catalog
        .iter()
        .filter(|key| !manifest.known.contains(key) && !manifest.possibly_used.contains(key))
        .collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs.unwrap_or(0))
        .build()
        .context("Failed to start search workers")?;

    let deadline = options.timeout.map(|limit| Instant::now() + limit);
    let prepared = if pending.is_empty() {
        Ok(())
    } else {
        searcher.prepare(deadline)
    };

    let outcomes: Vec<Result<bool, SearchError>> = match prepared {
        Ok(()) => pool.install(|| {
            pending
                .par_iter()
                .map(|key| {
                    if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                        return Err(SearchError::TimedOut);
                    }
                    searcher.search(key)
                })
                .collect()
        }),
        Err(error) => pending.iter().map(|_| Err(error.clone())).collect(),
    };

    let mut unused_keys = Vec::new();
    let mut search_failures = Vec::new();
    for (key, outcome) in pending.iter().zip(outcomes) {
        match outcome {
            Ok(true) => {}
            Ok(false) => unused_keys.push(key.to_string()),
            Err(error) => {
                unused_keys.push(key.to_string());
                search_failures.push(SearchFailure {
                    key: key.to_string(),
                    error,
                });
            }
        }
    }

    Ok(Report {
        undefined_keys,
        unused_keys,
        search_failures,
        catalog_key_count: catalog.len(),
        searched_key_count: pending.len(),
    })
}
