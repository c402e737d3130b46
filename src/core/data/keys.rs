use std::collections::HashSet;

/// An insertion-ordered set of message keys.
///
/// Reporting must be deterministic, so keys keep the order in which they were
/// discovered in the manifest or catalog. Duplicate inserts are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    ordered: Vec<String>,
    index: HashSet<String>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, returning `false` if it was already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.index.contains(&key) {
            return false;
        }
        self.index.insert(key.clone());
        self.ordered.push(key);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}
