use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
    time::Instant,
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use super::{KeyPattern, KeySearcher, SearchError};

fn canonical_or_self(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Parts of the source tree that never count as a reference.
#[derive(Debug, Default)]
pub struct Exclusions {
    /// Directory basenames pruned wherever they appear.
    dir_names: Vec<String>,
    /// Subtrees pruned by path.
    dir_paths: Vec<PathBuf>,
    /// Individual files skipped by path.
    file_paths: Vec<PathBuf>,
    /// Directories whose direct `*.json` children are skipped.
    catalog_dirs: Vec<PathBuf>,
    /// Globs matched against file basenames.
    file_patterns: Vec<Pattern>,
}

impl Exclusions {
    /// Build exclusions for a tree rooted at `root`.
    ///
    /// Entries of `exclude_dirs` containing a `/` are treated as paths relative
    /// to `root`; the rest are directory names matched at any depth.
    pub fn new(root: &Path, exclude_dirs: &[String], exclude_files: &[String]) -> Result<Self> {
        let root = canonical_or_self(root);
        let mut exclusions = Self::default();

        for dir in exclude_dirs {
            let trimmed = dir.trim_end_matches('/');
            if trimmed.contains('/') {
                exclusions
                    .dir_paths
                    .push(canonical_or_self(&root.join(trimmed)));
            } else if !trimmed.is_empty() {
                exclusions.dir_names.push(trimmed.to_string());
            }
        }

        for pattern in exclude_files {
            let pattern = Pattern::new(pattern)
                .with_context(|| format!("Invalid exclude pattern: \"{}\"", pattern))?;
            exclusions.file_patterns.push(pattern);
        }

        Ok(exclusions)
    }

    /// Exclude the catalog and the sibling locale files next to it.
    ///
    /// Only `*.json` files directly in the catalog's directory are treated as
    /// locale files; scripts or other sources kept alongside are still
    /// searched. When the catalog sits directly in `root`, only the catalog
    /// file itself is excluded.
    pub fn with_catalog(mut self, root: &Path, catalog: &Path) -> Self {
        let root = canonical_or_self(root);
        let catalog = canonical_or_self(catalog);
        if let Some(dir) = catalog
            .parent()
            .filter(|dir| dir.starts_with(&root) && *dir != root.as_path())
        {
            self.catalog_dirs.push(dir.to_path_buf());
        }
        self.file_paths.push(catalog);
        self
    }

    fn skips_dir(&self, path: &Path) -> bool {
        let by_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.dir_names.iter().any(|d| d == name));
        by_name || self.dir_paths.iter().any(|p| path.starts_with(p))
    }

    fn skips_file(&self, path: &Path) -> bool {
        if self.file_paths.iter().any(|p| p == path) {
            return true;
        }
        if self.dir_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        let locale_file = path.extension().is_some_and(|ext| ext == "json")
            && path
                .parent()
                .is_some_and(|dir| self.catalog_dirs.iter().any(|p| p == dir));
        if locale_file {
            return true;
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.file_patterns.iter().any(|p| p.matches(name)))
    }
}

struct SourceFile {
    content: String,
}

/// Contents of every searchable file under a root, read once.
pub struct SourceTree {
    files: Vec<SourceFile>,
}

impl SourceTree {
    /// Read every searchable file under `root`.
    ///
    /// Fails with [`SearchError::TimedOut`] if the walk is still running at
    /// `deadline`.
    pub fn scan(
        root: &Path,
        exclusions: &Exclusions,
        deadline: Option<Instant>,
        verbose: bool,
    ) -> Result<Self, SearchError> {
        let root = fs::canonicalize(root)
            .map_err(|e| SearchError::Unavailable(format!("{}: {}", root.display(), e)))?;
        if !root.is_dir() {
            return Err(SearchError::Unavailable(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut files = Vec::new();
        let mut skipped_count = 0;

        // Runs inside a OnceLock initializer: no nested rayon work here.
        let walker = WalkDir::new(&root).into_iter().filter_entry(|entry| {
            entry.depth() == 0 || !entry.file_type().is_dir() || !exclusions.skips_dir(entry.path())
        });
        for entry in walker {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return Err(SearchError::TimedOut);
            }
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            if !entry.file_type().is_file() || exclusions.skips_file(entry.path()) {
                continue;
            }
            match fs::read(entry.path()) {
                Ok(bytes) => files.push(SourceFile {
                    content: String::from_utf8_lossy(&bytes).into_owned(),
                }),
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!(
                            "{} Cannot read {}: {}",
                            "warning:".bold().yellow(),
                            entry.path().display(),
                            e
                        );
                    }
                }
            }
        }

        if skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }
        if verbose {
            eprintln!(
                "{} Searching {} source file(s) under {}",
                "note:".bold().cyan(),
                files.len(),
                root.display()
            );
        }

        Ok(Self { files })
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn contains(&self, pattern: &KeyPattern) -> bool {
        self.files.iter().any(|file| pattern.is_match(&file.content))
    }
}

/// Searches a source tree that is scanned once, by [`KeySearcher::prepare`]
/// or otherwise on the first lookup.
///
/// A tree that cannot be scanned makes every search fail with the same
/// error as the scan.
pub struct TreeSearcher {
    root: PathBuf,
    exclusions: Exclusions,
    verbose: bool,
    tree: OnceLock<Result<SourceTree, SearchError>>,
}

impl TreeSearcher {
    pub fn new(root: impl Into<PathBuf>, exclusions: Exclusions, verbose: bool) -> Self {
        Self {
            root: root.into(),
            exclusions,
            verbose,
            tree: OnceLock::new(),
        }
    }

    pub fn tree(&self) -> Result<&SourceTree, SearchError> {
        self.tree_within(None)
    }

    fn tree_within(&self, deadline: Option<Instant>) -> Result<&SourceTree, SearchError> {
        self.tree
            .get_or_init(|| SourceTree::scan(&self.root, &self.exclusions, deadline, self.verbose))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl KeySearcher for TreeSearcher {
    fn prepare(&self, deadline: Option<Instant>) -> Result<(), SearchError> {
        self.tree_within(deadline).map(|_| ())
    }

    fn search(&self, key: &str) -> Result<bool, SearchError> {
        let tree = self.tree()?;
        let pattern = KeyPattern::new(key)?;
        Ok(tree.contains(&pattern))
    }
}
