// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source file discovery using the ignore crate (same as ripgrep)

use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::errors::Result;

/// Extension of files the indexer parses.
pub const SOURCE_EXTENSION: &str = "py";

/// Directories skipped on every run: test suites and vendored packages.
pub const BUILTIN_IGNORE: &[&str] = &["test", "site-packages", "lib2to3"];

/// Result of one scan: eligible files and the directories pruned on the way.
#[derive(Debug, Default)]
pub struct ScannedTree {
    pub files: Vec<PathBuf>,
    pub skipped_dirs: Vec<PathBuf>,
}

/// Sequential scanner yielding eligible source files below a root.
///
/// A directory below the root whose name is in the exclusion set is pruned
/// together with everything under it. Hidden entries are never visited.
pub struct SourceScanner {
    root: PathBuf,
    exclude_dirs: HashSet<String>,
    respect_git_ignore: bool,
}

impl SourceScanner {
    /// Create a scanner that excludes only [`BUILTIN_IGNORE`].
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            exclude_dirs: BUILTIN_IGNORE.iter().map(|d| d.to_string()).collect(),
            respect_git_ignore: false,
        }
    }

    /// Add directory names to exclude on top of the built-in set.
    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs.extend(excludes.into_iter().map(Into::into));
        self
    }

    /// Enable or disable respect for git ignore rules
    pub fn with_gitignore(mut self, enabled: bool) -> Self {
        self.respect_git_ignore = enabled;
        self
    }

    fn make_builder(&self) -> WalkBuilder {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true)
            .parents(self.respect_git_ignore)
            .ignore(self.respect_git_ignore)
            .git_ignore(self.respect_git_ignore)
            .git_exclude(self.respect_git_ignore)
            .git_global(self.respect_git_ignore)
            .sort_by_file_name(|a, b| a.cmp(b));
        builder
    }

    /// Walk the tree, collecting eligible source files in traversal order.
    pub fn scan(&self) -> Result<ScannedTree> {
        let exclude_dirs = self.exclude_dirs.clone();
        let pruned = Arc::new(Mutex::new(Vec::new()));
        let pruned_in_filter = Arc::clone(&pruned);
        let walker = self
            .make_builder()
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
                if entry.depth() == 0 || !is_dir {
                    return true;
                }
                let excluded = entry
                    .file_name()
                    .to_str()
                    .map(|name| exclude_dirs.contains(name))
                    .unwrap_or(false);
                if excluded {
                    if let Ok(mut dirs) = pruned_in_filter.lock() {
                        dirs.push(entry.path().to_path_buf());
                    }
                }
                !excluded
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_source_file(path) {
                files.push(path.to_path_buf());
            }
        }

        let skipped_dirs = pruned
            .lock()
            .map(|mut dirs| std::mem::take(&mut *dirs))
            .unwrap_or_default();
        Ok(ScannedTree {
            files,
            skipped_dirs,
        })
    }
}

/// True when a path carries the indexed source extension.
pub fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(SOURCE_EXTENSION)
}
