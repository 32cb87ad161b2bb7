// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexer module - scans a tree, extracts functions and caches the result
//!
//! An existing cache document always wins: [`Indexer::index_folder`] returns
//! it verbatim and ignores the requested directory and exclusions, even if
//! the tree has changed since. Use [`Indexer::reindex`] (or delete the
//! document) to rebuild.

pub mod cache;
pub mod diagnostics;
pub mod scanner;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::errors::{Error, Result};
use crate::models::FunctionRecord;
use crate::parser::{FunctionExtractor, PythonParser};

pub use cache::DEFAULT_CACHE_FILE;
pub use diagnostics::{Diagnostics, IndexEvent, NullDiagnostics, TracingDiagnostics};
pub use scanner::{ScannedTree, SourceScanner, BUILTIN_IGNORE, SOURCE_EXTENSION};

#[derive(Debug, Clone)]
pub struct IndexerOptions {
    /// Where the cache document lives.
    pub cache_path: PathBuf,
    /// Record absolute file paths instead of paths as walked.
    pub absolute_paths: bool,
    /// Honour `.gitignore` / `.ignore` files while walking.
    pub respect_gitignore: bool,
}

impl Default for IndexerOptions {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            absolute_paths: false,
            respect_gitignore: false,
        }
    }
}

/// Builds (or reuses) the function index for a directory tree.
pub struct Indexer<D: Diagnostics = TracingDiagnostics> {
    options: IndexerOptions,
    diagnostics: D,
}

impl Indexer<TracingDiagnostics> {
    pub fn new(options: IndexerOptions) -> Self {
        Self::with_diagnostics(options, TracingDiagnostics)
    }
}

impl<D: Diagnostics> Indexer<D> {
    pub fn with_diagnostics(options: IndexerOptions, diagnostics: D) -> Self {
        Self {
            options,
            diagnostics,
        }
    }

    pub fn cache_path(&self) -> &Path {
        &self.options.cache_path
    }

    /// Return every non-dunder function under `base_dir`.
    ///
    /// Any file that fails to read or parse aborts the run and no cache
    /// document is written.
    pub fn index_folder(
        &self,
        base_dir: &Path,
        exclude_dirs: &HashSet<String>,
    ) -> Result<Vec<FunctionRecord>> {
        let cache_path = self.cache_path();
        if cache::cache_exists(cache_path) {
            self.diagnostics.notify(&IndexEvent::ReusingCache {
                base_dir: base_dir.to_path_buf(),
                cache: cache_path.to_path_buf(),
            });
            return cache::read_cache(cache_path);
        }

        self.diagnostics.notify(&IndexEvent::Started {
            base_dir: base_dir.to_path_buf(),
        });
        let start = Instant::now();

        let scanned = SourceScanner::new(base_dir)
            .with_excludes(exclude_dirs.iter().cloned())
            .with_gitignore(self.options.respect_gitignore)
            .scan()?;
        for path in scanned.skipped_dirs {
            self.diagnostics
                .notify(&IndexEvent::SkippedDirectory { path });
        }

        let mut parser = PythonParser::new()?;
        let extractor = FunctionExtractor::new().with_absolute_paths(self.options.absolute_paths);
        let mut functions = Vec::new();

        for path in scanned.files {
            self.diagnostics
                .notify(&IndexEvent::ReadingFile { path: path.clone() });
            let source = std::fs::read_to_string(&path).map_err(|err| Error::io(&path, err))?;

            self.diagnostics
                .notify(&IndexEvent::ParsingFile { path: path.clone() });
            let parsed = parser.parse(source, &path)?;
            functions.extend(extractor.extract(parsed.root(), &path)?);
        }

        self.diagnostics.notify(&IndexEvent::SavingCache {
            cache: cache_path.to_path_buf(),
            functions: functions.len(),
        });
        cache::write_cache(cache_path, &functions)?;

        self.diagnostics.notify(&IndexEvent::Finished {
            base_dir: base_dir.to_path_buf(),
            functions: functions.len(),
            elapsed: start.elapsed(),
        });
        Ok(functions)
    }

    /// Delete any existing cache document, then index from scratch.
    pub fn reindex(
        &self,
        base_dir: &Path,
        exclude_dirs: &HashSet<String>,
    ) -> Result<Vec<FunctionRecord>> {
        cache::remove_cache(self.cache_path())?;
        self.index_folder(base_dir, exclude_dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::diagnostics::testing::RecordingDiagnostics;
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    struct Fixture {
        _dir: TempDir,
        src: PathBuf,
        cache: PathBuf,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        write_file(
            &src.join("zipfile.py"),
            "def is_zipfile(filename):\n    pass\n\nclass ZipFile:\n    def __init__(self, file):\n        pass\n\n    def namelist(self):\n        pass\n",
        );
        write_file(&src.join("test/test_zip.py"), "def test_it():\n    pass\n");
        write_file(&src.join("vendor/dep.py"), "def vendored():\n    pass\n");
        let cache = dir.path().join("functions.json");
        Fixture {
            _dir: dir,
            src,
            cache,
        }
    }

    fn indexer<'a>(cache: &Path, sink: &'a RecordingDiagnostics) -> Indexer<&'a RecordingDiagnostics> {
        let options = IndexerOptions {
            cache_path: cache.to_path_buf(),
            ..IndexerOptions::default()
        };
        Indexer::with_diagnostics(options, sink)
    }

    fn sorted_names(records: &[FunctionRecord]) -> Vec<String> {
        let mut names: Vec<String> = records.iter().map(|r| r.name().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_indexes_and_writes_cache() {
        let fx = fixture();
        let sink = RecordingDiagnostics::default();
        let excludes: HashSet<String> = ["vendor".to_string()].into_iter().collect();

        let records = indexer(&fx.cache, &sink)
            .index_folder(&fx.src, &excludes)
            .unwrap();

        assert_eq!(sorted_names(&records), ["is_zipfile", "namelist"]);
        let is_zip = records.iter().find(|r| r.name() == "is_zipfile").unwrap();
        assert_eq!(Path::new(is_zip.filename()), fx.src.join("zipfile.py"));
        assert_eq!(is_zip.line(), 1);
        assert_eq!(cache::read_cache(&fx.cache).unwrap(), records);
    }

    #[test]
    fn test_emits_progress_events() {
        let fx = fixture();
        let sink = RecordingDiagnostics::default();
        let excludes: HashSet<String> = ["vendor".to_string()].into_iter().collect();
        indexer(&fx.cache, &sink)
            .index_folder(&fx.src, &excludes)
            .unwrap();

        let events = sink.events.borrow();
        assert!(matches!(events.first(), Some(IndexEvent::Started { .. })));
        assert!(matches!(
            events.last(),
            Some(IndexEvent::Finished { functions: 2, .. })
        ));
        let skipped: Vec<&PathBuf> = events
            .iter()
            .filter_map(|e| match e {
                IndexEvent::SkippedDirectory { path } => Some(path),
                _ => None,
            })
            .collect();
        assert_eq!(skipped, [&fx.src.join("test"), &fx.src.join("vendor")]);
        let reads = events
            .iter()
            .filter(|e| matches!(e, IndexEvent::ReadingFile { .. }))
            .count();
        let parses = events
            .iter()
            .filter(|e| matches!(e, IndexEvent::ParsingFile { .. }))
            .count();
        assert_eq!((reads, parses), (1, 1));
    }

    #[test]
    fn test_existing_cache_short_circuits() {
        let fx = fixture();
        let sink = RecordingDiagnostics::default();
        let indexer = indexer(&fx.cache, &sink);

        let first = indexer.index_folder(&fx.src, &HashSet::new()).unwrap();
        write_file(&fx.src.join("late.py"), "def added_later():\n    pass\n");
        let excludes: HashSet<String> = ["vendor".to_string()].into_iter().collect();
        let second = indexer.index_folder(Path::new("/does/not/matter"), &excludes).unwrap();

        assert_eq!(first, second);
        assert!(matches!(
            sink.events.borrow().last(),
            Some(IndexEvent::ReusingCache { .. })
        ));
    }

    #[test]
    fn test_reindex_picks_up_changes() {
        let fx = fixture();
        let sink = RecordingDiagnostics::default();
        let indexer = indexer(&fx.cache, &sink);

        indexer.index_folder(&fx.src, &HashSet::new()).unwrap();
        write_file(&fx.src.join("late.py"), "def added_later():\n    pass\n");
        let records = indexer.reindex(&fx.src, &HashSet::new()).unwrap();

        assert!(records.iter().any(|r| r.name() == "added_later"));
    }

    #[test]
    fn test_parse_failure_is_fatal_and_writes_nothing() {
        let fx = fixture();
        write_file(&fx.src.join("broken.py"), "def broken(:\n    pass\n");
        let sink = RecordingDiagnostics::default();

        let err = indexer(&fx.cache, &sink)
            .index_folder(&fx.src, &HashSet::new())
            .unwrap_err();

        match err {
            Error::Parse { path, .. } => assert_eq!(path, fx.src.join("broken.py")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!fx.cache.exists());
    }

    #[test]
    fn test_python2_source_is_fatal() {
        let fx = fixture();
        write_file(
            &fx.src.join("legacy.py"),
            "print \"hello\"\nexec \"x = 1\"\ndef f(a):\n    pass\n",
        );
        let options = IndexerOptions {
            cache_path: fx.cache.clone(),
            ..IndexerOptions::default()
        };

        let err = Indexer::with_diagnostics(options, NullDiagnostics)
            .index_folder(&fx.src, &HashSet::new())
            .unwrap_err();

        match err {
            Error::Parse { path, line, .. } => {
                assert_eq!(path, fx.src.join("legacy.py"));
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!fx.cache.exists());
    }
}
