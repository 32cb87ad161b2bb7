// SPDX-License-Identifier: MIT OR Apache-2.0

//! Progress notifications emitted while indexing.
//!
//! The indexer never logs directly; it reports [`IndexEvent`]s to whatever
//! [`Diagnostics`] sink it was built with.

use std::path::PathBuf;
use std::time::Duration;

/// Something observable that happened during an indexing run.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexEvent {
    /// The cache document exists and will be returned instead of scanning.
    ReusingCache { base_dir: PathBuf, cache: PathBuf },
    /// No cache: a full scan of `base_dir` starts.
    Started { base_dir: PathBuf },
    /// A directory was pruned by the exclusion set.
    SkippedDirectory { path: PathBuf },
    ReadingFile { path: PathBuf },
    ParsingFile { path: PathBuf },
    SavingCache { cache: PathBuf, functions: usize },
    Finished {
        base_dir: PathBuf,
        functions: usize,
        elapsed: Duration,
    },
}

/// Sink for indexing notifications. Purely observational.
pub trait Diagnostics {
    fn notify(&self, event: &IndexEvent);
}

impl<T: Diagnostics + ?Sized> Diagnostics for &T {
    fn notify(&self, event: &IndexEvent) {
        (**self).notify(event);
    }
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn notify(&self, event: &IndexEvent) {
        match event {
            IndexEvent::ReusingCache { base_dir, cache } => tracing::warn!(
                base_dir = %base_dir.display(),
                cache = %cache.display(),
                "Not indexing {}, reading the content of {}. Delete it or pass --reindex to rebuild.",
                base_dir.display(),
                cache.display()
            ),
            IndexEvent::Started { base_dir } => {
                tracing::info!(base_dir = %base_dir.display(), "Indexing {}", base_dir.display())
            }
            IndexEvent::SkippedDirectory { path } => {
                tracing::debug!(path = %path.display(), "Skipping excluded directory")
            }
            IndexEvent::ReadingFile { path } => {
                tracing::info!("Reading {}...", path.display())
            }
            IndexEvent::ParsingFile { path } => {
                tracing::info!("Parsing {}...", path.display())
            }
            IndexEvent::SavingCache { cache, functions } => tracing::info!(
                functions,
                "Saving the results to {}...",
                cache.display()
            ),
            IndexEvent::Finished {
                base_dir,
                functions,
                elapsed,
            } => tracing::info!(
                functions,
                elapsed_secs = elapsed.as_secs_f64(),
                "Indexed folder {} in {:.3} seconds.",
                base_dir.display(),
                elapsed.as_secs_f64()
            ),
        }
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn notify(&self, _event: &IndexEvent) {}
}
