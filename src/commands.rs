// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command implementations behind the CLI

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use fnfind::config::{Config, ConfigOutputFormat};
use fnfind::indexer::cache::cache_exists;
use fnfind::indexer::{Indexer, IndexerOptions};
use fnfind::models::FunctionRecord;
use fnfind::output::{format_text_line, print_json, RankedEntry};
use fnfind::query::rank;
use fnfind::signature;

use crate::cli::OutputFormat;

pub struct SearchRequest {
    pub query: String,
    pub path: Option<PathBuf>,
    pub limit: Option<usize>,
    pub exclude: Vec<String>,
    pub cache: Option<PathBuf>,
    pub reindex: bool,
    pub absolute: bool,
    pub scores: bool,
}

/// CLI flag, then config file, then text.
pub fn resolve_format(cli_value: Option<OutputFormat>, config: &Config) -> OutputFormat {
    cli_value.unwrap_or_else(|| match config.output_format() {
        Some(ConfigOutputFormat::Json) => OutputFormat::Json,
        _ => OutputFormat::Text,
    })
}

fn exclude_set(config: &Config, cli_excludes: Vec<String>) -> HashSet<String> {
    config
        .exclude_dirs
        .iter()
        .cloned()
        .chain(cli_excludes)
        .collect()
}

fn load_functions(
    config: &Config,
    base_dir: &Path,
    exclude: Vec<String>,
    cache: Option<PathBuf>,
    reindex: bool,
    absolute: bool,
) -> Result<(Vec<FunctionRecord>, PathBuf, bool)> {
    let options = IndexerOptions {
        cache_path: config.merge_cache_path(cache),
        absolute_paths: absolute,
        ..IndexerOptions::default()
    };
    let cache_path = options.cache_path.clone();
    let reused = !reindex && cache_exists(&cache_path);
    let indexer = Indexer::new(options);
    let excludes = exclude_set(config, exclude);

    let functions = if reindex {
        indexer.reindex(base_dir, &excludes)
    } else {
        indexer.index_folder(base_dir, &excludes)
    }
    .with_context(|| format!("failed to index {}", base_dir.display()))?;

    Ok((functions, cache_path, reused))
}

/// Run the search command
pub fn search(
    config: &Config,
    request: SearchRequest,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    // Reject a malformed query before paying for an index run.
    signature::normalize(&request.query)?;

    let base_dir = request.path.unwrap_or_else(|| PathBuf::from("."));
    let (functions, _, _) = load_functions(
        config,
        &base_dir,
        request.exclude,
        request.cache,
        request.reindex,
        request.absolute,
    )?;

    let ranked = rank(&request.query, &functions)?;
    let limit = config.merge_max_results(request.limit);
    let top = &ranked[..limit.min(ranked.len())];

    match format {
        OutputFormat::Json => {
            let entries: Vec<RankedEntry<'_>> = top.iter().map(RankedEntry::from).collect();
            print_json(&entries, compact)?;
        }
        OutputFormat::Text => {
            if functions.is_empty() {
                println!(
                    "{} No functions indexed under {}",
                    "✗".red(),
                    base_dir.display().to_string().yellow()
                );
            } else {
                for result in top {
                    println!("{}", format_text_line(result, request.scores));
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct IndexSummary {
    functions: usize,
    cache: String,
    reused: bool,
}

/// Run the index command
#[allow(clippy::too_many_arguments)]
pub fn index(
    config: &Config,
    path: Option<PathBuf>,
    exclude: Vec<String>,
    cache: Option<PathBuf>,
    force: bool,
    absolute: bool,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    let base_dir = path.unwrap_or_else(|| PathBuf::from("."));
    let (functions, cache_path, reused) =
        load_functions(config, &base_dir, exclude, cache, force, absolute)?;

    let summary = IndexSummary {
        functions: functions.len(),
        cache: cache_path.display().to_string(),
        reused,
    };

    match format {
        OutputFormat::Json => print_json(&summary, compact)?,
        OutputFormat::Text => {
            let verb = if summary.reused { "Reused" } else { "Indexed" };
            println!(
                "{} {} {} functions ({})",
                "✓".green(),
                verb,
                summary.functions.to_string().cyan(),
                summary.cache
            );
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct NormalizedSignature<'a> {
    input: &'a str,
    normalized: String,
}

/// Run the normalize command
pub fn normalize(raw: &str, format: OutputFormat, compact: bool) -> Result<()> {
    let normalized = signature::normalize(raw)?;
    match format {
        OutputFormat::Json => print_json(
            &NormalizedSignature {
                input: raw,
                normalized,
            },
            compact,
        )?,
        OutputFormat::Text => println!("{normalized}"),
    }
    Ok(())
}
