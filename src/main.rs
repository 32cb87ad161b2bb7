// SPDX-License-Identifier: MIT OR Apache-2.0

//! fnfind - Fuzzy function search tool
//!
//! Indexes Python functions with tree-sitter and ranks them against a
//! signature-like query by edit distance.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use fnfind::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    fnfind::logging::init(cli.verbose);
    let config = Config::load();
    let format = commands::resolve_format(cli.format, &config);
    let compact = cli.compact;

    match cli.command {
        Commands::Search {
            query,
            path,
            limit,
            exclude,
            cache,
            reindex,
            absolute,
            scores,
        } => {
            let request = commands::SearchRequest {
                query,
                path,
                limit,
                exclude,
                cache,
                reindex,
                absolute,
                scores,
            };
            commands::search(&config, request, format, compact)?;
        }
        Commands::Index {
            path,
            exclude,
            cache,
            force,
            absolute,
        } => {
            commands::index(
                &config, path, exclude, cache, force, absolute, format, compact,
            )?;
        }
        Commands::Normalize { signature } => {
            commands::normalize(&signature, format, compact)?;
        }
    }

    Ok(())
}
