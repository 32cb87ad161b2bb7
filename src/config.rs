// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for fnfind
//!
//! Loads configuration from .fnfindrc.toml in current directory or ~/.config/fnfind/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::indexer::DEFAULT_CACHE_FILE;

/// Output format for results (mirrored from cli for library use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration loaded from .fnfindrc.toml or ~/.config/fnfind/config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of results to print
    pub max_results: Option<usize>,
    /// Default output format (text or json)
    pub default_format: Option<String>,
    /// Cache document location
    pub cache_path: Option<PathBuf>,
    /// Directory names excluded in addition to the built-in set
    pub exclude_dirs: Vec<String>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .fnfindrc.toml in current directory
    /// 2. ~/.config/fnfind/config.toml
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(Path::new(".fnfindrc.toml")) {
            return config;
        }

        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("fnfind").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get output format from config, parsing the string to ConfigOutputFormat
    pub fn output_format(&self) -> Option<ConfigOutputFormat> {
        self.default_format
            .as_ref()
            .and_then(|s| match s.to_lowercase().as_str() {
                "json" => Some(ConfigOutputFormat::Json),
                "text" => Some(ConfigOutputFormat::Text),
                _ => None,
            })
    }

    /// Merge CLI options with config (CLI wins)
    pub fn merge_max_results(&self, cli_value: Option<usize>) -> usize {
        cli_value.or(self.max_results).unwrap_or(10)
    }

    pub fn merge_cache_path(&self, cli_value: Option<PathBuf>) -> PathBuf {
        cli_value
            .or_else(|| self.cache_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE))
    }
}
