//! Configuration management with TOML file support.
//!
//! Merges settings from four sources (highest precedence first):
//! 1. CLI flags
//! 2. Environment (`LOGSEARCH_FILE`)
//! 3. Config file (`~/.config/logsearch/config.toml` or `$XDG_CONFIG_HOME/logsearch/config.toml`)
//! 4. Built-in defaults

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::SearchError;
use crate::filter::SearchQuery;

/// Environment variable naming the log file to load.
pub const LOG_FILE_ENV: &str = "LOGSEARCH_FILE";

/// Runtime configuration merged from defaults, config file, environment, and CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log file to search.
    pub log_file: Option<PathBuf>,
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// List skipped malformed lines in reports.
    pub show_skipped: bool,
    /// `tracing` filter directive from the config file.
    pub log_level: Option<String>,
    /// Debug diagnostics requested on the command line.
    pub verbose: bool,
    /// Single query to run instead of the interactive session.
    pub query: Option<SearchQuery>,
    /// Print the single-query result as JSON.
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: None,
            color_mode: ColorMode::Auto,
            show_skipped: false,
            log_level: None,
            verbose: false,
            query: None,
            json_output: false,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > environment > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, SearchError> {
        Self::merge(cli, std::env::var_os(LOG_FILE_ENV))
    }

    fn merge(cli: &Cli, env_file: Option<OsString>) -> Result<Self, SearchError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);
        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config);
        }

        if let Some(env_file) = env_file.filter(|v| !v.is_empty()) {
            config.log_file = Some(PathBuf::from(env_file));
        }

        if cli.file.is_some() {
            config.log_file.clone_from(&cli.file);
        }
        if let Some(color) = cli.color {
            config.color_mode = color;
        }
        config.show_skipped |= cli.show_skipped;
        config.verbose = cli.verbose;
        config.json_output = cli.json;

        if let (Some(selector), Some(term)) = (cli.field, cli.term.as_ref()) {
            config.query = Some(SearchQuery::new(selector, term.clone()));
        }

        Ok(config)
    }

    /// The log file to load, or a configuration error if none was given.
    pub fn require_log_file(&self) -> Result<&Path, SearchError> {
        self.log_file.as_deref().ok_or_else(|| {
            SearchError::Config(format!(
                "no log file given; pass a path, set {LOG_FILE_ENV}, or set log_file in {}",
                Self::default_config_path().display()
            ))
        })
    }

    /// Default config file path: `$XDG_CONFIG_HOME/logsearch/config.toml` or `~/.config/logsearch/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("logsearch").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("logsearch")
                .join("config.toml")
        } else {
            PathBuf::from(".config/logsearch/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(path) = file.log_file {
            self.log_file = Some(path);
        }
        if let Some(color) = file.color {
            self.color_mode = ColorMode::from_str_loose(&color);
        }
        if let Some(show) = file.show_skipped {
            self.show_skipped = show;
        }
        if let Some(level) = file.log_level {
            self.log_level = Some(level);
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    log_file: Option<PathBuf>,
    color: Option<String>,
    show_skipped: Option<bool>,
    log_level: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, SearchError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SearchError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
