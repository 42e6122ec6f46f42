//! Command-line argument definitions for `logsearch`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::selector::FieldSelector;

/// Search a bracket-delimited log file by date, type, id, or module.
///
/// Lines are expected to look like
/// `2020-11-04 10:00:01 [INFO][Vault] {12345} Startup complete`.
/// Without `--field`/`--term` an interactive prompt is started.
#[derive(Debug, Parser)]
#[command(name = "logsearch", version, about, long_about = None)]
pub struct Cli {
    /// Log file to load.
    ///
    /// Falls back to `$LOGSEARCH_FILE`, then `log_file` in the config file.
    pub file: Option<PathBuf>,

    /// Run a single query on this field and exit.
    #[arg(short = 'f', long, value_enum, ignore_case = true, requires = "term")]
    pub field: Option<FieldSelector>,

    /// Case-sensitive text to look for in the chosen field.
    #[arg(short = 't', long, requires = "field", allow_hyphen_values = true)]
    pub term: Option<String>,

    /// Print the single-query result as JSON.
    #[arg(short = 'j', long, requires = "field")]
    pub json: bool,

    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// List every skipped malformed line with the reason it was skipped.
    #[arg(short = 's', long)]
    pub show_skipped: bool,

    /// Emit debug diagnostics on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

impl ColorMode {
    /// Parse a config-file color value; unknown values fall back to `auto`.
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Auto,
        }
    }
}
