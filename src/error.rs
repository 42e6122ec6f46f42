//! Error types for the `logsearch` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::selector::FieldSelector;

/// Errors that abort a `logsearch` run.
///
/// Maps to exit codes: [`Config`](Self::Config) and [`Toml`](Self::Toml) → exit 1,
/// [`Load`](Self::Load) and [`Io`](Self::Io) → exit 2.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Configuration error (no log file configured, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// The log file could not be opened or read at startup.
    #[error("cannot read log file {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while talking to the console.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SearchError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Toml(_) => 1,
            Self::Load { .. } | Self::Io(_) => 2,
        }
    }
}

/// User input that is not one of the four field names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid search type '{0}': expected one of date, type, id, module")]
pub struct InvalidSelector(pub String);

/// Delimiter problem that prevents a field from being extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// The opening delimiter never appears.
    MissingOpen(char),
    /// The closing delimiter never appears.
    MissingClose(char),
    /// The first closing delimiter comes before the first opening one.
    Misordered { open: char, close: char },
    /// Only one `[...]` segment is present.
    MissingSecondSegment,
    /// The line starts with `[`, so there is no date or separator before it.
    MissingDate,
}

/// A line that lacks the delimiters needed for the requested field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot extract {selector} field: {reason}")]
pub struct MalformedLine {
    pub selector: FieldSelector,
    pub reason: Malformation,
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOpen(c) => write!(f, "no '{c}' found"),
            Self::MissingClose(c) => write!(f, "no closing '{c}' found"),
            Self::Misordered { open, close } => write!(f, "'{close}' appears before '{open}'"),
            Self::MissingSecondSegment => f.write_str("no second '[...]' segment found"),
            Self::MissingDate => f.write_str("nothing before the first '['"),
        }
    }
}
