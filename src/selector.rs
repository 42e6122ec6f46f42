//! The four query dimensions of a log line.
//!
//! Parsing is case-insensitive so `DATE`, `Date` and `date` all select the
//! same field. Each selector also carries a display style used when the
//! report highlights matches.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use owo_colors::Style;
use serde::Serialize;

use crate::error::InvalidSelector;

/// Positional field of a `<date> [<type>][<module>] {<id>} <message>` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSelector {
    /// Everything before the first `[`.
    Date,
    /// First bracketed segment.
    Type,
    /// Braced segment.
    Id,
    /// Second bracketed segment.
    Module,
}

impl FieldSelector {
    /// All selectors in prompt order.
    pub const ALL: [Self; 4] = [Self::Date, Self::Type, Self::Id, Self::Module];

    /// Lowercase name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Type => "type",
            Self::Id => "id",
            Self::Module => "module",
        }
    }

    /// Uppercase name shown in prompts.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Type => "TYPE",
            Self::Id => "ID",
            Self::Module => "MODULE",
        }
    }

    /// Style applied to matched term occurrences when colors are enabled.
    pub const fn highlight_style(self) -> Style {
        match self {
            Self::Date => Style::new().cyan().bold(),
            Self::Type => Style::new().yellow().bold(),
            Self::Id => Style::new().magenta().bold(),
            Self::Module => Style::new().green().bold(),
        }
    }

    /// Parse a selector, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for unrecognized input.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|sel| sel.name().eq_ignore_ascii_case(s))
    }
}

impl FromStr for FieldSelector {
    type Err = InvalidSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| InvalidSelector(s.to_string()))
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
