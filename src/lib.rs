//! `logsearch` — Search bracket-delimited log files by field.
//!
//! This library provides the core of the `logsearch` CLI tool. Log lines of
//! the form `<date> [<type>][<module>] {<id>} <message>` are loaded into a
//! [`LogCorpus`], and a [`SearchQuery`] picks one of four positional fields
//! and a case-sensitive substring to look for. Lines missing the delimiters
//! for the chosen field are skipped and reported rather than aborting.
//!
//! # Example
//!
//! ```
//! use logsearch::{FieldSelector, LogCorpus, SearchQuery, filter};
//!
//! let corpus = LogCorpus::from_text(
//!     "2020-11-04 10:00:01 [INFO][Vault] {12345} Startup complete\n\
//!      2020-11-04 10:00:02 [WARN][Vault] unsealing slowly\n",
//! );
//!
//! let result = filter(&corpus, &SearchQuery::new(FieldSelector::Id, "123"));
//! assert_eq!(result.matched(), 1);
//! assert_eq!(result.skipped(), 1);
//! assert_eq!(result.total, 2);
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod filter;
pub mod logging;
pub mod report;
pub mod selector;
pub mod session;

// Re-export primary API types for convenience.
pub use config::Config;
pub use corpus::LogCorpus;
pub use error::{InvalidSelector, Malformation, MalformedLine, SearchError};
pub use extract::{extract_field, extract_span};
pub use filter::{MatchedLine, SearchQuery, SearchResult, SkippedLine, filter, filter_lines};
pub use report::{ReportOptions, render_json, render_text};
pub use selector::FieldSelector;
pub use session::Session;
