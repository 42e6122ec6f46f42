//! Single-pass substring filter over a log corpus.
//!
//! Each line has its selected field extracted once; the line matches when the
//! field contains the search term (ordinal, case-sensitive). Lines whose field
//! cannot be extracted are skipped and recorded, never fatal.

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::corpus::LogCorpus;
use crate::error::MalformedLine;
use crate::extract::extract_span;
use crate::selector::FieldSelector;

/// A field selector paired with the term to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub selector: FieldSelector,
    pub term: String,
}

impl SearchQuery {
    pub fn new(selector: FieldSelector, term: impl Into<String>) -> Self {
        Self {
            selector,
            term: term.into(),
        }
    }
}

/// A corpus line whose field contained the term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedLine<'a> {
    /// 1-based position in the corpus.
    pub line_number: usize,
    pub text: &'a str,
    /// Byte span of the searched field within [`text`](Self::text).
    pub field: Range<usize>,
}

/// A corpus line skipped because the field could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based position in the corpus.
    pub line_number: usize,
    pub error: MalformedLine,
}

/// Outcome of one query against one corpus.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    pub matches: Vec<MatchedLine<'a>>,
    pub skipped: Vec<SkippedLine>,
    /// Number of lines examined.
    pub total: usize,
    /// Wall-clock time spent in the filter pass.
    pub elapsed: Duration,
}

impl SearchResult<'_> {
    pub fn matched(&self) -> usize {
        self.matches.len()
    }

    /// Lines excluded for any reason, malformed ones included.
    pub fn unmatched(&self) -> usize {
        self.total - self.matches.len()
    }

    pub fn skipped(&self) -> usize {
        self.skipped.len()
    }
}

/// Run `query` against every line of `corpus`.
pub fn filter<'a>(corpus: &'a LogCorpus, query: &SearchQuery) -> SearchResult<'a> {
    filter_lines(corpus.lines(), query)
}

/// Run `query` against an arbitrary slice of lines.
///
/// ```
/// use logsearch::{FieldSelector, SearchQuery, filter_lines};
///
/// let lines = ["2020-11-04 10:00:01 [INFO][Vault] {12345} Startup complete"];
/// let result = filter_lines(&lines, &SearchQuery::new(FieldSelector::Type, "INFO"));
/// assert_eq!(result.matched(), 1);
///
/// let result = filter_lines(&lines, &SearchQuery::new(FieldSelector::Type, "info"));
/// assert_eq!(result.matched(), 0);
/// ```
pub fn filter_lines<'a, S: AsRef<str>>(lines: &'a [S], query: &SearchQuery) -> SearchResult<'a> {
    let started = Instant::now();

    let mut matches = Vec::new();
    let mut skipped = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let text = line.as_ref();
        match extract_span(text, query.selector) {
            Ok(span) => {
                if text[span.clone()].contains(query.term.as_str()) {
                    matches.push(MatchedLine {
                        line_number: idx + 1,
                        text,
                        field: span,
                    });
                }
            }
            Err(error) => skipped.push(SkippedLine {
                line_number: idx + 1,
                error,
            }),
        }
    }

    let elapsed = started.elapsed();

    if !skipped.is_empty() {
        tracing::warn!(
            field = %query.selector,
            skipped = skipped.len(),
            "skipped malformed lines"
        );
        for line in &skipped {
            tracing::debug!(line = line.line_number, reason = %line.error, "malformed line");
        }
    }
    tracing::debug!(
        field = %query.selector,
        matched = matches.len(),
        total = lines.len(),
        ?elapsed,
        "query executed"
    );

    SearchResult {
        matches,
        skipped,
        total: lines.len(),
        elapsed,
    }
}
