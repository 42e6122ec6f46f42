//! Rendering of search results for the console and for JSON consumers.
//!
//! Text output follows the classic layout:
//! ```text
//! Search results:
//! 2020-11-04 10:00:01 [INFO][Vault] {12345} Startup complete
//!
//! ---------------------------------------------------------------
//! Number of matches found: 1 out of 3
//! Skipped 1 malformed line without a usable type field
//! Time elapsed: 42µs 125ns
//! ---------------------------------------------------------------
//! ```
//! When colors are enabled, occurrences of the term inside the searched field
//! are highlighted with the selector's style.

use std::fmt::Write;
use std::ops::Range;
use std::time::Duration;

use jiff::SignedDuration;
use jiff::fmt::friendly::SpanPrinter;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::filter::{SearchQuery, SearchResult};

const RULE: &str = "---------------------------------------------------------------";

/// Presentation switches for [`render_text`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub use_color: bool,
    /// List every skipped line with its reason.
    pub show_skipped: bool,
}

/// Append the human-readable results block for `result` to `out`.
pub fn render_text(
    result: &SearchResult<'_>,
    query: &SearchQuery,
    options: ReportOptions,
    out: &mut String,
) {
    out.push_str("\n\nSearch results:\n");

    let style = query.selector.highlight_style();
    for m in &result.matches {
        if options.use_color && !query.term.is_empty() {
            highlight(m.text, m.field.clone(), &query.term, style, out);
        } else {
            out.push_str(m.text);
        }
        out.push('\n');
    }

    if options.show_skipped {
        for s in &result.skipped {
            let _ = writeln!(out, "skipped line {}: {}", s.line_number, s.error);
        }
    }

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(
        out,
        "Number of matches found: {} out of {}",
        result.matched(),
        result.total
    );
    if result.skipped() > 0 {
        let noun = if result.skipped() == 1 { "line" } else { "lines" };
        let summary = format!(
            "Skipped {} malformed {noun} without a usable {} field",
            result.skipped(),
            query.selector
        );
        if options.use_color {
            let _ = writeln!(out, "{}", summary.yellow());
        } else {
            let _ = writeln!(out, "{summary}");
        }
    }
    let _ = writeln!(out, "Time elapsed: {}", format_elapsed(result.elapsed));
    let _ = writeln!(out, "{RULE}");
}

/// Write `line`, styling each occurrence of `term` that lies inside `field`.
fn highlight(line: &str, field: Range<usize>, term: &str, style: Style, out: &mut String) {
    let segment = &line[field.clone()];
    out.push_str(&line[..field.start]);

    let mut cursor = 0;
    for (pos, hit) in segment.match_indices(term) {
        out.push_str(&segment[cursor..pos]);
        let _ = write!(out, "{}", hit.style(style));
        cursor = pos + hit.len();
    }
    out.push_str(&segment[cursor..]);
    out.push_str(&line[field.end..]);
}

/// Human-friendly elapsed time, e.g. `1ms 250µs`.
pub fn format_elapsed(elapsed: Duration) -> String {
    match SignedDuration::try_from(elapsed) {
        Ok(duration) => SpanPrinter::new().duration_to_string(&duration),
        Err(_) => format!("{elapsed:?}"),
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    field: crate::selector::FieldSelector,
    term: &'a str,
    total: usize,
    matched: usize,
    skipped: usize,
    elapsed_us: u64,
    matches: Vec<JsonMatch<'a>>,
    skipped_lines: Vec<JsonSkip>,
}

#[derive(Debug, Serialize)]
struct JsonMatch<'a> {
    line: usize,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonSkip {
    line: usize,
    reason: String,
}

/// Serialize `result` as a single JSON document.
pub fn render_json(
    result: &SearchResult<'_>,
    query: &SearchQuery,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        field: query.selector,
        term: &query.term,
        total: result.total,
        matched: result.matched(),
        skipped: result.skipped(),
        elapsed_us: u64::try_from(result.elapsed.as_micros()).unwrap_or(u64::MAX),
        matches: result
            .matches
            .iter()
            .map(|m| JsonMatch {
                line: m.line_number,
                text: m.text,
            })
            .collect(),
        skipped_lines: result
            .skipped
            .iter()
            .map(|s| JsonSkip {
                line: s.line_number,
                reason: s.error.to_string(),
            })
            .collect(),
    };
    serde_json::to_string(&report)
}
