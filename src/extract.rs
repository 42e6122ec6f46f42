//! Positional field extraction for bracket-delimited log lines.
//!
//! Lines follow the layout `<date> [<type>][<module>] {<id>} <message...>`.
//! Extraction is a fixed-offset slice, not a general parser: no escaping and
//! no nested brackets. A line missing the delimiters for the requested field
//! yields a [`MalformedLine`] instead of a value.

use std::ops::Range;

use crate::error::{Malformation, MalformedLine};
use crate::selector::FieldSelector;

/// Byte span of the requested field within `line`.
///
/// The span always lies on UTF-8 character boundaries, so `&line[span]` is
/// safe to take.
pub fn extract_span(line: &str, selector: FieldSelector) -> Result<Range<usize>, MalformedLine> {
    let span = match selector {
        FieldSelector::Date => date_span(line),
        FieldSelector::Type => delimited(line, 0, '[', ']'),
        FieldSelector::Id => delimited(line, 0, '{', '}'),
        FieldSelector::Module => module_span(line),
    };
    span.map_err(|reason| MalformedLine { selector, reason })
}

/// The substring of `line` holding the requested field.
///
/// ```
/// use logsearch::{FieldSelector, extract_field};
///
/// let line = "2020-11-04 10:00:01 [INFO][Vault] {12345} Startup complete";
/// assert_eq!(extract_field(line, FieldSelector::Date).unwrap(), "2020-11-04 10:00:01");
/// assert_eq!(extract_field(line, FieldSelector::Module).unwrap(), "Vault");
/// ```
pub fn extract_field(line: &str, selector: FieldSelector) -> Result<&str, MalformedLine> {
    extract_span(line, selector).map(|span| &line[span])
}

/// Everything before the first `[`, minus the one separator character that
/// precedes it.
fn date_span(line: &str) -> Result<Range<usize>, Malformation> {
    let open = line.find('[').ok_or(Malformation::MissingOpen('['))?;
    let (end, _) = line[..open]
        .char_indices()
        .last()
        .ok_or(Malformation::MissingDate)?;
    Ok(0..end)
}

/// Second `[...]` segment: the first one found after the first `]`.
fn module_span(line: &str) -> Result<Range<usize>, Malformation> {
    let first = delimited(line, 0, '[', ']')?;
    // `first.end` indexes the one-byte ']'.
    delimited(line, first.end + 1, '[', ']').map_err(|reason| match reason {
        Malformation::MissingOpen(_) | Malformation::MissingClose(_) => {
            Malformation::MissingSecondSegment
        }
        other => other,
    })
}

/// Contents between the first `open` and the first `close` at or after `from`.
fn delimited(
    line: &str,
    from: usize,
    open: char,
    close: char,
) -> Result<Range<usize>, Malformation> {
    let haystack = &line[from..];
    let start = haystack.find(open).ok_or(Malformation::MissingOpen(open))?;
    let end = haystack.find(close).ok_or(Malformation::MissingClose(close))?;
    if end < start {
        return Err(Malformation::Misordered { open, close });
    }
    Ok(from + start + open.len_utf8()..from + end)
}
