//! In-memory log corpus loaded once per run.

use std::path::{Path, PathBuf};

use crate::error::SearchError;

/// Ordered, immutable collection of log lines.
///
/// Lines keep file order and exclude their `\n` / `\r\n` terminators.
#[derive(Debug, Clone, Default)]
pub struct LogCorpus {
    path: Option<PathBuf>,
    lines: Vec<String>,
}

impl LogCorpus {
    /// Read the whole file at `path` into memory.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD` rather than
    /// rejecting the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SearchError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let mut corpus = Self::from_text(text.strip_prefix('\u{feff}').unwrap_or(&text));
        corpus.path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), lines = corpus.len(), "log file loaded");
        Ok(corpus)
    }

    /// Split already-loaded text into a corpus.
    pub fn from_text(text: &str) -> Self {
        text.lines().map(str::to_string).collect()
    }

    /// File the corpus was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<String> for LogCorpus {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            path: None,
            lines: iter.into_iter().collect(),
        }
    }
}
