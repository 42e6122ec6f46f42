//! Interactive prompt/response loop.
//!
//! The session runs over any [`BufRead`] input and [`Write`] output so it can
//! be driven by a real console or by in-memory buffers in tests. Each cycle
//! asks for a field, then a term, runs the filter and prints the report. The
//! loop ends on `exit`/`quit` at the field prompt or when input is exhausted.

use std::io::{BufRead, Write};

use crate::corpus::LogCorpus;
use crate::error::SearchError;
use crate::filter::{SearchQuery, filter};
use crate::report::{ReportOptions, render_text};
use crate::selector::FieldSelector;

/// Words accepted at the field prompt to end the session.
const EXIT_COMMANDS: &[&str] = &["exit", "quit"];

/// A console session over one loaded corpus.
pub struct Session<'c, R, W> {
    corpus: &'c LogCorpus,
    input: R,
    output: W,
    options: ReportOptions,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(corpus: &'c LogCorpus, input: R, output: W, options: ReportOptions) -> Self {
        Self {
            corpus,
            input,
            output,
            options,
        }
    }

    /// Run until the user exits or input ends.
    ///
    /// Returns the number of queries executed.
    pub fn run(&mut self) -> Result<usize, SearchError> {
        self.welcome()?;

        let mut queries = 0;
        while let Some(selector) = self.prompt_selector()? {
            let Some(term) = self.prompt_term()? else {
                break;
            };

            let query = SearchQuery::new(selector, term);
            let result = filter(self.corpus, &query);

            let mut out = String::new();
            render_text(&result, &query, self.options, &mut out);
            self.output.write_all(out.as_bytes())?;
            self.output.flush()?;
            queries += 1;
        }

        writeln!(self.output, "\nGoodbye.")?;
        self.output.flush()?;
        tracing::debug!(queries, "session ended");
        Ok(queries)
    }

    /// Give back the output handle, e.g. to inspect a buffer in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    fn welcome(&mut self) -> Result<(), SearchError> {
        writeln!(self.output, "Welcome to the Log search application!")?;
        match self.corpus.path() {
            Some(path) => writeln!(
                self.output,
                "Loaded {} lines from {}",
                self.corpus.len(),
                path.display()
            )?,
            None => writeln!(self.output, "Loaded {} lines", self.corpus.len())?,
        }
        Ok(())
    }

    /// Ask for a field until a valid one is given.
    ///
    /// `None` means the user asked to leave or input ended.
    fn prompt_selector(&mut self) -> Result<Option<FieldSelector>, SearchError> {
        let options = FieldSelector::ALL.map(FieldSelector::label).join(", ");
        writeln!(
            self.output,
            "\nInput search type. Possible options: {options} (or EXIT to quit)"
        )?;
        self.output.flush()?;

        loop {
            let Some(input) = self.read_line()? else {
                return Ok(None);
            };
            let choice = input.trim();
            if EXIT_COMMANDS.iter().any(|c| c.eq_ignore_ascii_case(choice)) {
                return Ok(None);
            }
            match FieldSelector::from_str_loose(choice) {
                Some(selector) => return Ok(Some(selector)),
                None => {
                    tracing::debug!(input = choice, "rejected search type");
                    writeln!(
                        self.output,
                        "\nWrong search type. Please input: DATE, TYPE, ID or MODULE."
                    )?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn prompt_term(&mut self) -> Result<Option<String>, SearchError> {
        writeln!(
            self.output,
            "\nInput search parameter (case sensitive). This can be anything you are searching for in a certain format."
        )?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SearchError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}
