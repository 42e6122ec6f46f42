use std::io::{self, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use logsearch::cli::{Cli, ColorMode};
use logsearch::config::Config;
use logsearch::corpus::LogCorpus;
use logsearch::error::SearchError;
use logsearch::filter::{SearchQuery, filter};
use logsearch::logging;
use logsearch::report::{ReportOptions, render_json, render_text};
use logsearch::session::Session;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so `logsearch ... | head` exits quietly.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "logsearch", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    logging::init(config.verbose, config.log_level.as_deref());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(SearchError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(e: &SearchError) -> ExitCode {
    eprintln!("logsearch: {e}");
    ExitCode::from(e.exit_code())
}

fn run(config: &Config) -> Result<(), SearchError> {
    let corpus = LogCorpus::load(config.require_log_file()?)?;
    let options = ReportOptions {
        use_color: resolve_color_mode(config.color_mode),
        show_skipped: config.show_skipped,
    };

    match &config.query {
        Some(query) => run_once(&corpus, query, config.json_output, options),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(&corpus, stdin.lock(), stdout.lock(), options).run()?;
            Ok(())
        }
    }
}

fn run_once(
    corpus: &LogCorpus,
    query: &SearchQuery,
    json: bool,
    options: ReportOptions,
) -> Result<(), SearchError> {
    let result = filter(corpus, query);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    if json {
        let doc = render_json(&result, query).map_err(io::Error::other)?;
        writeln!(writer, "{doc}")?;
    } else {
        let mut out = String::new();
        render_text(&result, query, options, &mut out);
        writer.write_all(out.trim_start_matches('\n').as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// Restoring `SIG_DFL` lets the OS end the process when a downstream reader
/// such as `head` closes the pipe.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
