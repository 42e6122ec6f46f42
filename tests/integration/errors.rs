//! Integration tests for startup failures and their exit codes.

use predicates::prelude::*;

use crate::logsearch;

#[test]
fn missing_log_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("log20201104.txt");
    logsearch()
        .arg(&missing)
        .write_stdin("type\nINFO\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("logsearch: cannot read log file"))
        .stderr(predicate::str::contains("log20201104.txt"));
}

#[test]
fn no_log_file_configured_exits_one() {
    logsearch()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no log file given"));
}

#[test]
fn unknown_field_is_usage_error() {
    logsearch()
        .args(["some.log", "-f", "severity", "-t", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("severity"));
}

#[test]
fn empty_log_file_reports_zero_total() {
    let file = tempfile::NamedTempFile::new().unwrap();
    logsearch()
        .arg(file.path())
        .args(["--color=never", "-f", "type", "-t", "INFO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of matches found: 0 out of 0"));
}

#[test]
fn malformed_only_file_does_not_crash() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.log");
    std::fs::write(&path, "no delimiters\nstill none\n").unwrap();
    logsearch()
        .arg(&path)
        .args(["--color=never", "-f", "module", "-t", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of matches found: 0 out of 2"))
        .stdout(predicate::str::contains("Skipped 2 malformed lines"));
}
