//! Integration tests for the interactive prompt loop over stdin.

use predicates::prelude::*;

use crate::{FIXTURE, logsearch};

#[test]
fn eof_ends_session_cleanly() {
    logsearch()
        .args([FIXTURE, "--color=never"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Log search application!"))
        .stdout(predicate::str::contains("Loaded 8 lines from"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn query_then_exit() {
    logsearch()
        .args([FIXTURE, "--color=never"])
        .write_stdin("module\nCache\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input search type. Possible options: DATE, TYPE, ID, MODULE"))
        .stdout(predicate::str::contains("Input search parameter (case sensitive)."))
        .stdout(predicate::str::contains("Cache miss ratio above 40%"))
        .stdout(predicate::str::contains("Evicted 120 entries"))
        .stdout(predicate::str::contains("Number of matches found: 2 out of 8"));
}

#[test]
fn invalid_search_type_reprompts() {
    let output = logsearch()
        .args([FIXTURE, "--color=never"])
        .write_stdin("severity\nType\nERROR\nquit\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout
            .matches("Wrong search type. Please input: DATE, TYPE, ID or MODULE.")
            .count(),
        1
    );
    assert!(stdout.contains("Number of matches found: 2 out of 8"));
}

#[test]
fn several_queries_in_one_session() {
    let output = logsearch()
        .args([FIXTURE, "--color=never"])
        .write_stdin("date\n10:02\nid\n30017\n")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Search results:").count(), 2);
    assert!(stdout.contains("Number of matches found: 2 out of 8"));
    assert!(stdout.contains("Number of matches found: 1 out of 8"));
}
