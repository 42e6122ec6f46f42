//! Integration tests for single-query mode (`--field` / `--term`).

use predicates::prelude::*;

use crate::{FIXTURE, logsearch};

#[test]
fn type_query_prints_matches_and_summary() {
    logsearch()
        .args([FIXTURE, "--color=never", "--field", "type", "--term", "INFO"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Search results:"))
        .stdout(predicate::str::contains("Startup complete"))
        .stdout(predicate::str::contains("Listening on 0.0.0.0:8200"))
        .stdout(predicate::str::contains("Evicted 120 entries"))
        .stdout(predicate::str::contains("Seal check failed").not())
        .stdout(predicate::str::contains("Number of matches found: 3 out of 8"))
        .stdout(predicate::str::contains(
            "Skipped 1 malformed line without a usable type field",
        ))
        .stdout(predicate::str::contains("Time elapsed: "));
}

#[test]
fn search_is_case_sensitive() {
    logsearch()
        .args([FIXTURE, "--color=never", "-f", "type", "-t", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of matches found: 0 out of 8"));
}

#[test]
fn field_name_is_case_insensitive() {
    logsearch()
        .args([FIXTURE, "--color=never", "-f", "MODULE", "-t", "Vault"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of matches found: 3 out of 8"));
}

#[test]
fn id_query_skips_lines_without_braces() {
    logsearch()
        .args([FIXTURE, "--color=never", "-f", "id", "-t", "123", "--show-skipped"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of matches found: 3 out of 8"))
        .stdout(predicate::str::contains("skipped line 6: cannot extract id field: no '{' found"))
        .stdout(predicate::str::contains("skipped line 8:"));
}

#[test]
fn matches_keep_file_order() {
    let output = logsearch()
        .args([FIXTURE, "--color=never", "-f", "date", "-t", "2020-11-04"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.find("Startup complete").unwrap();
    let middle = stdout.find("upstream timeout").unwrap();
    let last = stdout.find("Seal check failed").unwrap();
    assert!(first < middle, "file order should be preserved");
    assert!(middle < last, "file order should be preserved");
}

#[test]
fn json_output_is_one_document() {
    let output = logsearch()
        .args([FIXTURE, "-f", "type", "-t", "ERROR", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["field"], "type");
    assert_eq!(value["term"], "ERROR");
    assert_eq!(value["total"], 8);
    assert_eq!(value["matched"], 2);
    assert_eq!(value["skipped"], 1);
    assert_eq!(value["matches"][0]["line"], 5);
    assert_eq!(value["matches"][1]["line"], 7);
    assert_eq!(value["skipped_lines"][0]["line"], 8);
}

#[test]
fn color_always_emits_escape_codes() {
    logsearch()
        .args([FIXTURE, "--color=always", "-f", "module", "-t", "Api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn color_auto_is_plain_when_piped() {
    logsearch()
        .args([FIXTURE, "-f", "module", "-t", "Api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn log_file_from_environment() {
    logsearch()
        .env("LOGSEARCH_FILE", FIXTURE)
        .args(["--color=never", "-f", "type", "-t", "WARN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cache miss ratio above 40%"))
        .stdout(predicate::str::contains("Number of matches found: 1 out of 8"));
}

#[test]
fn completions_print_script() {
    logsearch()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logsearch"));
}
