//! Integration tests for the `logsearch` binary.

mod errors;
mod interactive;
mod one_shot;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;

pub const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/log20201104.txt");

pub fn logsearch() -> Command {
    let mut cmd = cargo_bin_cmd!("logsearch");
    cmd.env("XDG_CONFIG_HOME", "/tmp/logsearch-test-no-config");
    cmd.env_remove("LOGSEARCH_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}
