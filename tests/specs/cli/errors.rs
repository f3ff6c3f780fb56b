//! Startup error specs
//!
//! Problems with files named on the command line stop the program before
//! the session starts.

use crate::prelude::*;

#[test]
fn missing_snapshot_fails() {
    cli()
        .args(&["--no-builtin", "--load", "/nonexistent/state.json"])
        .fails()
        .stderr_has("Error: failed to load snapshot /nonexistent/state.json")
        .stdout_lacks("gg - git and GitHub flow simulator");
}

#[test]
fn inconsistent_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(
        &path,
        r#"{"commits": {"abc1234": {"message": "x"}}, "branches": {"main": {"commit_id": "abc1234"}}, "head": "gone"}"#,
    )
    .unwrap();
    cli()
        .args(&["--no-builtin", "--load", path.to_str().unwrap()])
        .fails()
        .stderr_has("head 'gone' does not name a branch");
}

#[test]
fn missing_explicit_config_fails() {
    cli()
        .args(&["--config", "/nonexistent/gg.toml"])
        .fails()
        .stderr_has("Error: failed to read config /nonexistent/gg.toml");
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gg.toml");
    std::fs::write(&path, "[repo]\nauthor = 7\n").unwrap();
    cli()
        .args(&["--config", path.to_str().unwrap()])
        .fails()
        .stderr_has("invalid config");
}
