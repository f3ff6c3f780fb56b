//! CLI flag specs
//!
//! Verify help and version output and flag validation.

use crate::prelude::*;

#[test]
fn gg_help_shows_usage() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage: gg [OPTIONS]")
        .stdout_has("--lessons-dir <DIR>")
        .stdout_has("--deterministic");
}

#[test]
fn gg_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("gg 0.1");
}

#[test]
fn gg_unknown_flag_fails() {
    cli()
        .args(&["--verbose"])
        .fails()
        .stderr_has("unexpected argument '--verbose'");
}
