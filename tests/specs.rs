//! Behavioral specifications for the gg CLI.
//!
//! These tests are black-box: they start the binary, type lines on its
//! stdin, and verify stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// session/
#[path = "specs/session/free_practice.rs"]
mod session_free_practice;
#[path = "specs/session/lessons.rs"]
mod session_lessons;
#[path = "specs/session/snapshot.rs"]
mod session_snapshot;
