// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for internal keywords and parse failures.

use super::*;
use gg_shell::catalog::general_help;

#[test]
fn help_without_topic() {
    let mut h = setup();
    assert_eq!(h.ok("help"), general_help());
}

#[yare::parameterized(
    git_name     = { "help commit",         "Usage: git commit -m '<message>'" },
    git_prefixed = { "help git push",       "Usage: git push [-u] [<remote>] [<branch>]" },
    gh_sub       = { "help gh pr create",   "Usage: gh pr create --title '<title>' --body '<body>'" },
    unknown      = { "help frobnicate",     "Unknown command: frobnicate" },
)]
fn help_for_topic(input: &str, expected: &str) {
    let mut h = setup();
    let text = h.ok(input);
    assert!(text.contains(expected), "{text}");
}

#[yare::parameterized(
    quit  = { "quit" },
    exit  = { "exit" },
    upper = { "EXIT" },
)]
fn quit_returns_exit_sentinel(input: &str) {
    let mut h = setup();
    let result = h.run(input);
    assert!(result.is_exit());
    assert_eq!(result.message, gg_core::EXIT_SENTINEL);
}

#[test]
fn session_keywords_pass_through() {
    let mut h = setup();
    let result = h.run("hint");
    assert!(result.success);
    assert_eq!(result.message, "Internal command: hint");
}

#[test]
fn parse_errors_leave_repository_untouched() {
    let mut h = setup();
    let before = h.repo.state().clone();
    let executor = CommandExecutor::new();

    let err = executor.run(&mut h.repo, "git commit -m 'oops").unwrap_err();
    assert!(matches!(err, ParseError::Lexer(_)));
    let err = executor.run(&mut h.repo, "svn status").unwrap_err();
    assert!(matches!(err, ParseError::UnknownCommand(ref w) if w == "svn"));
    let err = executor.run(&mut h.repo, "   ").unwrap_err();
    assert!(matches!(err, ParseError::Empty));

    assert_eq!(h.repo.state(), &before);
}
