// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn exit_result_is_detected_and_not_rendered() {
    let result = CommandResult::exit();
    assert!(result.success);
    assert!(result.is_exit());
    assert_eq!(result.render(), "");
}

#[test]
fn error_renders_message_then_hints() {
    let result = CommandResult::error("nothing to commit, working tree clean")
        .with_hint("Use 'git add <file>' to stage changes");
    assert!(!result.success);
    assert_eq!(
        result.render(),
        "nothing to commit, working tree clean\nhint: Use 'git add <file>' to stage changes"
    );
}

#[test]
fn output_precedes_message() {
    let result = CommandResult::output("Switched to branch 'x'").with_hint("next");
    assert_eq!(result.render(), "Switched to branch 'x'\nhint: next");
}

#[test]
fn with_output_keeps_failure_flag() {
    let result = CommandResult::error("boom").with_output("partial");
    assert!(!result.success);
    assert_eq!(result.output.as_deref(), Some("partial"));
    assert_eq!(result.render(), "partial\nboom");
}
