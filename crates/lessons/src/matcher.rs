// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tolerant comparison of typed commands against expected ones.

use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// Collapse runs of whitespace and lowercase.
pub fn normalize_command(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True if `input` and `expected` are the same command up to whitespace,
/// case, quote style, and (for git commands) word order.
pub fn commands_match(input: &str, expected: &str) -> bool {
    let input = normalize_command(input);
    let expected = normalize_command(expected);
    if input == expected {
        return true;
    }

    let input = input.replace('\'', "\"");
    let expected = expected.replace('\'', "\"");
    if input == expected {
        return true;
    }

    if input.starts_with("git ") && expected.starts_with("git ") {
        let a: HashSet<&str> = input.split(' ').collect();
        let b: HashSet<&str> = expected.split(' ').collect();
        return a == b;
    }
    false
}

/// Compile a step pattern: case-insensitive, anchored at the start.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{pattern})"))
        .case_insensitive(true)
        .build()
}

/// True if `pattern` matches the start of `input`. A pattern that does
/// not compile never matches.
pub fn pattern_matches(pattern: &str, input: &str) -> bool {
    match compile_pattern(pattern) {
        Ok(re) => re.is_match(input),
        Err(e) => {
            tracing::warn!(pattern, error = %e, "ignoring invalid step pattern");
            false
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
