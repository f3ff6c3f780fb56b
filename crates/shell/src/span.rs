// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for command-line diagnostics.

use serde::{Deserialize, Serialize};

/// A byte range in the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the spanned text, or `""` when out of bounds.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Render the input line with carets under `span`.
///
/// ```text
/// git commit -m "oops
///               ^^^^^
/// ```
///
/// Columns are counted in characters so multi-byte input lines up.
pub fn context_snippet(input: &str, span: Span) -> String {
    let start = span.start.min(input.len());
    let end = span.end.clamp(start, input.len());
    let col = input.get(..start).map_or(0, |s| s.chars().count());
    let width = input.get(start..end).map_or(0, |s| s.chars().count()).max(1);
    format!("{}\n{}{}", input, " ".repeat(col), "^".repeat(width))
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
