// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The uniform outcome of every simulated command.

use serde::{Deserialize, Serialize};

/// Message value that tells the host to end the session.
pub const EXIT_SENTINEL: &str = "__EXIT__";

/// Outcome of a repository, hosting, or executor operation.
///
/// Business-rule failures are reported here with `success == false` rather
/// than as `Err`; `message` carries the git-style error line and `hints`
/// carries corrective suggestions. `output` is the command's stdout text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl CommandResult {
    /// Success with no text.
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Success carrying command output.
    pub fn output(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: Some(output.into()),
            ..Self::default()
        }
    }

    /// Success carrying a status message only.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn exit() -> Self {
        Self::message(EXIT_SENTINEL)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// True when the host should terminate the session.
    pub fn is_exit(&self) -> bool {
        self.message == EXIT_SENTINEL
    }

    /// All user-visible text: output, then message, then hints.
    pub fn render(&self) -> String {
        let mut parts = Vec::new();
        if let Some(out) = self.output.as_deref().filter(|s| !s.is_empty()) {
            parts.push(out.to_string());
        }
        if !self.message.is_empty() && !self.is_exit() {
            parts.push(self.message.clone());
        }
        parts.extend(self.hints.iter().map(|h| format!("hint: {h}")));
        parts.join("\n")
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
