// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse failures for a typed command line.

use crate::lexer::LexerError;
use crate::span::{context_snippet, Span};
use thiserror::Error;

/// Input that could not be turned into a [`ParsedCommand`](crate::ParsedCommand).
///
/// These never touch repository state; the host reports them as syntax
/// errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Invalid command syntax: {0}")]
    Lexer(#[from] LexerError),

    /// The first word is neither an internal keyword nor `git`/`gh`.
    #[error("Unknown command: '{0}'. Commands should start with 'git' or 'gh'.")]
    UnknownCommand(String),

    /// A bare `git` or `gh`.
    #[error("'{0}' requires a subcommand")]
    MissingSubcommand(String),
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lexer(e) => Some(e.span()),
            _ => None,
        }
    }

    /// The error line followed by a caret snippet when a location is known.
    pub fn diagnostic(&self, input: &str) -> String {
        match self.span() {
            Some(span) => format!("{self}\n{}", context_snippet(input, span)),
            None => self.to_string(),
        }
    }
}
