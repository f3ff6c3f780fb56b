// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Command-line grammar for the simulator.
//!
//! Turns a typed line such as `git commit -m "Fix bug"` into a
//! [`ParsedCommand`]: the tool (`git`, `gh`, or an internal keyword), the
//! command name, an optional `gh pr` subcommand, flags, and positional
//! arguments.
//!
//! ```ignore
//! let cmd = gg_shell::parse("gh pr create --title 'Add login'")?;
//! assert_eq!(cmd.subcommand.as_deref(), Some("create"));
//! # Ok::<(), gg_shell::ParseError>(())
//! ```
//!
//! [`normalize`] produces a canonical string for comparing two spellings
//! of the same command, and [`catalog`] holds the static table of
//! recognized commands used for help and for rejecting unsimulated ones.

pub mod catalog;
mod command;
mod lexer;
mod parse_error;
mod parser;
pub mod span;

pub use catalog::{CommandSpec, FlagSpec};
pub use command::{CommandType, ParsedCommand, Switch};
pub use lexer::{split_words, tokenize, LexerError, Token};
pub use parse_error::ParseError;
pub use parser::{normalize, parse, split_flags, INTERNAL_COMMANDS};
pub use span::{context_snippet, Span};
