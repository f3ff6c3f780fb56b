// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The structured form of one input line.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which tool a command line addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    /// Session keywords such as `help` or `hint`
    Internal,
    Git,
    Gh,
}

impl CommandType {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandType::Internal => "internal",
            CommandType::Git => "git",
            CommandType::Gh => "gh",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tokenized and classified command line.
///
/// `flags` keeps the dashes (`"-m"`, `"--title"`) and preserves the order
/// flags were typed; a repeated flag keeps its first position and its last
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub command_type: CommandType,
    pub command: String,
    pub subcommand: Option<String>,
    pub args: Vec<String>,
    pub flags: IndexMap<String, Option<String>>,
    pub raw: String,
}

impl ParsedCommand {
    /// True if any of `names` was given.
    pub fn has_flag(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.flags.contains_key(*n))
    }

    /// The value of the first of `names` that was given with a value.
    pub fn flag_value(&self, names: &[&str]) -> Option<&str> {
        names
            .iter()
            .find_map(|n| self.flags.get(*n).and_then(|v| v.as_deref()))
    }

    /// Read a boolean switch.
    ///
    /// The flag grammar lets any flag consume the next non-dash word as its
    /// value, so `git push -u origin main` records `-u = origin`. For
    /// switches that never take a value, the swallowed word is really a
    /// positional argument; it is returned so the caller can put it back.
    pub fn switch(&self, names: &[&str]) -> Switch<'_> {
        let mut set = false;
        let mut swallowed = None;
        for name in names {
            if let Some(value) = self.flags.get(*name) {
                set = true;
                if swallowed.is_none() {
                    swallowed = value.as_deref();
                }
            }
        }
        Switch { set, swallowed }
    }

    /// Positional args with any word swallowed by `switch` restored to
    /// the front.
    pub fn args_with(&self, switch: &Switch<'_>) -> Vec<String> {
        match switch.swallowed {
            Some(word) => std::iter::once(word.to_string())
                .chain(self.args.iter().cloned())
                .collect(),
            None => self.args.clone(),
        }
    }
}

/// Result of [`ParsedCommand::switch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Switch<'a> {
    pub set: bool,
    pub swallowed: Option<&'a str>,
}
