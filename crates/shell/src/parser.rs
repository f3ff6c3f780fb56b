// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classify a tokenized line into a [`ParsedCommand`].

use crate::command::{CommandType, ParsedCommand};
use crate::lexer::split_words;
use crate::parse_error::ParseError;
use indexmap::IndexMap;

/// Session keywords recognized before `git`/`gh`.
pub const INTERNAL_COMMANDS: &[&str] = &[
    "help", "quit", "exit", "lesson", "lessons", "hint", "skip", "reset",
];

/// Parse one input line.
///
/// ```ignore
/// let cmd = gg_shell::parse("git checkout -b feature")?;
/// assert_eq!(cmd.command, "checkout");
/// assert_eq!(cmd.flags["-b"].as_deref(), Some("feature"));
/// ```
pub fn parse(input: &str) -> Result<ParsedCommand, ParseError> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(ParseError::Empty);
    }
    let tokens = split_words(raw)?;
    let Some((first, rest)) = tokens.split_first() else {
        return Err(ParseError::Empty);
    };

    let head = first.to_lowercase();
    if INTERNAL_COMMANDS.contains(&head.as_str()) {
        return Ok(ParsedCommand {
            command_type: CommandType::Internal,
            command: head,
            subcommand: None,
            args: rest.to_vec(),
            flags: IndexMap::new(),
            raw: raw.to_string(),
        });
    }

    let command_type = match head.as_str() {
        "git" => CommandType::Git,
        "gh" => CommandType::Gh,
        _ => return Err(ParseError::UnknownCommand(head)),
    };
    let Some((command, mut rest)) = rest.split_first() else {
        return Err(ParseError::MissingSubcommand(head));
    };

    let mut subcommand = None;
    if command_type == CommandType::Gh && command == "pr" {
        if let Some((sub, tail)) = rest.split_first() {
            subcommand = Some(sub.clone());
            rest = tail;
        }
    }

    let (flags, args) = split_flags(rest);
    Ok(ParsedCommand {
        command_type,
        command: command.clone(),
        subcommand,
        args,
        flags,
        raw: raw.to_string(),
    })
}

/// Separate flags from positional arguments.
///
/// `--name=value` splits at the first `=`. Any other flag (`--name` or a
/// short `-x`) takes the following word as its value unless that word
/// starts with `-`. A lone `-` is positional.
pub fn split_flags(tokens: &[String]) -> (IndexMap<String, Option<String>>, Vec<String>) {
    let mut flags = IndexMap::new();
    let mut args = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let is_long = token.starts_with("--");
        let is_short = !is_long && token.starts_with('-') && token.len() > 1;

        if is_long && token.contains('=') {
            if let Some((key, value)) = token.split_once('=') {
                flags.insert(key.to_string(), Some(value.to_string()));
            }
        } else if is_long || is_short {
            match tokens.get(i + 1) {
                Some(next) if !next.starts_with('-') => {
                    flags.insert(token.clone(), Some(next.clone()));
                    i += 1;
                }
                _ => {
                    flags.insert(token.clone(), None);
                }
            }
        } else {
            args.push(token.clone());
        }
        i += 1;
    }
    (flags, args)
}

/// Canonical form of a command line, used to compare what a learner typed
/// with what a lesson expects.
///
/// Flags are sorted by name; empty flag values are dropped. Unparseable
/// input falls back to its trimmed lowercase form.
pub fn normalize(input: &str) -> String {
    let Ok(parsed) = parse(input) else {
        return input.trim().to_lowercase();
    };

    let mut parts: Vec<&str> = vec![parsed.command_type.as_str(), parsed.command.as_str()];
    if let Some(sub) = &parsed.subcommand {
        parts.push(sub);
    }
    let mut names: Vec<&String> = parsed.flags.keys().collect();
    names.sort();
    for name in names {
        parts.push(name);
        if let Some(Some(value)) = parsed.flags.get(name.as_str()) {
            if !value.is_empty() {
                parts.push(value);
            }
        }
    }
    parts.extend(parsed.args.iter().map(String::as_str));
    parts.join(" ")
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
