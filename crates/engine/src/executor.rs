// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command executor
//!
//! Routes a [`ParsedCommand`] to the repository or hosting operation it
//! names. Handlers are plain `fn` pointers in static tables keyed by
//! command name (and by subcommand for `gh pr`).

use crate::{gh, git};
use gg_core::CommandResult;
use gg_repo::VirtualRepository;
use gg_shell::catalog::{self, help_for_words};
use gg_shell::{CommandType, ParseError, ParsedCommand};

/// Signature shared by every command handler.
pub(crate) type Handler = fn(&mut VirtualRepository, &ParsedCommand) -> CommandResult;

static GIT_HANDLERS: &[(&str, Handler)] = &[
    ("status", git::status),
    ("add", git::add),
    ("commit", git::commit),
    ("branch", git::branch),
    ("checkout", git::checkout),
    ("switch", git::switch),
    ("merge", git::merge),
    ("log", git::log),
    ("push", git::push),
    ("pull", git::pull),
    ("fetch", git::fetch),
    ("diff", git::diff),
    ("remote", git::remote),
    ("restore", git::restore),
    ("reset", git::reset),
];

static GH_PR_HANDLERS: &[(&str, Handler)] = &[
    ("create", gh::create),
    ("list", gh::list),
    ("merge", gh::merge),
    ("close", gh::close),
    ("view", gh::view),
    ("review", gh::review),
    ("edit", gh::edit),
];

fn lookup(table: &[(&str, Handler)], name: &str) -> Option<Handler> {
    table.iter().find(|(n, _)| *n == name).map(|(_, h)| *h)
}

/// Stateless router from parsed commands to repository operations.
///
/// The repository is passed to every call so the host can swap it out
/// (a lesson restart builds a fresh one) without rebuilding the executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Parse `input` and execute it. Syntax errors come back as `Err`
    /// and leave the repository untouched.
    pub fn run(
        &self,
        repo: &mut VirtualRepository,
        input: &str,
    ) -> Result<CommandResult, ParseError> {
        let cmd = gg_shell::parse(input)?;
        Ok(self.execute(repo, &cmd))
    }

    /// Execute a single command with tracing
    pub fn execute(&self, repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
        let span = tracing::info_span!(
            "command",
            kind = %cmd.command_type,
            name = %cmd.command,
            sub = cmd.subcommand.as_deref().unwrap_or(""),
        );
        let _guard = span.enter();

        let result = match cmd.command_type {
            CommandType::Internal => internal(cmd),
            CommandType::Git => self.git(repo, cmd),
            CommandType::Gh => self.gh(repo, cmd),
        };

        if result.success {
            tracing::info!("completed");
        } else {
            tracing::info!(message = %result.message, "rejected");
        }
        result
    }

    fn git(&self, repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
        let Some(spec) = catalog::git_command(&cmd.command) else {
            return CommandResult::error(format!("git: '{}' is not a git command", cmd.command))
                .with_hint("Type 'help' to see available commands");
        };
        match lookup(GIT_HANDLERS, spec.name) {
            Some(handler) if spec.simulated => handler(repo, cmd),
            _ => CommandResult::error(format!(
                "git {}: not yet implemented in simulation",
                spec.name
            )),
        }
    }

    fn gh(&self, repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
        if cmd.command != "pr" {
            return CommandResult::error(format!(
                "gh: '{}' is not supported. Only 'gh pr' commands are available.",
                cmd.command
            ));
        }
        let sub = cmd.subcommand.as_deref().unwrap_or_default();
        match lookup(GH_PR_HANDLERS, sub) {
            Some(handler) => handler(repo, cmd),
            None => {
                let message = if sub.is_empty() {
                    "gh pr: a subcommand is required".to_string()
                } else {
                    format!("gh pr: '{sub}' is not a valid subcommand")
                };
                CommandResult::error(message).with_hint(format!(
                    "Available: {}",
                    catalog::gh_pr_subcommands().join(", ")
                ))
            }
        }
    }
}

/// Keywords the executor answers itself. Session keywords (`hint`,
/// `lesson`, ...) belong to the host; reaching here means it did not
/// intercept them.
fn internal(cmd: &ParsedCommand) -> CommandResult {
    match cmd.command.as_str() {
        "help" => CommandResult::output(help_for_words(&cmd.args)),
        "quit" | "exit" => CommandResult::exit(),
        other => CommandResult::message(format!("Internal command: {other}")),
    }
}

#[cfg(test)]
#[path = "executor_tests/mod.rs"]
mod tests;
