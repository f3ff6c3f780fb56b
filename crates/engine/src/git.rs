// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `git` command handlers.
//!
//! Each handler pulls its arguments out of the parsed flags, rejects
//! missing required values with git's wording, and forwards to the
//! repository.

use gg_core::CommandResult;
use gg_repo::{BranchListing, VirtualRepository, DEFAULT_REMOTE};
use gg_shell::ParsedCommand;

/// Entries shown by `git log` without a count.
pub const DEFAULT_LOG_COUNT: usize = 10;

pub(crate) fn status(repo: &mut VirtualRepository, _cmd: &ParsedCommand) -> CommandResult {
    repo.status_output()
}

pub(crate) fn add(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    if cmd.has_flag(&["-A", "--all"]) {
        return repo.add("-A");
    }
    if cmd.args.is_empty() {
        return CommandResult::error("Nothing specified, nothing added.")
            .with_hint("Use 'git add <file>' or 'git add .' to stage files");
    }
    for path in &cmd.args {
        let result = repo.add(path);
        if !result.success {
            return result;
        }
    }
    CommandResult::ok()
}

pub(crate) fn commit(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    // `-am "msg"` arrives as one flag carrying the message.
    let Some(message) = cmd.flag_value(&["-m", "--message", "-am"]) else {
        return CommandResult::error("error: switch 'm' requires a value")
            .with_hint("Usage: git commit -m 'Your commit message'");
    };
    let add_all = cmd.has_flag(&["-a", "--all", "-am"]);
    repo.commit(message, add_all)
}

pub(crate) fn branch(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    if cmd.has_flag(&["-d", "-D", "--delete"]) {
        let name = cmd
            .flag_value(&["-d", "-D", "--delete"])
            .or_else(|| cmd.args.first().map(String::as_str));
        let Some(name) = name else {
            return CommandResult::error("error: branch name required");
        };
        let force = cmd.has_flag(&["-D", "-f", "--force"]);
        return repo.delete_branch(name, force);
    }

    let all = cmd.switch(&["-a", "--all"]);
    let remotes = cmd.switch(&["-r", "--remotes"]);
    if all.set || remotes.set {
        let listing = if all.set {
            BranchListing::All
        } else {
            BranchListing::Remotes
        };
        return repo.list_branches(listing);
    }

    match cmd.args.as_slice() {
        [] => repo.list_branches(BranchListing::Local),
        [name] => repo.create_branch(name, None),
        [name, start, ..] => repo.create_branch(name, Some(start.as_str())),
    }
}

/// Name and start point for `checkout -b` / `switch -c`. The name is
/// normally the flag's value; `-b` typed last leaves it in the args.
fn create_target<'a>(cmd: &'a ParsedCommand, names: &[&str]) -> Option<(&'a str, Option<&'a str>)> {
    match cmd.flag_value(names) {
        Some(name) => Some((name, cmd.args.first().map(String::as_str))),
        None => cmd
            .args
            .first()
            .map(|name| (name.as_str(), cmd.args.get(1).map(String::as_str))),
    }
}

pub(crate) fn checkout(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    if let Some(path) = cmd.flag_value(&["--"]) {
        return repo.discard(&[path]);
    }
    if cmd.has_flag(&["-b", "--branch"]) {
        let Some((name, start)) = create_target(cmd, &["-b", "--branch"]) else {
            return CommandResult::error("error: switch 'b' requires a value")
                .with_hint("Usage: git checkout -b <branch-name>");
        };
        return repo.checkout(name, true, start);
    }
    let Some(target) = cmd.args.first() else {
        return CommandResult::error("error: you must specify a branch to checkout")
            .with_hint("Usage: git checkout <branch-name>");
    };
    repo.checkout(target, false, None)
}

pub(crate) fn switch(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    if cmd.has_flag(&["-c", "--create"]) {
        let Some((name, start)) = create_target(cmd, &["-c", "--create"]) else {
            return CommandResult::error("error: switch 'c' requires a value")
                .with_hint("Usage: git switch -c <branch-name>");
        };
        return repo.checkout(name, true, start);
    }
    let Some(target) = cmd.args.first() else {
        return CommandResult::error("error: missing branch name");
    };
    repo.checkout(target, false, None)
}

pub(crate) fn merge(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    let no_ff = cmd.switch(&["--no-ff"]);
    let args = cmd.args_with(&no_ff);
    let Some(branch) = args.first() else {
        return CommandResult::error("error: specify a branch to merge");
    };
    repo.merge(branch, no_ff.set)
}

/// Count from `-n N`, `--max-count N`, `-nN` or `-N`. Unreadable values
/// fall back to the default.
fn log_count(cmd: &ParsedCommand) -> usize {
    let mut count = DEFAULT_LOG_COUNT;
    for (name, value) in &cmd.flags {
        let digits = match name.as_str() {
            "-n" | "--max-count" => value.as_deref(),
            other => other
                .strip_prefix("-n")
                .or_else(|| other.strip_prefix('-'))
                .filter(|d| !d.is_empty() && d.chars().all(|c| c.is_ascii_digit())),
        };
        if let Some(n) = digits.and_then(|d| d.parse().ok()) {
            count = n;
        }
    }
    count
}

pub(crate) fn log(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    let oneline = cmd.has_flag(&["--oneline"]);
    repo.log(log_count(cmd), oneline)
}

pub(crate) fn push(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    // `-u origin main` parses as `-u = origin`; put the remote back.
    let upstream = cmd.switch(&["-u", "--set-upstream"]);
    let args = cmd.args_with(&upstream);
    let remote = args.first().map_or(DEFAULT_REMOTE, String::as_str);
    let branch = args.get(1).map(String::as_str);
    repo.push(remote, branch, upstream.set)
}

pub(crate) fn pull(repo: &mut VirtualRepository, _cmd: &ParsedCommand) -> CommandResult {
    repo.pull()
}

pub(crate) fn fetch(repo: &mut VirtualRepository, _cmd: &ParsedCommand) -> CommandResult {
    repo.fetch()
}

pub(crate) fn diff(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    repo.diff(cmd.has_flag(&["--staged", "--cached"]))
}

pub(crate) fn remote(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    if let Some(sub) = cmd.args.first() {
        return CommandResult::error(format!(
            "git remote {sub}: not yet implemented in simulation"
        ));
    }
    repo.remotes(cmd.has_flag(&["-v", "--verbose"]))
}

pub(crate) fn restore(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    let staged = cmd.switch(&["--staged", "-S"]);
    let paths = cmd.args_with(&staged);
    if paths.is_empty() {
        return CommandResult::error("fatal: you must specify path(s) to restore");
    }
    if staged.set {
        repo.unstage(&paths)
    } else {
        repo.discard(&paths)
    }
}

pub(crate) fn reset(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    if let Some(mode) = ["--hard", "--soft", "--mixed"]
        .into_iter()
        .find(|m| cmd.flags.contains_key(*m))
    {
        return CommandResult::error(format!("git reset {mode}: not yet implemented in simulation"))
            .with_hint("Use 'git restore --staged <file>' to unstage a file");
    }

    let mut paths: Vec<String> = cmd
        .args
        .iter()
        .filter(|a| a.as_str() != "HEAD")
        .cloned()
        .collect();
    if paths.is_empty() {
        paths = repo
            .state()
            .staged
            .iter()
            .map(|c| c.filename.clone())
            .collect();
    }
    let result = repo.unstage(&paths);
    if !result.success {
        return result;
    }

    let working = &repo.state().working;
    if working.is_empty() {
        return CommandResult::ok();
    }
    let lines: Vec<String> = working.iter().map(|f| format!("M\t{f}")).collect();
    CommandResult::output(format!("Unstaged changes after reset:\n{}", lines.join("\n")))
}
