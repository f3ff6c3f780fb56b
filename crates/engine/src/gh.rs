// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gh pr` command handlers.

use gg_core::CommandResult;
use gg_repo::{Hosting, MergeMethod, PrFilter, ReviewStatus, VirtualRepository, DEFAULT_BRANCH};
use gg_shell::ParsedCommand;

/// Accepts `7` and `#7`.
fn parse_number(word: &str) -> Result<u32, CommandResult> {
    word.trim_start_matches('#')
        .parse()
        .map_err(|_| CommandResult::error("error: invalid PR number"))
}

/// Explicit number from `args`, else the open PR whose head is the
/// current branch.
fn number_or_current(
    repo: &mut VirtualRepository,
    args: &[String],
) -> Result<u32, CommandResult> {
    if let Some(word) = args.first() {
        return parse_number(word);
    }
    let branch = repo.current_branch().to_string();
    Hosting::new(repo)
        .open_pr_for(&branch)
        .ok_or_else(|| CommandResult::error("error: no open pull request for current branch"))
}

pub(crate) fn create(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    let Some(title) = cmd.flag_value(&["-t", "--title"]).filter(|t| !t.is_empty()) else {
        return CommandResult::error("error: --title is required")
            .with_hint("Usage: gh pr create --title 'PR Title' --body 'Description'");
    };
    let body = cmd.flag_value(&["-b", "--body"]).unwrap_or_default();
    let base = cmd.flag_value(&["-B", "--base"]).unwrap_or(DEFAULT_BRANCH);
    let head = cmd.flag_value(&["-H", "--head"]);
    Hosting::new(repo).create_pr(title, body, head, base)
}

pub(crate) fn list(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    let filter = match cmd.flag_value(&["-s", "--state"]) {
        Some(state) => match state.parse::<PrFilter>() {
            Ok(filter) => filter,
            Err(message) => return CommandResult::error(message),
        },
        None => PrFilter::default(),
    };
    Hosting::new(repo).list_prs(filter)
}

pub(crate) fn merge(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    let squash = cmd.switch(&["--squash", "-s"]);
    let rebase = cmd.switch(&["--rebase", "-r"]);
    let plain = cmd.switch(&["--merge", "-m"]);
    let method = if squash.set {
        MergeMethod::Squash
    } else if rebase.set {
        MergeMethod::Rebase
    } else {
        MergeMethod::Merge
    };
    let swallowed = [squash, rebase, plain]
        .into_iter()
        .find(|s| s.swallowed.is_some())
        .unwrap_or_default();
    let args = cmd.args_with(&swallowed);

    let number = match number_or_current(repo, &args) {
        Ok(n) => n,
        Err(e) => return e,
    };
    Hosting::new(repo).merge_pr(number, method)
}

pub(crate) fn close(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    let Some(word) = cmd.args.first() else {
        return CommandResult::error("error: PR number required");
    };
    match parse_number(word) {
        Ok(number) => Hosting::new(repo).close_pr(number),
        Err(e) => e,
    }
}

pub(crate) fn view(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    let number = match cmd.args.first() {
        Some(word) => match parse_number(word) {
            Ok(n) => n,
            Err(e) => return e,
        },
        None => {
            let branch = repo.current_branch().to_string();
            match Hosting::new(repo).pr_for(&branch) {
                Some(n) => n,
                None => {
                    return CommandResult::error("no pull request found for current branch")
                }
            }
        }
    };
    Hosting::new(repo).view_pr(number)
}

/// `gh pr review [n] --approve | --request-changes | --comment [-b text]`.
/// The review is recorded under the configured author.
pub(crate) fn review(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    let approve = cmd.switch(&["--approve", "-a"]);
    let changes = cmd.switch(&["--request-changes", "-r"]);
    let comment = cmd.switch(&["--comment", "-c"]);
    let (status, action, chosen) = if approve.set {
        (ReviewStatus::Approved, "approve", approve)
    } else if changes.set {
        (ReviewStatus::ChangesRequested, "request-changes", changes)
    } else if comment.set {
        (ReviewStatus::Commented, "comment", comment)
    } else {
        return CommandResult::error("error: did not specify a review action")
            .with_hint("Use --approve, --request-changes, or --comment");
    };

    let body = cmd.flag_value(&["-b", "--body"]).filter(|b| !b.is_empty());
    if body.is_none() && status != ReviewStatus::Approved {
        return CommandResult::error(format!("error: body cannot be blank for {action} review"))
            .with_hint("Add a message with --body 'text'");
    }

    let args = cmd.args_with(&chosen);
    let number = match number_or_current(repo, &args) {
        Ok(n) => n,
        Err(e) => return e,
    };
    let reviewer = repo.config().author.clone();
    Hosting::new(repo).add_review(number, &reviewer, status, body)
}

/// `gh pr edit <n> --add-reviewer a,b`
pub(crate) fn edit(repo: &mut VirtualRepository, cmd: &ParsedCommand) -> CommandResult {
    let Some(word) = cmd.args.first() else {
        return CommandResult::error("error: PR number required");
    };
    let number = match parse_number(word) {
        Ok(n) => n,
        Err(e) => return e,
    };
    let reviewers: Vec<String> = cmd
        .flag_value(&["--add-reviewer"])
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect();
    if reviewers.is_empty() {
        return CommandResult::error("error: specify a change to make")
            .with_hint("Usage: gh pr edit <number> --add-reviewer <login>[,<login>]");
    }
    Hosting::new(repo).request_review(number, &reviewers)
}
