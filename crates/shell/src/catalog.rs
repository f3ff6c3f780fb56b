// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Static grammar of recognized git and gh commands.
//!
//! The catalog drives help output and lets the executor tell a command it
//! knows but does not simulate apart from one that does not exist.

use crate::command::CommandType;
use std::fmt::Write;

/// One documented flag. `names` lists aliases, short form first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub names: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    /// `gh pr` subcommand, if any
    pub subcommand: Option<&'static str>,
    pub description: &'static str,
    pub usage: &'static str,
    pub flags: &'static [FlagSpec],
    /// False for commands that are recognized but not simulated.
    pub simulated: bool,
}

const fn flag(names: &'static [&'static str], description: &'static str) -> FlagSpec {
    FlagSpec { names, description }
}

const fn git(
    name: &'static str,
    description: &'static str,
    usage: &'static str,
    flags: &'static [FlagSpec],
    simulated: bool,
) -> CommandSpec {
    CommandSpec {
        name,
        subcommand: None,
        description,
        usage,
        flags,
        simulated,
    }
}

const fn gh_pr(
    subcommand: &'static str,
    description: &'static str,
    usage: &'static str,
    flags: &'static [FlagSpec],
) -> CommandSpec {
    CommandSpec {
        name: "pr",
        subcommand: Some(subcommand),
        description,
        usage,
        flags,
        simulated: true,
    }
}

pub static GIT_COMMANDS: &[CommandSpec] = &[
    git("status", "Show the working tree status", "git status", &[], true),
    git(
        "add",
        "Add file contents to the index (staging area)",
        "git add <file>... | git add . | git add -A",
        &[flag(&["-A", "--all"], "Add all changes")],
        true,
    ),
    git(
        "commit",
        "Record changes to the repository",
        "git commit -m '<message>'",
        &[
            flag(&["-m", "--message"], "Commit message (required)"),
            flag(&["-a", "--all"], "Stage all modified files and commit"),
        ],
        true,
    ),
    git(
        "branch",
        "List, create, or delete branches",
        "git branch [<name> [<start-point>]] | git branch -d <name>",
        &[
            flag(&["-d", "--delete"], "Delete a branch"),
            flag(&["-D"], "Force delete a branch"),
            flag(&["-a", "--all"], "List all branches (local and remote)"),
            flag(&["-r", "--remotes"], "List remote branches"),
        ],
        true,
    ),
    git(
        "checkout",
        "Switch branches or restore working tree files",
        "git checkout <branch> | git checkout -b <new-branch> [<start-point>]",
        &[flag(&["-b", "--branch"], "Create and switch to a new branch")],
        true,
    ),
    git(
        "switch",
        "Switch branches (modern alternative to checkout)",
        "git switch <branch> | git switch -c <new-branch> [<start-point>]",
        &[flag(&["-c", "--create"], "Create and switch to a new branch")],
        true,
    ),
    git(
        "merge",
        "Join two or more development histories together",
        "git merge <branch>",
        &[flag(&["--no-ff"], "Create a merge commit even for fast-forward")],
        true,
    ),
    git(
        "log",
        "Show commit logs",
        "git log [--oneline] [-n <number>]",
        &[
            flag(&["--oneline"], "Show abbreviated commits"),
            flag(&["-n", "--max-count"], "Limit number of commits shown"),
        ],
        true,
    ),
    git(
        "push",
        "Update remote refs along with associated objects",
        "git push [-u] [<remote>] [<branch>]",
        &[flag(&["-u", "--set-upstream"], "Set upstream tracking reference")],
        true,
    ),
    git(
        "pull",
        "Fetch from and integrate with another repository",
        "git pull [<remote>] [<branch>]",
        &[],
        true,
    ),
    git(
        "fetch",
        "Download objects and refs from another repository",
        "git fetch [<remote>]",
        &[],
        true,
    ),
    git(
        "remote",
        "Manage set of tracked repositories",
        "git remote [-v]",
        &[flag(&["-v", "--verbose"], "Show remote URL after name")],
        true,
    ),
    git(
        "diff",
        "Show changes between commits, commit and working tree, etc",
        "git diff [--staged]",
        &[flag(&["--staged", "--cached"], "Show staged changes")],
        true,
    ),
    git(
        "restore",
        "Restore working tree files or unstage them",
        "git restore [--staged] <file>",
        &[flag(&["-S", "--staged"], "Unstage instead of discarding")],
        true,
    ),
    git(
        "reset",
        "Reset current HEAD to the specified state",
        "git reset [<file>] | git reset --hard",
        &[
            flag(&["--hard"], "Reset working directory and staging area"),
            flag(&["--soft"], "Reset only HEAD pointer"),
        ],
        true,
    ),
    git("init", "Create an empty Git repository", "git init", &[], false),
    git(
        "clone",
        "Clone a repository into a new directory",
        "git clone <url>",
        &[],
        false,
    ),
    git(
        "rebase",
        "Reapply commits on top of another base tip",
        "git rebase <branch>",
        &[],
        false,
    ),
    git(
        "stash",
        "Stash the changes in a dirty working directory away",
        "git stash [pop]",
        &[],
        false,
    ),
    git(
        "tag",
        "Create, list, or delete tags",
        "git tag [<name>]",
        &[],
        false,
    ),
    git(
        "cherry-pick",
        "Apply the changes introduced by some existing commits",
        "git cherry-pick <commit>",
        &[],
        false,
    ),
];

pub static GH_PR_COMMANDS: &[CommandSpec] = &[
    gh_pr(
        "create",
        "Create a pull request",
        "gh pr create --title '<title>' --body '<body>'",
        &[
            flag(&["-t", "--title"], "PR title"),
            flag(&["-b", "--body"], "PR body"),
            flag(&["-B", "--base"], "Base branch to merge into"),
            flag(&["-H", "--head"], "Branch that contains the changes"),
        ],
    ),
    gh_pr(
        "list",
        "List pull requests",
        "gh pr list [--state <state>]",
        &[flag(&["-s", "--state"], "Filter by state (open, closed, merged, all)")],
    ),
    gh_pr(
        "merge",
        "Merge a pull request",
        "gh pr merge [<number>] [--merge|--squash|--rebase]",
        &[
            flag(&["-m", "--merge"], "Use merge commit"),
            flag(&["-s", "--squash"], "Squash commits before merging"),
            flag(&["-r", "--rebase"], "Rebase commits before merging"),
        ],
    ),
    gh_pr("close", "Close a pull request", "gh pr close <number>", &[]),
    gh_pr("view", "View a pull request", "gh pr view [<number>]", &[]),
    gh_pr(
        "review",
        "Add a review to a pull request",
        "gh pr review <number> [--approve|--request-changes|--comment] [-b <body>]",
        &[
            flag(&["-a", "--approve"], "Approve the pull request"),
            flag(&["-r", "--request-changes"], "Request changes"),
            flag(&["-c", "--comment"], "Comment without approving"),
            flag(&["-b", "--body"], "Review comment"),
        ],
    ),
    gh_pr(
        "edit",
        "Edit a pull request",
        "gh pr edit <number> --add-reviewer <login>[,<login>]",
        &[flag(&["--add-reviewer"], "Request review from users")],
    ),
];

pub fn git_command(name: &str) -> Option<&'static CommandSpec> {
    GIT_COMMANDS.iter().find(|c| c.name == name)
}

pub fn gh_pr_command(subcommand: &str) -> Option<&'static CommandSpec> {
    GH_PR_COMMANDS.iter().find(|c| c.subcommand == Some(subcommand))
}

/// Names of the `gh pr` subcommands, in catalog order.
pub fn gh_pr_subcommands() -> Vec<&'static str> {
    GH_PR_COMMANDS.iter().filter_map(|c| c.subcommand).collect()
}

impl CommandSpec {
    /// Description, usage, and a flag table.
    pub fn help(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.description);
        let _ = writeln!(out);
        let _ = write!(out, "Usage: {}", self.usage);
        if !self.flags.is_empty() {
            let _ = write!(out, "\n\nFlags:");
            for f in self.flags {
                let _ = write!(out, "\n  {:<20} {}", f.names.join(", "), f.description);
            }
        }
        out
    }
}

/// Help for one command. `help pr create` and `help gh pr create` both
/// resolve to the gh entry; anything else is looked up as a git command.
pub fn command_help(kind: CommandType, name: &str, subcommand: Option<&str>) -> String {
    let spec = match (kind, subcommand) {
        (CommandType::Gh, Some(sub)) => gh_pr_command(sub),
        (CommandType::Gh, None) => None,
        _ => git_command(name),
    };
    match spec {
        Some(spec) => spec.help(),
        None => format!("Unknown command: {name}"),
    }
}

/// Resolve the words after `help` to catalog help text.
pub fn help_for_words(words: &[String]) -> String {
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    match words.as_slice() {
        [] => general_help().to_string(),
        ["git", name, ..] => command_help(CommandType::Git, name, None),
        ["gh", "pr", sub, ..] | ["pr", sub, ..] => command_help(CommandType::Gh, "pr", Some(sub)),
        [name, ..] => command_help(CommandType::Git, name, None),
    }
}

pub fn general_help() -> &'static str {
    GENERAL_HELP
}

const GENERAL_HELP: &str = "\
gg - git and GitHub flow simulator

Git Commands:
  git status              Show working tree status
  git add <file>          Stage files for commit
  git commit -m 'msg'     Create a commit
  git branch              List branches
  git checkout -b <name>  Create and switch to branch
  git checkout <branch>   Switch to existing branch
  git push -u origin <b>  Push branch to remote
  git pull                Pull changes from remote
  git merge <branch>      Merge a branch
  git log                 Show commit history

GitHub CLI:
  gh pr create            Create a pull request
  gh pr list              List pull requests
  gh pr merge             Merge a pull request
  gh pr view              View pull request details
  gh pr review            Review a pull request

App Commands:
  help [command]          Show help for a command
  lesson [n]              Show or start a lesson
  lessons                 List all lessons
  hint                    Get a hint for current step
  skip                    Skip the current step
  reset                   Restart the current lesson
  status                  Show repository summary
  tree                    Show the commit graph
  quit                    Exit the application";

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
