// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for git command routing.

use super::*;
use gg_repo::ChangeKind;

#[test]
fn status_on_fresh_repository() {
    let mut h = setup();
    assert_eq!(
        h.ok("git status"),
        "On branch main\nnothing to commit, working tree clean"
    );
}

#[test]
fn add_without_paths() {
    let mut h = setup();
    let result = h.fails("git add");
    assert_eq!(result.message, "Nothing specified, nothing added.");
    assert_eq!(
        result.hints,
        vec!["Use 'git add <file>' or 'git add .' to stage files"]
    );
}

#[yare::parameterized(
    dot      = { "git add ." },
    all      = { "git add --all" },
    short    = { "git add -A" },
)]
fn add_everything(input: &str) {
    let mut h = setup();
    h.repo.add_working_change("a.txt");
    h.repo.add_working_change("b.txt");
    h.ok(input);
    assert_eq!(h.repo.state().staged.len(), 2);
    assert!(h.repo.state().working.is_empty());
}

#[test]
fn add_several_paths() {
    let mut h = setup();
    h.repo.add_working_change("a.txt");
    h.ok("git add a.txt new.txt");
    let kinds: Vec<ChangeKind> = h.repo.state().staged.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![ChangeKind::Modified, ChangeKind::Added]);
}

#[test]
fn commit_requires_message_value() {
    let mut h = setup();
    h.ok("git add a.txt");
    let result = h.fails("git commit");
    assert_eq!(result.message, "error: switch 'm' requires a value");
    assert_eq!(result.hints, vec!["Usage: git commit -m 'Your commit message'"]);
    let result = h.fails("git commit -m");
    assert_eq!(result.message, "error: switch 'm' requires a value");
    assert_eq!(h.repo.state().commits.len(), 1);
}

#[test]
fn commit_with_empty_message_aborts() {
    let mut h = setup();
    h.ok("git add a.txt");
    let result = h.fails("git commit -m ''");
    assert_eq!(result.message, "Aborting commit due to empty commit message.");
}

#[yare::parameterized(
    short       = { "git commit -m 'Add file'" },
    long        = { "git commit --message \"Add file\"" },
    long_equals = { "git commit --message='Add file'" },
)]
fn commit_message_spellings(input: &str) {
    let mut h = setup();
    h.ok("git add a.txt");
    assert_eq!(h.ok(input), "[main c000002] Add file\n 1 file changed");
}

#[yare::parameterized(
    combined  = { "git commit -am 'Both'" },
    separate  = { "git commit -a -m 'Both'" },
    trailing  = { "git commit -m 'Both' -a" },
)]
fn commit_all_spellings(input: &str) {
    let mut h = setup();
    h.repo.add_working_change("a.txt");
    h.repo.add_working_change("b.txt");
    assert_eq!(h.ok(input), "[main c000002] Both\n 2 files changed");
    assert!(h.repo.state().working.is_empty());
}

#[test]
fn new_branch_needs_staged_changes_before_commit() {
    let mut h = setup();
    assert_eq!(h.ok("git checkout -b feature"), "Switched to a new branch 'feature'");
    let result = h.fails("git commit -m \"x\"");
    assert_eq!(result.message, "nothing to commit, working tree clean");
    assert_eq!(h.repo.state().commits.len(), 1);

    h.repo.add_working_change("login.py");
    h.ok("git add login.py");
    let text = h.ok("git commit -m \"x\"");
    assert!(text.ends_with("\n 1 file changed"), "{text}");
}

#[test]
fn branch_create_list_delete() {
    let mut h = setup();
    h.ok("git branch feature");
    h.ok("git branch topic feature");
    assert_eq!(h.ok("git branch"), "  feature\n* main\n  topic");

    assert_eq!(h.fails("git branch -d").message, "error: branch name required");
    assert_eq!(h.ok("git branch -d topic"), "Deleted branch topic (was c000001).");
    h.ok("git branch -D feature");
    assert_eq!(h.ok("git branch"), "* main");
}

#[test]
fn branch_with_bad_start_point() {
    let mut h = setup();
    let result = h.fails("git branch feature nowhere");
    assert_eq!(result.message, "fatal: not a valid object name: 'nowhere'");
}

#[test]
fn branch_listings_after_push() {
    let mut h = setup();
    h.pushed_feature();
    assert_eq!(h.ok("git branch -r"), "  origin/feature");
    assert_eq!(
        h.ok("git branch -a"),
        "* feature\n  main\n  remotes/origin/feature"
    );
}

#[test]
fn checkout_errors() {
    let mut h = setup();
    let result = h.fails("git checkout -b");
    assert_eq!(result.message, "error: switch 'b' requires a value");
    assert_eq!(result.hints, vec!["Usage: git checkout -b <branch-name>"]);

    let result = h.fails("git checkout");
    assert_eq!(result.message, "error: you must specify a branch to checkout");

    let result = h.fails("git checkout feature");
    assert_eq!(
        result.hints,
        vec!["Did you mean to create branch 'feature'? Use: git checkout -b feature"]
    );
}

#[test]
fn checkout_with_start_point() {
    let mut h = setup();
    h.ok("git checkout -b first");
    h.ok("git add a.txt");
    h.ok("git commit -m one");
    h.ok("git checkout -b second main");
    assert_eq!(h.repo.state().branches["second"].commit, "c000001");
    assert_eq!(h.repo.current_branch(), "second");
}

#[test]
fn checkout_dash_dash_discards_file() {
    let mut h = setup();
    h.repo.add_working_change("a.txt");
    h.ok("git checkout -- a.txt");
    assert!(h.repo.state().working.is_empty());
}

#[test]
fn switch_forms() {
    let mut h = setup();
    assert_eq!(h.ok("git switch -c feature"), "Switched to a new branch 'feature'");
    assert_eq!(h.ok("git switch main"), "Switched to branch 'main'");
    assert_eq!(h.ok("git switch --create other"), "Switched to a new branch 'other'");

    assert_eq!(h.fails("git switch").message, "error: missing branch name");
    let result = h.fails("git switch -c");
    assert_eq!(result.message, "error: switch 'c' requires a value");
    assert_eq!(result.hints, vec!["Usage: git switch -c <branch-name>"]);
}

#[test]
fn merge_requires_branch() {
    let mut h = setup();
    assert_eq!(h.fails("git merge").message, "error: specify a branch to merge");
}

#[yare::parameterized(
    plain = { "git merge feature" },
    no_ff = { "git merge --no-ff feature" },
)]
fn merge_feature_into_main(input: &str) {
    let mut h = setup();
    h.pushed_feature();
    h.ok("git checkout main");
    assert_eq!(h.ok(input), "Merge made by the 'ort' strategy.\n 1 file changed");
    assert_eq!(
        h.repo.state().head_commit().unwrap().message,
        "Merge branch 'feature' into main"
    );
}

#[yare::parameterized(
    default    = { "git log --oneline",               3 },
    n_flag     = { "git log --oneline -n 2",          2 },
    n_attached = { "git log --oneline -n1",           1 },
    dash_count = { "git log --oneline -1",            1 },
    max_count  = { "git log --oneline --max-count=2", 2 },
    bad_value  = { "git log -n lots --oneline",       3 },
)]
fn log_counts(input: &str, lines: usize) {
    let mut h = setup();
    h.ok("git add a");
    h.ok("git commit -m one");
    h.ok("git add b");
    h.ok("git commit -m two");
    assert_eq!(h.ok(input).lines().count(), lines);
}

#[test]
fn log_full_format() {
    let mut h = setup();
    similar_asserts::assert_eq!(
        h.ok("git log"),
        "commit c000001 (HEAD -> main)\nAuthor: learner\nDate:   Tue Nov 14 22:13:20 2023 +0000\n\n    Initial commit"
    );
}

#[yare::parameterized(
    short_upstream = { "git push -u origin feature" },
    long_upstream  = { "git push --set-upstream origin feature" },
    upstream_last  = { "git push origin feature -u" },
)]
fn push_with_upstream(input: &str) {
    let mut h = setup();
    h.ok("git checkout -b feature");
    let text = h.ok(input);
    assert!(text.contains(" * [new branch]      feature -> feature"), "{text}");
    assert!(text.ends_with("branch 'feature' set up to track 'origin/feature'."));
    assert_eq!(
        h.repo.state().branches["feature"].upstream.as_deref(),
        Some("origin/feature")
    );
}

#[test]
fn push_defaults_to_origin_and_current_branch() {
    let mut h = setup();
    h.pushed_feature();
    h.ok("git add more.txt");
    h.ok("git commit -m more");
    let text = h.ok("git push");
    assert!(text.contains("   c000002..c000003  feature -> feature"), "{text}");
    assert_eq!(h.ok("git push"), "Everything up-to-date");
}

#[test]
fn push_to_any_remote() {
    let mut h = setup();
    assert!(h.ok("git push upstream main").contains(" * [new branch]      main -> main"));
    assert!(h.repo.state().remote_branches.contains_key("upstream/main"));
}

#[test]
fn status_shows_ahead_after_push_and_commit() {
    let mut h = setup();
    h.pushed_feature();
    assert!(h.ok("git status").contains("Your branch is up to date with 'origin/feature'."));
    h.ok("git add b.txt");
    h.ok("git commit -m b");
    assert!(h
        .ok("git status")
        .contains("Your branch is ahead of 'origin/feature' by 1 commit."));
}

#[test]
fn pull_and_fetch() {
    let mut h = setup();
    assert_eq!(h.ok("git pull"), "Already up to date.");
    assert_eq!(h.ok("git pull origin main"), "Already up to date.");
    assert!(h.ok("git fetch").ends_with("-> FETCH_HEAD"));
    assert_eq!(h.ok("git pull upstream"), "Already up to date.");
    assert!(h.ok("git fetch upstream").ends_with("-> FETCH_HEAD"));
}

#[test]
fn diff_working_and_staged() {
    let mut h = setup();
    h.repo.add_working_change("a.txt");
    assert!(h.ok("git diff").starts_with("diff --git a/a.txt b/a.txt"));
    assert_eq!(h.ok("git diff --staged"), "");
    h.ok("git add a.txt");
    assert_eq!(h.ok("git diff"), "");
    assert!(h.ok("git diff --cached").contains("+++ b/a.txt"));
}

#[test]
fn remote_listing() {
    let mut h = setup();
    assert_eq!(h.ok("git remote"), "origin");
    assert!(h.ok("git remote -v").ends_with("(push)"));
    assert_eq!(
        h.fails("git remote add upstream https://example.com/x.git").message,
        "git remote add: not yet implemented in simulation"
    );
}

#[test]
fn restore_staged_and_working() {
    let mut h = setup();
    h.repo.add_working_change("a.txt");
    h.ok("git add a.txt");
    h.ok("git restore --staged a.txt");
    assert!(h.repo.state().staged.is_empty());
    assert_eq!(h.repo.state().working, vec!["a.txt"]);

    h.ok("git restore a.txt");
    assert!(h.repo.state().working.is_empty());

    assert_eq!(
        h.fails("git restore").message,
        "fatal: you must specify path(s) to restore"
    );
    assert_eq!(
        h.fails("git restore --staged a.txt").message,
        "error: pathspec 'a.txt' is not staged"
    );
}

#[yare::parameterized(
    reset          = { "git reset a.txt missing.txt" },
    reset_head     = { "git reset HEAD a.txt missing.txt" },
    restore_staged = { "git restore --staged a.txt missing.txt" },
)]
fn unstage_with_unknown_path_is_all_or_nothing(input: &str) {
    let mut h = setup();
    h.repo.add_working_change("a.txt");
    h.ok("git add a.txt");
    let before = h.repo.state().clone();

    let result = h.fails(input);
    assert_eq!(result.message, "error: pathspec 'missing.txt' is not staged");
    assert_eq!(h.repo.state(), &before);
}

#[test]
fn restore_with_unknown_path_keeps_changes() {
    let mut h = setup();
    h.repo.add_working_change("a.txt");
    let result = h.fails("git restore a.txt missing.txt");
    assert_eq!(
        result.message,
        "error: pathspec 'missing.txt' did not match any file(s) known to git"
    );
    assert_eq!(h.repo.state().working, vec!["a.txt"]);
}

#[yare::parameterized(
    path      = { "git reset a.txt" },
    head_path = { "git reset HEAD a.txt" },
    all       = { "git reset" },
)]
fn reset_unstages(input: &str) {
    let mut h = setup();
    h.ok("git add a.txt");
    assert_eq!(h.ok(input), "Unstaged changes after reset:\nM\ta.txt");
    assert!(h.repo.state().staged.is_empty());
}

#[test]
fn reset_modes_are_not_simulated() {
    let mut h = setup();
    let result = h.fails("git reset --hard HEAD");
    assert_eq!(result.message, "git reset --hard: not yet implemented in simulation");
}

#[yare::parameterized(
    rebase = { "git rebase main",    "git rebase: not yet implemented in simulation" },
    stash  = { "git stash",          "git stash: not yet implemented in simulation" },
    init   = { "git init",           "git init: not yet implemented in simulation" },
)]
fn recognized_but_unsimulated(input: &str, message: &str) {
    let mut h = setup();
    let result = h.fails(input);
    assert_eq!(result.message, message);
    assert!(result.hints.is_empty());
}

#[test]
fn unknown_git_command() {
    let mut h = setup();
    let result = h.fails("git frobnicate");
    assert_eq!(result.message, "git: 'frobnicate' is not a git command");
    assert_eq!(result.hints, vec!["Type 'help' to see available commands"]);
}

#[test]
fn handlers_cover_exactly_the_simulated_commands() {
    for spec in catalog::GIT_COMMANDS {
        assert_eq!(
            lookup(GIT_HANDLERS, spec.name).is_some(),
            spec.simulated,
            "git {}",
            spec.name
        );
    }
    for (name, _) in GIT_HANDLERS {
        assert!(catalog::git_command(name).is_some(), "git {name} missing from catalog");
    }
}
