// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for gh pr command routing.

use super::*;
use gg_repo::{PrStatus, ReviewStatus};

/// Pushed `feature` branch with PR #1 open against main.
fn with_open_pr() -> TestHarness {
    let mut h = setup();
    h.pushed_feature();
    h.ok("gh pr create --title 'Add app' --body 'Adds the app.'");
    h
}

#[test]
fn non_pr_gh_command_is_unsupported() {
    let mut h = setup();
    assert_eq!(
        h.fails("gh issue list").message,
        "gh: 'issue' is not supported. Only 'gh pr' commands are available."
    );
}

#[test]
fn invalid_and_missing_subcommand() {
    let mut h = setup();
    let result = h.fails("gh pr frob");
    assert_eq!(result.message, "gh pr: 'frob' is not a valid subcommand");
    assert_eq!(
        result.hints,
        vec!["Available: create, list, merge, close, view, review, edit"]
    );
    assert_eq!(h.fails("gh pr").message, "gh pr: a subcommand is required");
}

#[test]
fn create_requires_title() {
    let mut h = setup();
    h.pushed_feature();
    let result = h.fails("gh pr create --body 'no title'");
    assert_eq!(result.message, "error: --title is required");
    assert_eq!(
        result.hints,
        vec!["Usage: gh pr create --title 'PR Title' --body 'Description'"]
    );
}

#[test]
fn create_before_push_fails_with_hint() {
    let mut h = setup();
    h.ok("git checkout -b feature");
    let result = h.fails("gh pr create --title \"T\"");
    assert_eq!(
        result.message,
        "error: branch 'feature' has not been pushed to remote"
    );
    assert_eq!(result.hints, vec!["Push your branch first: git push -u origin feature"]);

    h.ok("git push -u origin feature");
    let text = h.ok("gh pr create --title \"T\"");
    assert!(text.ends_with("https://github.com/learner/my-project/pull/1"), "{text}");
}

#[test]
fn create_with_base_and_head_flags() {
    let mut h = setup();
    h.pushed_feature();
    h.ok("git checkout main");
    h.ok("git branch develop");
    let text = h.ok("gh pr create -t 'To develop' -B develop -H feature");
    assert!(text.starts_with("Creating pull request for feature into develop"), "{text}");
}

#[test]
fn list_and_filters() {
    let mut h = with_open_pr();
    assert_eq!(h.ok("gh pr list"), "#1  [O]  Add app\n       feature -> main");
    assert_eq!(h.ok("gh pr list --state merged"), "No pull requests match your search");
    assert!(h.ok("gh pr list -s all").starts_with("#1  [O]"));
    let result = h.fails("gh pr list --state draft");
    assert!(result.message.contains("valid values are {open|closed|merged|all}"));
}

#[test]
fn merge_current_branch_pr_then_reject_second_merge() {
    let mut h = with_open_pr();
    assert_eq!(h.ok("gh pr merge"), "Merged pull request #1 (Add app)");
    assert_eq!(h.repo.current_branch(), "main");
    let commits = h.repo.state().commits.len();

    let result = h.fails("gh pr merge 1");
    assert_eq!(result.message, "error: pull request #1 is already merged");
    assert_eq!(h.repo.state().commits.len(), commits);
    assert_eq!(h.ok("gh pr list --state merged"), "#1  [M]  Add app\n       feature -> main");
}

#[yare::parameterized(
    squash_after  = { "gh pr merge 1 --squash",  "Squashed and merged pull request #1 (Add app)" },
    squash_before = { "gh pr merge --squash 1",  "Squashed and merged pull request #1 (Add app)" },
    rebase_hash   = { "gh pr merge --rebase #1", "Rebased and merged pull request #1 (Add app)" },
    merge_flag    = { "gh pr merge -m 1",        "Merged pull request #1 (Add app)" },
)]
fn merge_methods(input: &str, expected: &str) {
    let mut h = with_open_pr();
    assert_eq!(h.ok(input), expected);
}

#[test]
fn merge_without_open_pr_for_branch() {
    let mut h = setup();
    assert_eq!(
        h.fails("gh pr merge").message,
        "error: no open pull request for current branch"
    );
    assert_eq!(h.fails("gh pr merge one").message, "error: invalid PR number");
}

#[test]
fn close_variants() {
    let mut h = with_open_pr();
    assert_eq!(h.fails("gh pr close").message, "error: PR number required");
    assert_eq!(h.fails("gh pr close abc").message, "error: invalid PR number");
    assert_eq!(h.fails("gh pr close 7").message, "error: pull request #7 not found");
    assert_eq!(h.ok("gh pr close #1"), "Closed pull request #1");
    assert_eq!(
        h.repo.state().pull_requests.get(&1u32).map(|pr| pr.status),
        Some(PrStatus::Closed)
    );
}

#[test]
fn view_by_number_and_current_branch() {
    let mut h = with_open_pr();
    let by_number = h.ok("gh pr view 1");
    assert!(by_number.starts_with("#1: Add app\n  Status: OPEN\n  feature -> main"));
    assert_eq!(h.ok("gh pr view"), by_number);

    h.ok("git checkout main");
    assert_eq!(
        h.fails("gh pr view").message,
        "no pull request found for current branch"
    );
}

#[test]
fn review_approve_latches() {
    let mut h = with_open_pr();
    assert_eq!(h.ok("gh pr review --approve"), "learner approved these changes");
    assert_eq!(
        h.ok("gh pr review 1 --request-changes -b 'Needs tests'"),
        "learner requested changes\n\nNeeds tests"
    );
    let pr = h.repo.state().pull_requests.get(&1u32).unwrap();
    assert!(pr.approved);
    assert_eq!(pr.reviews.len(), 1);
    assert_eq!(pr.reviews[0].status, ReviewStatus::ChangesRequested);
}

#[test]
fn review_number_before_switch_is_recovered() {
    let mut h = with_open_pr();
    h.ok("git checkout main");
    assert_eq!(h.ok("gh pr review --approve 1"), "learner approved these changes");
}

#[test]
fn review_rejections() {
    let mut h = with_open_pr();
    let result = h.fails("gh pr review 1");
    assert_eq!(result.message, "error: did not specify a review action");
    assert_eq!(
        h.fails("gh pr review 1 --comment").message,
        "error: body cannot be blank for comment review"
    );
    assert!(h.repo.state().pull_requests.get(&1u32).unwrap().reviews.is_empty());
}

#[test]
fn edit_adds_reviewers() {
    let mut h = with_open_pr();
    assert_eq!(
        h.ok("gh pr edit 1 --add-reviewer 'alice, bob'"),
        "Requested review from: alice, bob"
    );
    let reviews = &h.repo.state().pull_requests.get(&1u32).unwrap().reviews;
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r.status == ReviewStatus::Pending));

    assert_eq!(h.fails("gh pr edit 1").message, "error: specify a change to make");
    assert_eq!(h.fails("gh pr edit").message, "error: PR number required");
}
