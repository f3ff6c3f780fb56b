// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{pushed_feature, repo};
use proptest::prelude::*;

fn open_pr(repo: &mut VirtualRepository) -> u32 {
    let result = Hosting::new(repo).create_pr("Add app", "Adds the app.", None, "main");
    assert!(result.success, "{}", result.message);
    1
}

#[test]
fn create_before_push_hints() {
    let mut repo = repo();
    repo.checkout("feature", true, None);
    let result = Hosting::new(&mut repo).create_pr("t", "", None, "main");
    assert!(!result.success);
    assert_eq!(
        result.message,
        "error: branch 'feature' has not been pushed to remote"
    );
    assert_eq!(result.hints, vec!["Push your branch first: git push -u origin feature"]);
    assert!(repo.state().pull_requests.is_empty());
}

#[yare::parameterized(
    self_target  = { None,          "feature", "error: cannot create PR from a branch to itself" },
    no_source    = { Some("ghost"), "main",    "error: branch 'ghost' does not exist" },
    no_base      = { None,          "develop", "error: base branch 'develop' does not exist" },
)]
fn create_rejections(source: Option<&str>, target: &str, message: &str) {
    let mut repo = pushed_feature();
    let result = Hosting::new(&mut repo).create_pr("t", "", source, target);
    assert_eq!(result.message, message);
    assert_eq!(repo.state().next_pr_number, 1);
}

#[test]
fn create_reports_url_and_numbers_from_one() {
    let mut repo = pushed_feature();
    let text = Hosting::new(&mut repo)
        .create_pr("Add app", "", None, "main")
        .output
        .unwrap();
    assert_eq!(
        text,
        "Creating pull request for feature into main in learner/my-project\n\n\
         https://github.com/learner/my-project/pull/1"
    );
    let hosting = Hosting::new(&mut repo);
    let pr = hosting.pull_request(1).unwrap();
    assert_eq!(pr.author, "learner");
    assert_eq!(pr.status, PrStatus::Open);
    assert_eq!(hosting.open_pr_for("feature"), Some(1));
}

#[test]
fn duplicate_open_pr_is_rejected() {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    let result = Hosting::new(&mut repo).create_pr("again", "", None, "main");
    assert!(!result.success);
    assert!(result.message.starts_with("a pull request for branch \"feature\""));
    assert_eq!(repo.state().pull_requests.len(), 1);
}

#[test]
fn list_filters_and_formats() {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    let mut hosting = Hosting::new(&mut repo);
    hosting.add_review(1, "alice", ReviewStatus::Approved, None);

    assert_eq!(
        hosting.list_prs(PrFilter::Open).output.unwrap(),
        "#1  [O]  Add app [APPROVED]\n       feature -> main"
    );
    assert_eq!(
        hosting.list_prs(PrFilter::Merged).output.unwrap(),
        "No pull requests match your search"
    );
}

#[yare::parameterized(
    open   = { "open",   PrFilter::Open },
    closed = { "CLOSED", PrFilter::Closed },
    merged = { "merged", PrFilter::Merged },
    all    = { "all",    PrFilter::All },
)]
fn filter_parses(text: &str, expected: PrFilter) {
    assert_eq!(text.parse::<PrFilter>(), Ok(expected));
}

#[test]
fn filter_rejects_unknown_state() {
    let err = "draft".parse::<PrFilter>().unwrap_err();
    assert!(err.contains("\"draft\""), "{err}");
}

#[test]
fn merge_checks_out_target_and_merges() {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    let result = Hosting::new(&mut repo).merge_pr(1, MergeMethod::Squash);
    assert_eq!(
        result.output.as_deref(),
        Some("Squashed and merged pull request #1 (Add app)")
    );
    assert_eq!(repo.current_branch(), "main");
    let tip = repo.state().head_commit().unwrap();
    assert_eq!(tip.message, "Merge branch 'feature' into main");
    assert_eq!(repo.state().pull_requests[&1u32].status, PrStatus::Merged);
}

#[test]
fn merge_twice_fails_without_new_commit() {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    Hosting::new(&mut repo).merge_pr(1, MergeMethod::Merge);
    let commits = repo.state().commits.len();

    let again = Hosting::new(&mut repo).merge_pr(1, MergeMethod::Merge);
    assert!(!again.success);
    assert_eq!(again.message, "error: pull request #1 is already merged");
    assert_eq!(repo.state().commits.len(), commits);
}

#[test]
fn merge_with_deleted_head_branch_fails() {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    repo.checkout("main", false, None);
    repo.delete_branch("feature", true);
    let result = Hosting::new(&mut repo).merge_pr(1, MergeMethod::Merge);
    assert_eq!(result.message, "error: head branch 'feature' no longer exists");
    assert_eq!(repo.state().pull_requests[&1u32].status, PrStatus::Open);
}

#[test]
fn unknown_number_is_not_found() {
    let mut repo = repo();
    let mut hosting = Hosting::new(&mut repo);
    assert_eq!(hosting.merge_pr(9, MergeMethod::Merge).message, "error: pull request #9 not found");
    assert_eq!(hosting.close_pr(9).message, "error: pull request #9 not found");
    assert_eq!(hosting.view_pr(9).message, "error: pull request #9 not found");
}

#[test]
fn close_then_close_again() {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    let mut hosting = Hosting::new(&mut repo);
    assert_eq!(hosting.close_pr(1).output.as_deref(), Some("Closed pull request #1"));
    assert_eq!(hosting.close_pr(1).message, "error: pull request #1 is already closed");
    assert_eq!(hosting.open_pr_for("feature"), None);
    assert_eq!(hosting.pr_for("feature"), Some(1));
}

#[test]
fn approval_latches_and_reviews_upsert() {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    let mut hosting = Hosting::new(&mut repo);

    let text = hosting
        .add_review(1, "alice", ReviewStatus::Approved, Some("LGTM"))
        .output
        .unwrap();
    assert_eq!(text, "alice approved these changes\n\nLGTM");
    hosting.add_review(1, "alice", ReviewStatus::ChangesRequested, None);

    let pr = hosting.pull_request(1).unwrap();
    assert!(pr.approved);
    assert_eq!(pr.reviews.len(), 1);
    assert_eq!(pr.reviews[0].status, ReviewStatus::ChangesRequested);
    assert_eq!(pr.reviews[0].comment, None);
}

#[yare::parameterized(
    commented         = { ReviewStatus::Commented },
    changes_requested = { ReviewStatus::ChangesRequested },
    pending           = { ReviewStatus::Pending },
)]
fn approval_survives_other_reviewers(later: ReviewStatus) {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    let mut hosting = Hosting::new(&mut repo);

    hosting.add_review(1, "alice", ReviewStatus::Approved, None);
    hosting.add_review(1, "bob", later, Some("One more thing"));

    let pr = hosting.pull_request(1).unwrap();
    assert!(pr.approved);
    assert_eq!(pr.reviews.len(), 2);
    assert_eq!(pr.reviews[1].reviewer, "bob");
    assert_eq!(pr.reviews[1].status, later);
}

#[test]
fn closed_numbers_are_not_reused() {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    let mut hosting = Hosting::new(&mut repo);
    assert!(hosting.close_pr(1).success);

    let text = hosting.create_pr("Again", "", None, "main").output.unwrap();
    assert!(text.ends_with("/pull/2"), "{text}");
    assert_eq!(hosting.open_pr_for("feature"), Some(2));
    assert_eq!(repo.state().next_pr_number, 3);
    assert_eq!(repo.state().pull_requests[&1].status, PrStatus::Closed);
}

proptest! {
    /// Creating and closing in any order hands out 1, 2, 3, ... in turn.
    #[test]
    fn pr_numbers_strictly_increase(closes in proptest::collection::vec(any::<bool>(), 1..12)) {
        let mut repo = pushed_feature();
        let mut issued = Vec::new();
        for close_after in closes {
            let mut hosting = Hosting::new(&mut repo);
            let result = hosting.create_pr("t", "", None, "main");
            if result.success {
                issued.push(hosting.open_pr_for("feature").unwrap());
            }
            if close_after {
                if let Some(open) = hosting.open_pr_for("feature") {
                    prop_assert!(hosting.close_pr(open).success);
                }
            }
        }
        let expected: Vec<u32> = (1..=issued.len() as u32).collect();
        prop_assert_eq!(&issued, &expected);
        prop_assert_eq!(repo.state().next_pr_number, issued.len() as u32 + 1);
    }
}

#[test]
fn request_review_adds_pending_entries() {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    let mut hosting = Hosting::new(&mut repo);
    let result = hosting.request_review(1, &["bob".to_string(), "carol".to_string()]);
    assert_eq!(result.output.as_deref(), Some("Requested review from: bob, carol"));
    let pr = hosting.pull_request(1).unwrap();
    assert!(pr.reviews.iter().all(|r| r.status == ReviewStatus::Pending));
    assert!(!pr.approved);
}

#[test]
fn view_shows_details() {
    let mut repo = pushed_feature();
    open_pr(&mut repo);
    let mut hosting = Hosting::new(&mut repo);
    hosting.add_review(1, "alice", ReviewStatus::Approved, Some("nice"));

    similar_asserts::assert_eq!(
        hosting.view_pr(1).output.unwrap(),
        "#1: Add app\n  Status: OPEN\n  feature -> main\n  Approved\n\nAdds the app.\n\n\
         Reviews:\n  - alice: approved (nice)\n\nhttps://github.com/learner/my-project/pull/1"
    );
}

#[test]
fn view_without_body() {
    let mut repo = pushed_feature();
    Hosting::new(&mut repo).create_pr("Bare", "", None, "main");
    let text = Hosting::new(&mut repo).view_pr(1).output.unwrap();
    assert!(text.contains("\n\n(No description)\n\n"), "{text}");
}
