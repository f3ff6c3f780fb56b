// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated GitHub: pull requests and reviews.
//!
//! [`Hosting`] is a short-lived view over a [`VirtualRepository`]; pull
//! requests live in the repository state so snapshots and lesson resets see
//! one consistent world.

use crate::model::{PrStatus, PullRequest, Review, ReviewStatus, DEFAULT_REMOTE};
use crate::repository::VirtualRepository;
use gg_core::CommandResult;
use std::str::FromStr;
use tracing::debug;

/// How `gh pr merge` combines the branch. Only the reported verb differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMethod {
    #[default]
    Merge,
    Squash,
    Rebase,
}

impl MergeMethod {
    pub fn verb(self) -> &'static str {
        match self {
            MergeMethod::Merge => "Merged",
            MergeMethod::Squash => "Squashed and merged",
            MergeMethod::Rebase => "Rebased and merged",
        }
    }
}

/// `gh pr list --state` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrFilter {
    #[default]
    Open,
    Closed,
    Merged,
    All,
}

impl PrFilter {
    fn matches(self, status: PrStatus) -> bool {
        match self {
            PrFilter::Open => status == PrStatus::Open,
            PrFilter::Closed => status == PrStatus::Closed,
            PrFilter::Merged => status == PrStatus::Merged,
            PrFilter::All => true,
        }
    }
}

impl FromStr for PrFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(PrFilter::Open),
            "closed" => Ok(PrFilter::Closed),
            "merged" => Ok(PrFilter::Merged),
            "all" => Ok(PrFilter::All),
            other => Err(format!(
                "invalid argument \"{other}\" for \"-s, --state\" flag: valid values are {{open|closed|merged|all}}"
            )),
        }
    }
}

pub struct Hosting<'a> {
    repo: &'a mut VirtualRepository,
}

impl<'a> Hosting<'a> {
    pub fn new(repo: &'a mut VirtualRepository) -> Self {
        Self { repo }
    }

    pub fn pull_request(&self, number: u32) -> Option<&PullRequest> {
        self.repo.state().pull_requests.get(&number)
    }

    fn pr_url(&self, number: u32) -> String {
        format!("{}/pull/{number}", self.repo.config().web_url())
    }

    fn not_found(number: u32) -> CommandResult {
        CommandResult::error(format!("error: pull request #{number} not found"))
    }

    /// Open a pull request from `source` (default: the current branch).
    pub fn create_pr(
        &mut self,
        title: &str,
        body: &str,
        source: Option<&str>,
        target: &str,
    ) -> CommandResult {
        let source = source.unwrap_or(self.repo.current_branch()).to_string();
        let state = self.repo.state();

        if !state.branches.contains_key(&source) {
            return CommandResult::error(format!("error: branch '{source}' does not exist"));
        }
        if source == target {
            return CommandResult::error("error: cannot create PR from a branch to itself");
        }
        if !state.branches.contains_key(target) {
            return CommandResult::error(format!("error: base branch '{target}' does not exist"));
        }
        if !state
            .remote_branches
            .contains_key(&format!("{DEFAULT_REMOTE}/{source}"))
        {
            return CommandResult::error(format!(
                "error: branch '{source}' has not been pushed to remote"
            ))
            .with_hint(format!("Push your branch first: git push -u origin {source}"));
        }
        if let Some(existing) = state
            .pull_requests
            .values()
            .find(|pr| pr.status == PrStatus::Open && pr.source == source && pr.target == target)
        {
            return CommandResult::error(format!(
                "a pull request for branch \"{source}\" into branch \"{target}\" already exists:\n{}",
                self.pr_url(existing.number)
            ));
        }

        let author = self.repo.config().author.clone();
        let slug = self.repo.config().slug().to_string();
        let state = self.repo.state_mut();
        let number = state.next_pr_number;
        state.next_pr_number += 1;
        state.pull_requests.insert(
            number,
            PullRequest {
                number,
                title: title.to_string(),
                body: body.to_string(),
                source: source.clone(),
                target: target.to_string(),
                author,
                status: PrStatus::Open,
                reviews: Vec::new(),
                approved: false,
            },
        );
        debug!(number, %source, target, "opened pull request");
        CommandResult::output(format!(
            "Creating pull request for {source} into {target} in {slug}\n\n{}",
            self.pr_url(number)
        ))
    }

    pub fn list_prs(&self, filter: PrFilter) -> CommandResult {
        let lines: Vec<String> = self
            .repo
            .state()
            .pull_requests
            .values()
            .filter(|pr| filter.matches(pr.status))
            .map(|pr| {
                let approved = if pr.approved { " [APPROVED]" } else { "" };
                format!(
                    "#{}  [{}]  {}{approved}\n       {} -> {}",
                    pr.number,
                    pr.status.marker(),
                    pr.title,
                    pr.source,
                    pr.target
                )
            })
            .collect();
        if lines.is_empty() {
            return CommandResult::output("No pull requests match your search");
        }
        CommandResult::output(lines.join("\n"))
    }

    /// Open pull request whose source is `branch`, lowest number first.
    pub fn open_pr_for(&self, branch: &str) -> Option<u32> {
        self.repo
            .state()
            .pull_requests
            .values()
            .find(|pr| pr.source == branch && pr.status == PrStatus::Open)
            .map(|pr| pr.number)
    }

    /// Any pull request whose source is `branch`, lowest number first.
    pub fn pr_for(&self, branch: &str) -> Option<u32> {
        self.repo
            .state()
            .pull_requests
            .values()
            .find(|pr| pr.source == branch)
            .map(|pr| pr.number)
    }

    fn require_open(&self, number: u32) -> Result<&PullRequest, CommandResult> {
        let Some(pr) = self.pull_request(number) else {
            return Err(Self::not_found(number));
        };
        if pr.status != PrStatus::Open {
            return Err(CommandResult::error(format!(
                "error: pull request #{number} is already {}",
                pr.status
            )));
        }
        Ok(pr)
    }

    /// Check out the target branch and merge the source into it.
    pub fn merge_pr(&mut self, number: u32, method: MergeMethod) -> CommandResult {
        let (source, target, title) = match self.require_open(number) {
            Ok(pr) => (pr.source.clone(), pr.target.clone(), pr.title.clone()),
            Err(e) => return e,
        };
        let branches = &self.repo.state().branches;
        if !branches.contains_key(&source) {
            return CommandResult::error(format!("error: head branch '{source}' no longer exists"));
        }
        if !branches.contains_key(&target) {
            return CommandResult::error(format!("error: base branch '{target}' no longer exists"));
        }

        let switched = self.repo.checkout(&target, false, None);
        if !switched.success {
            return switched;
        }
        let merged = self.repo.merge(&source, false);
        if !merged.success {
            return merged;
        }
        if let Some(pr) = self.repo.state_mut().pull_requests.get_mut(&number) {
            pr.status = PrStatus::Merged;
        }
        debug!(number, ?method, "merged pull request");
        CommandResult::output(format!("{} pull request #{number} ({title})", method.verb()))
    }

    pub fn close_pr(&mut self, number: u32) -> CommandResult {
        if let Err(e) = self.require_open(number) {
            return e;
        }
        if let Some(pr) = self.repo.state_mut().pull_requests.get_mut(&number) {
            pr.status = PrStatus::Closed;
        }
        CommandResult::output(format!("Closed pull request #{number}"))
    }

    /// Add a pending review entry per reviewer. Repeats are kept.
    pub fn request_review(&mut self, number: u32, reviewers: &[String]) -> CommandResult {
        let Some(pr) = self.repo.state_mut().pull_requests.get_mut(&number) else {
            return Self::not_found(number);
        };
        pr.reviews.extend(reviewers.iter().map(|r| Review {
            reviewer: r.clone(),
            status: ReviewStatus::Pending,
            comment: None,
        }));
        CommandResult::output(format!("Requested review from: {}", reviewers.join(", ")))
    }

    /// Record or replace `reviewer`'s review. An approval latches the
    /// pull request's approved flag.
    pub fn add_review(
        &mut self,
        number: u32,
        reviewer: &str,
        status: ReviewStatus,
        comment: Option<&str>,
    ) -> CommandResult {
        let Some(pr) = self.repo.state_mut().pull_requests.get_mut(&number) else {
            return Self::not_found(number);
        };
        let comment = comment.filter(|c| !c.is_empty()).map(str::to_string);
        match pr.reviews.iter_mut().find(|r| r.reviewer == reviewer) {
            Some(review) => {
                review.status = status;
                review.comment = comment.clone();
            }
            None => pr.reviews.push(Review {
                reviewer: reviewer.to_string(),
                status,
                comment: comment.clone(),
            }),
        }
        if status == ReviewStatus::Approved {
            pr.approved = true;
        }

        let verb = match status {
            ReviewStatus::Approved => "approved these changes",
            ReviewStatus::ChangesRequested => "requested changes",
            ReviewStatus::Commented => "commented",
            ReviewStatus::Pending => "was requested to review",
        };
        let mut out = format!("{reviewer} {verb}");
        if let Some(comment) = comment {
            out.push_str("\n\n");
            out.push_str(&comment);
        }
        CommandResult::output(out)
    }

    pub fn view_pr(&self, number: u32) -> CommandResult {
        let Some(pr) = self.pull_request(number) else {
            return Self::not_found(number);
        };
        let mut lines = vec![
            format!("#{}: {}", pr.number, pr.title),
            format!("  Status: {}", pr.status.as_str().to_uppercase()),
            format!("  {} -> {}", pr.source, pr.target),
        ];
        if pr.approved {
            lines.push("  Approved".to_string());
        }
        lines.push(String::new());
        lines.push(if pr.body.is_empty() {
            "(No description)".to_string()
        } else {
            pr.body.clone()
        });
        if !pr.reviews.is_empty() {
            lines.push(String::new());
            lines.push("Reviews:".to_string());
            for review in &pr.reviews {
                match &review.comment {
                    Some(c) => lines.push(format!("  - {}: {} ({c})", review.reviewer, review.status)),
                    None => lines.push(format!("  - {}: {}", review.reviewer, review.status)),
                }
            }
        }
        lines.push(String::new());
        lines.push(self.pr_url(pr.number));
        CommandResult::output(lines.join("\n"))
    }
}

#[cfg(test)]
#[path = "hosting_tests.rs"]
mod tests;
