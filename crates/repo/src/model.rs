// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository and pull-request records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

gg_core::define_id! {
    /// Seven-character commit fingerprint.
    pub struct CommitId;
}

/// Name of the branch created at initialization and protected from
/// unforced deletion.
pub const DEFAULT_BRANCH: &str = "main";

/// Remote used when a command names none.
pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: CommitId,
    pub message: String,
    /// Single parent; merge commits record only the branch they were made on.
    pub parent: Option<CommitId>,
    pub author: String,
    pub timestamp_ms: u64,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: CommitId,
    /// Remote-tracking name such as `origin/feature`
    pub upstream: Option<String>,
    pub remote: bool,
}

impl Branch {
    pub fn local(name: impl Into<String>, commit: CommitId) -> Self {
        Self {
            name: name.into(),
            commit,
            upstream: None,
            remote: false,
        }
    }

    pub fn tracking(name: impl Into<String>, commit: CommitId) -> Self {
        Self {
            name: name.into(),
            commit,
            upstream: None,
            remote: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
        }
    }

    /// Label used by `git status`.
    pub fn status_label(self) -> &'static str {
        match self {
            ChangeKind::Added => "new file",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedChange {
    pub filename: String,
    #[serde(rename = "change_type")]
    pub kind: ChangeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrStatus {
    Open,
    Merged,
    Closed,
}

impl PrStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PrStatus::Open => "open",
            PrStatus::Merged => "merged",
            PrStatus::Closed => "closed",
        }
    }

    /// One-letter marker used by `gh pr list`.
    pub fn marker(self) -> char {
        match self {
            PrStatus::Open => 'O',
            PrStatus::Merged => 'M',
            PrStatus::Closed => 'C',
        }
    }
}

impl fmt::Display for PrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Requested but not yet given
    Pending,
    Approved,
    ChangesRequested,
    Commented,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::ChangesRequested => "changes_requested",
            ReviewStatus::Commented => "commented",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub reviewer: String,
    pub status: ReviewStatus,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u32,
    pub title: String,
    pub body: String,
    pub source: String,
    pub target: String,
    pub author: String,
    pub status: PrStatus,
    pub reviews: Vec<Review>,
    /// Latches to true on the first approving review.
    pub approved: bool,
}

/// Everything the simulator knows about one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryState {
    pub commits: IndexMap<CommitId, Commit>,
    pub branches: IndexMap<String, Branch>,
    /// Keyed by `remote/name`, e.g. `origin/feature`
    pub remote_branches: IndexMap<String, Branch>,
    /// Name of the checked-out branch. Detached HEAD is not modeled.
    pub head: String,
    pub staged: Vec<StagedChange>,
    /// Filenames with unstaged modifications
    pub working: Vec<String>,
    pub remote_url: String,
    pub pull_requests: IndexMap<u32, PullRequest>,
    pub next_pr_number: u32,
}

impl RepositoryState {
    pub(crate) fn empty(remote_url: impl Into<String>) -> Self {
        Self {
            commits: IndexMap::new(),
            branches: IndexMap::new(),
            remote_branches: IndexMap::new(),
            head: DEFAULT_BRANCH.to_string(),
            staged: Vec::new(),
            working: Vec::new(),
            remote_url: remote_url.into(),
            pull_requests: IndexMap::new(),
            next_pr_number: 1,
        }
    }

    pub fn head_branch(&self) -> Option<&Branch> {
        self.branches.get(&self.head)
    }

    pub fn head_commit(&self) -> Option<&Commit> {
        self.head_branch()
            .and_then(|b| self.commits.get(b.commit.as_str()))
    }

    pub fn is_staged(&self, filename: &str) -> bool {
        self.staged.iter().any(|c| c.filename == filename)
    }
}

/// Identity and addresses used in generated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    pub author: String,
    pub remote_url: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            author: "learner".to_string(),
            remote_url: "https://github.com/learner/my-project.git".to_string(),
        }
    }
}

impl RepoConfig {
    /// Browser address of the repository: the remote URL without `.git`.
    pub fn web_url(&self) -> &str {
        self.remote_url
            .strip_suffix(".git")
            .unwrap_or(&self.remote_url)
    }

    /// `owner/name` part of the remote URL.
    pub fn slug(&self) -> &str {
        let web = self.web_url();
        let path = web.split_once("://").map_or(web, |(_, rest)| rest);
        path.split_once('/').map_or(path, |(_, slug)| slug)
    }
}
