// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Portable repository snapshots.
//!
//! Lessons seed their starting repository from a snapshot, and the host can
//! save a session to JSON and load it back. Importing replaces the whole
//! repository: pull requests and any remote-tracking branch absent from the
//! snapshot are dropped.

use crate::model::{Branch, Commit, CommitId, RepositoryState, StagedChange, DEFAULT_BRANCH};
use crate::repository::VirtualRepository;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("head '{0}' does not name a branch")]
    UnknownHead(String),
    #[error("branch '{branch}' points at unknown commit '{commit}'")]
    MissingCommit { branch: String, commit: String },
    #[error("commit '{commit}' has unknown parent '{parent}'")]
    MissingParent { commit: String, parent: String },
    #[error("'{0}' is staged more than once")]
    DuplicateStaged(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Defaults to the map key when omitted.
    #[serde(default, alias = "sha")]
    pub id: String,
    pub message: String,
    #[serde(default, alias = "parent_sha")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub files_changed: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    /// Defaults to the map key when omitted.
    #[serde(default)]
    pub name: String,
    #[serde(alias = "commit_sha")]
    pub commit_id: String,
    #[serde(default)]
    pub upstream: Option<String>,
}

/// Serializable repository state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default)]
    pub commits: IndexMap<String, CommitRecord>,
    #[serde(default)]
    pub branches: IndexMap<String, BranchRecord>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub remote_branches: IndexMap<String, BranchRecord>,
    #[serde(default = "default_head")]
    pub head: String,
    #[serde(default)]
    pub staged_changes: Vec<StagedChange>,
    #[serde(default)]
    pub working_changes: Vec<String>,
}

fn default_head() -> String {
    DEFAULT_BRANCH.to_string()
}

fn key_or<'a>(value: &'a str, key: &'a str) -> &'a str {
    if value.is_empty() {
        key
    } else {
        value
    }
}

impl StateSnapshot {
    /// Check internal consistency without touching any repository.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let ids: HashSet<&str> = self
            .commits
            .iter()
            .map(|(key, c)| key_or(&c.id, key))
            .collect();

        for (key, commit) in &self.commits {
            if let Some(parent) = &commit.parent_id {
                if !ids.contains(parent.as_str()) {
                    return Err(SnapshotError::MissingParent {
                        commit: key_or(&commit.id, key).to_string(),
                        parent: parent.clone(),
                    });
                }
            }
        }
        for (key, branch) in self.branches.iter().chain(&self.remote_branches) {
            if !ids.contains(branch.commit_id.as_str()) {
                return Err(SnapshotError::MissingCommit {
                    branch: key_or(&branch.name, key).to_string(),
                    commit: branch.commit_id.clone(),
                });
            }
        }
        let has_head = self
            .branches
            .iter()
            .any(|(key, b)| key_or(&b.name, key) == self.head);
        if !has_head {
            return Err(SnapshotError::UnknownHead(self.head.clone()));
        }
        let mut seen = HashSet::new();
        for change in &self.staged_changes {
            if !seen.insert(change.filename.as_str()) {
                return Err(SnapshotError::DuplicateStaged(change.filename.clone()));
            }
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

fn branch_record(branch: &Branch) -> BranchRecord {
    BranchRecord {
        name: branch.name.clone(),
        commit_id: branch.commit.to_string(),
        upstream: branch.upstream.clone(),
    }
}

impl VirtualRepository {
    pub fn export_state(&self) -> StateSnapshot {
        let state = self.state();
        StateSnapshot {
            commits: state
                .commits
                .values()
                .map(|c| {
                    let record = CommitRecord {
                        id: c.id.to_string(),
                        message: c.message.clone(),
                        parent_id: c.parent.as_ref().map(CommitId::to_string),
                        files_changed: c.files.clone(),
                        author: Some(c.author.clone()),
                        timestamp_ms: Some(c.timestamp_ms),
                    };
                    (c.id.to_string(), record)
                })
                .collect(),
            branches: state
                .branches
                .iter()
                .map(|(name, b)| (name.clone(), branch_record(b)))
                .collect(),
            remote_branches: state
                .remote_branches
                .iter()
                .map(|(name, b)| (name.clone(), branch_record(b)))
                .collect(),
            head: state.head.clone(),
            staged_changes: state.staged.clone(),
            working_changes: state.working.clone(),
        }
    }

    /// Replace the repository with `snapshot`.
    ///
    /// The snapshot is validated first; on error the repository is unchanged.
    pub fn import_state(&mut self, snapshot: &StateSnapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;

        let author = self.config().author.clone();
        let now = self.now_ms();
        let mut state = RepositoryState::empty(self.config().remote_url.clone());
        for (key, record) in &snapshot.commits {
            let id = CommitId::new(key_or(&record.id, key));
            state.commits.insert(
                id.clone(),
                Commit {
                    id,
                    message: record.message.clone(),
                    parent: record.parent_id.as_deref().map(CommitId::from),
                    author: record.author.clone().unwrap_or_else(|| author.clone()),
                    timestamp_ms: record.timestamp_ms.unwrap_or(now),
                    files: record.files_changed.clone(),
                },
            );
        }
        for (key, record) in &snapshot.branches {
            let name = key_or(&record.name, key);
            let mut branch = Branch::local(name, CommitId::new(record.commit_id.as_str()));
            branch.upstream = record.upstream.clone();
            state.branches.insert(name.to_string(), branch);
        }
        for (key, record) in &snapshot.remote_branches {
            let name = key_or(&record.name, key);
            state.remote_branches.insert(
                name.to_string(),
                Branch::tracking(name, CommitId::new(record.commit_id.as_str())),
            );
        }
        state.head = snapshot.head.clone();
        state.staged = snapshot.staged_changes.clone();
        for filename in &snapshot.working_changes {
            if !state.working.contains(filename) {
                state.working.push(filename.clone());
            }
        }

        debug!(
            commits = state.commits.len(),
            branches = state.branches.len(),
            head = %state.head,
            "imported repository state"
        );
        self.replace_state(state);
        Ok(())
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
