// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The simulated repository and its git operations.
//!
//! Every operation validates before it mutates, so a failed command leaves
//! state exactly as it was. Failures are reported as unsuccessful
//! [`CommandResult`]s carrying git's wording.

use crate::model::{
    Branch, ChangeKind, Commit, CommitId, RepoConfig, RepositoryState, StagedChange,
    DEFAULT_BRANCH, DEFAULT_REMOTE,
};
use crate::status::{files_changed, RepositoryStatus};
use gg_core::{
    format_git_date, Clock, CommandResult, FakeClock, FingerprintIdGen, IdGen, SequentialIdGen,
    SystemClock,
};
use std::sync::Arc;
use tracing::debug;

/// Which branches `git branch` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchListing {
    #[default]
    Local,
    /// Local branches followed by `remotes/...` entries (`-a`)
    All,
    /// Only remote-tracking branches (`-r`)
    Remotes,
}

pub struct VirtualRepository {
    state: RepositoryState,
    config: RepoConfig,
    ids: Arc<dyn IdGen>,
    clock: Arc<dyn Clock>,
}

impl Default for VirtualRepository {
    fn default() -> Self {
        Self::new(RepoConfig::default())
    }
}

impl std::fmt::Debug for VirtualRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualRepository")
            .field("state", &self.state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl VirtualRepository {
    /// Repository with random fingerprints and the system clock.
    pub fn new(config: RepoConfig) -> Self {
        Self::with_sources(config, Arc::new(FingerprintIdGen), Arc::new(SystemClock))
    }

    /// Repository with sequential fingerprints (`c000001`, ...) and a
    /// fixed clock, for reproducible transcripts.
    pub fn deterministic(config: RepoConfig) -> Self {
        Self::with_sources(
            config,
            Arc::new(SequentialIdGen::default()),
            Arc::new(FakeClock::new()),
        )
    }

    pub fn with_sources(config: RepoConfig, ids: Arc<dyn IdGen>, clock: Arc<dyn Clock>) -> Self {
        let mut repo = Self {
            state: RepositoryState::empty(config.remote_url.clone()),
            config,
            ids,
            clock,
        };
        let root = repo.new_commit("Initial commit".to_string(), None, vec!["README.md".into()]);
        repo.state
            .branches
            .insert(DEFAULT_BRANCH.to_string(), Branch::local(DEFAULT_BRANCH, root));
        repo
    }

    pub fn state(&self) -> &RepositoryState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut RepositoryState {
        &mut self.state
    }

    /// Replace the whole state. Callers are responsible for its consistency.
    pub(crate) fn replace_state(&mut self, state: RepositoryState) {
        self.state = state;
    }

    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    pub(crate) fn now_ms(&self) -> u64 {
        self.clock.epoch_ms()
    }

    pub fn current_branch(&self) -> &str {
        &self.state.head
    }

    /// Record a simulated edit in the working tree.
    pub fn add_working_change(&mut self, filename: &str) {
        if !self.state.working.iter().any(|f| f == filename) {
            self.state.working.push(filename.to_string());
        }
    }

    // --- commits ---

    fn next_commit_id(&self) -> CommitId {
        loop {
            let id = self.ids.next();
            if !self.state.commits.contains_key(id.as_str()) {
                return CommitId::new(id);
            }
        }
    }

    fn new_commit(&mut self, message: String, parent: Option<CommitId>, files: Vec<String>) -> CommitId {
        let id = self.next_commit_id();
        let commit = Commit {
            id: id.clone(),
            message,
            parent,
            author: self.config.author.clone(),
            timestamp_ms: self.clock.epoch_ms(),
            files,
        };
        self.state.commits.insert(id.clone(), commit);
        id
    }

    fn head_tip(&self) -> Option<CommitId> {
        self.state.head_branch().map(|b| b.commit.clone())
    }

    fn no_head(&self) -> CommandResult {
        CommandResult::error(format!(
            "fatal: your current branch '{}' does not have any commits yet",
            self.state.head
        ))
    }

    /// Resolve a revision: `HEAD`, a local or remote-tracking branch, or a
    /// literal commit id.
    pub fn resolve(&self, rev: &str) -> Option<CommitId> {
        if rev == "HEAD" {
            return self.head_tip();
        }
        self.state
            .branches
            .get(rev)
            .or_else(|| self.state.remote_branches.get(rev))
            .map(|b| b.commit.clone())
            .or_else(|| self.state.commits.get(rev).map(|c| c.id.clone()))
    }

    // --- branches ---

    pub fn create_branch(&mut self, name: &str, start: Option<&str>) -> CommandResult {
        if !is_valid_branch_name(name) {
            return CommandResult::error(format!("fatal: '{name}' is not a valid branch name"));
        }
        if self.state.branches.contains_key(name) {
            return CommandResult::error(format!("fatal: a branch named '{name}' already exists"));
        }
        let commit = match start {
            Some(rev) => match self.resolve(rev) {
                Some(c) => c,
                None => {
                    return CommandResult::error(format!("fatal: not a valid object name: '{rev}'"))
                }
            },
            None => match self.head_tip() {
                Some(c) => c,
                None => return self.no_head(),
            },
        };
        debug!(branch = name, commit = %commit, "created branch");
        self.state
            .branches
            .insert(name.to_string(), Branch::local(name, commit));
        CommandResult::ok()
    }

    pub fn delete_branch(&mut self, name: &str, force: bool) -> CommandResult {
        let Some(branch) = self.state.branches.get(name) else {
            return CommandResult::error(format!("error: branch '{name}' not found"));
        };
        if name == self.state.head {
            return CommandResult::error(format!(
                "error: cannot delete branch '{name}' used by worktree"
            ));
        }
        if name == DEFAULT_BRANCH && !force {
            return CommandResult::error("error: cannot delete the main branch");
        }
        let was = branch.commit.clone();
        self.state.branches.shift_remove(name);
        debug!(branch = name, "deleted branch");
        CommandResult::output(format!("Deleted branch {name} (was {was})."))
    }

    pub fn list_branches(&self, listing: BranchListing) -> CommandResult {
        let mut lines = Vec::new();
        if listing != BranchListing::Remotes {
            let mut names: Vec<&String> = self.state.branches.keys().collect();
            names.sort();
            for name in names {
                let marker = if *name == self.state.head { "* " } else { "  " };
                lines.push(format!("{marker}{name}"));
            }
        }
        if listing != BranchListing::Local {
            let prefix = if listing == BranchListing::All { "remotes/" } else { "" };
            let mut names: Vec<&String> = self.state.remote_branches.keys().collect();
            names.sort();
            lines.extend(names.into_iter().map(|n| format!("  {prefix}{n}")));
        }
        CommandResult::output(lines.join("\n"))
    }

    /// Switch branches, optionally creating the target first.
    pub fn checkout(&mut self, target: &str, create: bool, start: Option<&str>) -> CommandResult {
        if create {
            let created = self.create_branch(target, start);
            if !created.success {
                return created;
            }
            self.state.head = target.to_string();
            return CommandResult::output(format!("Switched to a new branch '{target}'"));
        }

        if !self.state.branches.contains_key(target) {
            return CommandResult::error(format!(
                "error: pathspec '{target}' did not match any branch"
            ))
            .with_hint(format!(
                "Did you mean to create branch '{target}'? Use: git checkout -b {target}"
            ));
        }

        if self.state.head == target {
            return CommandResult::output(format!("Already on '{target}'"));
        }
        self.state.head = target.to_string();
        debug!(branch = target, "switched branch");
        CommandResult::output(format!("Switched to branch '{target}'"))
    }

    // --- index ---

    /// Stage a path. `.`, `-A` and `--all` stage every pending change.
    pub fn add(&mut self, path: &str) -> CommandResult {
        if matches!(path, "." | "-A" | "--all") {
            self.stage_all();
            return CommandResult::ok();
        }
        let was_pending = match self.state.working.iter().position(|f| f == path) {
            Some(i) => {
                self.state.working.remove(i);
                true
            }
            None => false,
        };
        if self.state.is_staged(path) {
            return CommandResult::ok();
        }
        let kind = if was_pending {
            ChangeKind::Modified
        } else {
            ChangeKind::Added
        };
        self.state.staged.push(StagedChange {
            filename: path.to_string(),
            kind,
        });
        CommandResult::ok()
    }

    fn stage_all(&mut self) {
        for filename in std::mem::take(&mut self.state.working) {
            if !self.state.is_staged(&filename) {
                self.state.staged.push(StagedChange {
                    filename,
                    kind: ChangeKind::Modified,
                });
            }
        }
    }

    /// Move staged paths back to the working tree. Nothing moves unless
    /// every path is staged.
    pub fn unstage<S: AsRef<str>>(&mut self, paths: &[S]) -> CommandResult {
        if let Some(path) = paths.iter().map(AsRef::as_ref).find(|p| !self.state.is_staged(p)) {
            return CommandResult::error(format!("error: pathspec '{path}' is not staged"));
        }
        for path in paths.iter().map(AsRef::as_ref) {
            if let Some(i) = self.state.staged.iter().position(|c| c.filename == path) {
                let change = self.state.staged.remove(i);
                self.add_working_change(&change.filename);
            }
        }
        CommandResult::ok()
    }

    /// Throw away unstaged changes. Nothing is dropped unless every path
    /// has a pending change.
    pub fn discard<S: AsRef<str>>(&mut self, paths: &[S]) -> CommandResult {
        let pending = |p: &str| self.state.working.iter().any(|f| f == p);
        if let Some(path) = paths.iter().map(AsRef::as_ref).find(|p| !pending(p)) {
            return CommandResult::error(format!(
                "error: pathspec '{path}' did not match any file(s) known to git"
            ));
        }
        self.state
            .working
            .retain(|f| !paths.iter().any(|p| p.as_ref() == f));
        CommandResult::ok()
    }

    // --- history ---

    pub fn commit(&mut self, message: &str, add_all: bool) -> CommandResult {
        if message.trim().is_empty() {
            return CommandResult::error("Aborting commit due to empty commit message.");
        }
        let Some(parent) = self.head_tip() else {
            return self.no_head();
        };
        let will_stage = add_all && !self.state.working.is_empty();
        if self.state.staged.is_empty() && !will_stage {
            return CommandResult::error("nothing to commit, working tree clean")
                .with_hint("Use 'git add <file>' to stage changes");
        }
        if add_all {
            self.stage_all();
        }

        let files: Vec<String> = std::mem::take(&mut self.state.staged)
            .into_iter()
            .map(|c| c.filename)
            .collect();
        let count = files.len();
        let id = self.new_commit(message.to_string(), Some(parent), files);
        if let Some(branch) = self.state.branches.get_mut(&self.state.head) {
            branch.commit = id.clone();
        }
        debug!(branch = %self.state.head, commit = %id, files = count, "committed");
        CommandResult::output(format!(
            "[{} {id}] {message}\n {}",
            self.state.head,
            files_changed(count)
        ))
    }

    /// Walk first parents from HEAD.
    pub fn log(&self, count: usize, oneline: bool) -> CommandResult {
        let mut blocks = Vec::new();
        let mut cursor = self.head_tip();
        while let Some(id) = cursor {
            if blocks.len() >= count {
                break;
            }
            let Some(commit) = self.state.commits.get(id.as_str()) else {
                break;
            };
            let decorations = self.decorations(&commit.id);
            let decorated = if decorations.is_empty() {
                String::new()
            } else {
                format!(" ({})", decorations.join(", "))
            };
            if oneline {
                blocks.push(format!("{}{decorated} {}", commit.id, commit.message));
            } else {
                blocks.push(format!(
                    "commit {}{decorated}\nAuthor: {}\nDate:   {}\n\n    {}",
                    commit.id,
                    commit.author,
                    format_git_date(commit.timestamp_ms),
                    commit.message
                ));
            }
            cursor = commit.parent.clone();
        }
        let sep = if oneline { "\n" } else { "\n\n" };
        CommandResult::output(blocks.join(sep))
    }

    /// Ref names pointing at `id`: `HEAD -> <head>` first, then other local
    /// branches, then remote-tracking branches.
    pub fn decorations(&self, id: &CommitId) -> Vec<String> {
        let mut out = Vec::new();
        if self.head_tip().as_ref() == Some(id) {
            out.push(format!("HEAD -> {}", self.state.head));
        }
        out.extend(
            self.state
                .branches
                .values()
                .filter(|b| b.commit == *id && b.name != self.state.head)
                .map(|b| b.name.clone()),
        );
        out.extend(
            self.state
                .remote_branches
                .values()
                .filter(|b| b.commit == *id)
                .map(|b| b.name.clone()),
        );
        out
    }

    pub fn merge(&mut self, branch: &str, no_ff: bool) -> CommandResult {
        let source = self
            .state
            .branches
            .get(branch)
            .or_else(|| self.state.remote_branches.get(branch));
        let Some(source) = source else {
            return CommandResult::error(format!("merge: {branch} - not something we can merge"));
        };
        let kind = if source.remote {
            "remote-tracking branch"
        } else {
            "branch"
        };
        let files = self
            .state
            .commits
            .get(source.commit.as_str())
            .map(|c| c.files.clone())
            .unwrap_or_default();
        let Some(parent) = self.head_tip() else {
            return self.no_head();
        };

        let message = format!("Merge {kind} '{branch}' into {}", self.state.head);
        let count = files.len();
        let id = self.new_commit(message, Some(parent), files);
        if let Some(head) = self.state.branches.get_mut(&self.state.head) {
            head.commit = id.clone();
        }
        debug!(source = branch, into = %self.state.head, commit = %id, no_ff, "merged");
        CommandResult::output(format!(
            "Merge made by the 'ort' strategy.\n {}",
            files_changed(count)
        ))
    }

    // --- remote ---

    pub fn push(&mut self, remote: &str, branch: Option<&str>, set_upstream: bool) -> CommandResult {
        let name = branch.unwrap_or(&self.state.head).to_string();
        let Some(local) = self.state.branches.get(&name) else {
            return CommandResult::error(format!("error: src refspec {name} does not match any"));
        };
        let tip = local.commit.clone();
        let tracking = format!("{remote}/{name}");
        let previous = self
            .state
            .remote_branches
            .get(&tracking)
            .map(|b| b.commit.clone());

        let mut lines = Vec::new();
        if previous.as_ref() == Some(&tip) {
            lines.push("Everything up-to-date".to_string());
        } else {
            lines.extend([
                "Enumerating objects: 5, done.".to_string(),
                "Counting objects: 100% (5/5), done.".to_string(),
                "Writing objects: 100% (3/3), 298 bytes | 298.00 KiB/s, done.".to_string(),
                "Total 3 (delta 0), reused 0 (delta 0)".to_string(),
            ]);
            if name != DEFAULT_BRANCH {
                lines.push(format!(
                    "remote: Create a pull request for '{name}' on GitHub by visiting:"
                ));
                lines.push(format!(
                    "remote:      {}/pull/new/{name}",
                    self.config.web_url()
                ));
            }
            lines.push(format!("To {}", self.state.remote_url));
            match &previous {
                None => lines.push(format!(" * [new branch]      {name} -> {name}")),
                Some(old) => lines.push(format!("   {old}..{tip}  {name} -> {name}")),
            }
            self.state
                .remote_branches
                .insert(tracking.clone(), Branch::tracking(&tracking, tip));
        }

        if set_upstream {
            if let Some(local) = self.state.branches.get_mut(&name) {
                local.upstream = Some(tracking.clone());
            }
            lines.push(format!("branch '{name}' set up to track '{tracking}'."));
        }
        debug!(branch = %name, %tracking, set_upstream, "pushed");
        CommandResult::output(lines.join("\n"))
    }

    pub fn pull(&self) -> CommandResult {
        CommandResult::output("Already up to date.")
    }

    pub fn fetch(&self) -> CommandResult {
        CommandResult::output(format!(
            "From {}\n * branch            {DEFAULT_BRANCH}       -> FETCH_HEAD",
            self.state.remote_url
        ))
    }

    pub fn remotes(&self, verbose: bool) -> CommandResult {
        if !verbose {
            return CommandResult::output(DEFAULT_REMOTE);
        }
        let url = &self.state.remote_url;
        CommandResult::output(format!(
            "{DEFAULT_REMOTE}\t{url} (fetch)\n{DEFAULT_REMOTE}\t{url} (push)"
        ))
    }

    // --- inspection ---

    pub fn status(&self) -> RepositoryStatus {
        let head = self.state.head_branch();
        let upstream = head.and_then(|b| b.upstream.clone());
        let tracking = upstream
            .as_deref()
            .and_then(|u| self.state.remote_branches.get(u));
        let ahead = match (head, tracking) {
            (Some(local), Some(remote)) if local.commit != remote.commit => 1,
            _ => 0,
        };
        RepositoryStatus {
            branch: self.state.head.clone(),
            upstream_gone: upstream.is_some() && tracking.is_none(),
            upstream,
            ahead,
            behind: 0,
            staged: self.state.staged.clone(),
            unstaged: self.state.working.clone(),
        }
    }

    pub fn status_output(&self) -> CommandResult {
        CommandResult::output(self.status().render())
    }

    /// Synthetic hunks for unstaged changes, or for staged ones.
    pub fn diff(&self, staged: bool) -> CommandResult {
        let entries: Vec<(&str, ChangeKind)> = if staged {
            self.state
                .staged
                .iter()
                .map(|c| (c.filename.as_str(), c.kind))
                .collect()
        } else {
            self.state
                .working
                .iter()
                .map(|f| (f.as_str(), ChangeKind::Modified))
                .collect()
        };
        let hunks: Vec<String> = entries
            .into_iter()
            .map(|(file, kind)| match kind {
                ChangeKind::Added => format!(
                    "diff --git a/{file} b/{file}\nnew file mode 100644\n--- /dev/null\n+++ b/{file}\n@@ -0,0 +1 @@\n+simulated change"
                ),
                ChangeKind::Deleted => format!(
                    "diff --git a/{file} b/{file}\ndeleted file mode 100644\n--- a/{file}\n+++ /dev/null\n@@ -1 +0,0 @@\n-simulated content"
                ),
                ChangeKind::Modified => format!(
                    "diff --git a/{file} b/{file}\n--- a/{file}\n+++ b/{file}\n@@ -1,1 +1,1 @@\n-simulated content\n+simulated change"
                ),
            })
            .collect();
        CommandResult::output(hunks.join("\n"))
    }
}

/// A subset of git's ref-name rules.
pub fn is_valid_branch_name(name: &str) -> bool {
    !name.is_empty()
        && name != "HEAD"
        && !name.starts_with('-')
        && !name.starts_with('/')
        && !name.ends_with('/')
        && !name.ends_with('.')
        && !name.ends_with(".lock")
        && !name.contains("..")
        && !name.contains("//")
        && !name.contains("@{")
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || "~^:?*[\\".contains(c))
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
