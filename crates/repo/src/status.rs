// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `git status` summary and its text rendering.

use crate::model::StagedChange;
use serde::Serialize;

/// Snapshot of what `git status` reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryStatus {
    pub branch: String,
    pub upstream: Option<String>,
    /// An upstream is configured but its remote-tracking branch is missing.
    pub upstream_gone: bool,
    /// 1 when the tip differs from the upstream tip, never a real count.
    pub ahead: usize,
    /// Always 0: nothing in the simulation moves a remote ahead.
    pub behind: usize,
    pub staged: Vec<StagedChange>,
    pub unstaged: Vec<String>,
}

impl RepositoryStatus {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty()
    }

    pub fn render(&self) -> String {
        let mut header = vec![format!("On branch {}", self.branch)];
        if let Some(upstream) = &self.upstream {
            if self.upstream_gone {
                header.push(format!(
                    "Your branch is based on '{upstream}', but the upstream is gone."
                ));
                header.push("  (use \"git branch --unset-upstream\" to fixup)".to_string());
            } else if self.ahead > 0 {
                header.push(format!(
                    "Your branch is ahead of '{upstream}' by {}.",
                    plural(self.ahead, "commit", "commits")
                ));
                header.push("  (use \"git push\" to publish your local commits)".to_string());
            } else if self.behind > 0 {
                header.push(format!(
                    "Your branch is behind '{upstream}' by {}.",
                    plural(self.behind, "commit", "commits")
                ));
            } else {
                header.push(format!("Your branch is up to date with '{upstream}'."));
            }
        }

        let mut sections = Vec::new();
        if !self.staged.is_empty() {
            let mut lines = vec![
                "Changes to be committed:".to_string(),
                "  (use \"git restore --staged <file>...\" to unstage)".to_string(),
            ];
            lines.extend(self.staged.iter().map(|c| {
                let label = format!("{}:", c.kind.status_label());
                format!("\t{label:<12}{}", c.filename)
            }));
            sections.push(lines.join("\n"));
        }
        if !self.unstaged.is_empty() {
            let mut lines = vec![
                "Changes not staged for commit:".to_string(),
                "  (use \"git add <file>...\" to update what will be committed)".to_string(),
                "  (use \"git restore <file>...\" to discard changes in working directory)"
                    .to_string(),
            ];
            lines.extend(self.unstaged.iter().map(|f| format!("\tmodified:   {f}")));
            sections.push(lines.join("\n"));
        }
        if self.is_clean() {
            sections.push("nothing to commit, working tree clean".to_string());
        } else if self.staged.is_empty() {
            sections.push(
                "no changes added to commit (use \"git add\" and/or \"git commit -a\")".to_string(),
            );
        }

        let gap = if self.upstream.is_some() { "\n\n" } else { "\n" };
        format!("{}{gap}{}", header.join("\n"), sections.join("\n\n"))
    }
}

/// `"1 file changed"` / `"3 files changed"`
pub fn files_changed(n: usize) -> String {
    format!("{} changed", plural(n, "file", "files"))
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
