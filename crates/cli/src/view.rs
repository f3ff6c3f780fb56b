// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text panels for the session: repository summary, commit tree,
//! lesson catalog, and step instructions.

use crate::color::Palette;
use gg_lessons::{Lesson, LessonEngine, LessonStep, StepType};
use gg_repo::{PrStatus, VirtualRepository};
use std::fmt::Write;

/// Commits shown by the tree view
pub const TREE_DEPTH: usize = 8;

/// Messages longer than this are cut in the tree view
const TREE_MESSAGE_WIDTH: usize = 40;

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Compact repository summary, a friendlier cousin of `git status`.
pub fn render_status(repo: &VirtualRepository, palette: &Palette) -> String {
    let status = repo.status();
    let mut out = String::new();
    let _ = writeln!(out, "{}", palette.header("Repository Status"));
    let _ = write!(out, "On branch {}", palette.yellow(&status.branch));

    if let Some(upstream) = &status.upstream {
        let upstream = palette.yellow(upstream);
        let line = if status.upstream_gone {
            format!("Upstream {upstream} is gone")
        } else if status.ahead > 0 {
            format!(
                "Ahead of {upstream} by {} commit{}",
                status.ahead,
                plural(status.ahead)
            )
        } else if status.behind > 0 {
            format!(
                "Behind {upstream} by {} commit{}",
                status.behind,
                plural(status.behind)
            )
        } else {
            format!("Up to date with {upstream}")
        };
        let _ = write!(out, "\n{line}");
    }

    if let Some(pr) = repo
        .state()
        .pull_requests
        .values()
        .rev()
        .find(|pr| pr.source == status.branch)
    {
        let state = match pr.status {
            PrStatus::Open if pr.approved => palette.green("open, approved"),
            PrStatus::Open => palette.green("open"),
            PrStatus::Merged => palette.muted("merged"),
            PrStatus::Closed => palette.red("closed"),
        };
        let _ = write!(out, "\nPull request #{}: {} ({state})", pr.number, pr.title);
    }

    if !status.staged.is_empty() {
        let _ = write!(out, "\n\n{}", palette.green("Changes to be committed:"));
        for change in &status.staged {
            let _ = write!(out, "\n  {} {}", palette.green(&format!("{}:", change.kind)), change.filename);
        }
    }
    if !status.unstaged.is_empty() {
        let _ = write!(out, "\n\n{}", palette.yellow("Changes not staged for commit:"));
        for filename in &status.unstaged {
            let _ = write!(out, "\n  {} {filename}", palette.yellow("modified:"));
        }
    }
    if status.staged.is_empty() && status.unstaged.is_empty() {
        let _ = write!(out, "\n\n{}", palette.muted("nothing to commit, working tree clean"));
    }
    out
}

fn truncate(message: &str) -> String {
    if message.chars().count() > TREE_MESSAGE_WIDTH {
        let cut: String = message.chars().take(TREE_MESSAGE_WIDTH - 3).collect();
        format!("{cut}...")
    } else {
        message.to_string()
    }
}

/// First-parent history of HEAD, newest first, with branch decorations.
pub fn render_tree(repo: &VirtualRepository, palette: &Palette, depth: usize) -> String {
    let state = repo.state();
    let mut lines = Vec::new();
    let mut cursor = state.head_branch().map(|b| b.commit.clone());
    while let Some(id) = cursor {
        if lines.len() >= depth {
            break;
        }
        let Some(commit) = state.commits.get(&id) else {
            break;
        };
        let decorations = repo.decorations(&commit.id);
        let mut line = format!("{} {}", palette.muted("*"), palette.yellow(commit.id.as_str()));
        if !decorations.is_empty() {
            let _ = write!(line, " {}", palette.green(&format!("({})", decorations.join(", "))));
        }
        let _ = write!(line, " {}", truncate(&commit.message));
        lines.push(line);
        cursor = commit.parent.clone();
    }
    if lines.is_empty() {
        lines.push(palette.muted("No commits yet"));
    }

    let mut names: Vec<&str> = state.branches.keys().map(String::as_str).collect();
    names.sort_unstable();
    let branches: Vec<String> = names
        .into_iter()
        .map(|name| {
            if name == state.head {
                palette.green(&format!("*{name}"))
            } else {
                palette.muted(name)
            }
        })
        .collect();

    format!(
        "{}\n{}\n\nBranches: {}",
        palette.header("Commit History"),
        lines.join("\n"),
        branches.join(" ")
    )
}

/// Numbered lesson catalog with completion marks.
pub fn render_lessons(engine: &LessonEngine, palette: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", palette.header("Lessons"));
    for (i, lesson) in engine.lessons().enumerate() {
        let line = format!("{}. {}", i + 1, lesson.title);
        if engine.is_completed(&lesson.id) {
            let _ = writeln!(out, "  {} {}", palette.green("✓"), palette.muted(&line));
        } else {
            let _ = writeln!(out, "  {} {line}", palette.muted("○"));
        }
    }
    let _ = write!(out, "{}", palette.context("Type 'lesson <number>' to start a lesson."));
    out
}

/// Lesson title, description, and objectives.
pub fn render_lesson_intro(lesson: &Lesson, palette: &Palette) -> String {
    let mut out = palette.header(&format!("Starting lesson: {}", lesson.title));
    if !lesson.description.is_empty() {
        let _ = write!(out, "\n{}", lesson.description);
    }
    if !lesson.objectives.is_empty() {
        let _ = write!(out, "\n\nObjectives:");
        for objective in &lesson.objectives {
            let _ = write!(out, "\n  - {objective}");
        }
    }
    out
}

/// Instruction block for the active step.
pub fn render_step(
    step: &LessonStep,
    progress: (usize, usize),
    palette: &Palette,
) -> String {
    let (k, n) = progress;
    let mut out = format!("{} {}", palette.muted(&format!("[{k}/{n}]")), step.instruction.trim_end());
    match step.kind {
        StepType::Explanation => {
            let _ = write!(out, "\n{}", palette.context("(Press Enter to continue)"));
        }
        StepType::FreePractice => {
            let _ = write!(out, "\n{}", palette.context("(Type 'skip' when you are done)"));
        }
        StepType::Command => {}
    }
    out
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
