//! Lesson specs
//!
//! Bundled and user-supplied lessons driven end to end over stdin.

use crate::prelude::*;

#[test]
fn bundled_catalog() {
    cli()
        .input(&["lessons"])
        .passes()
        .stdout_has("Loaded 4 lessons.\n")
        .stdout_has(
            "Lessons\n  ○ 1. Your First Commit\n  ○ 2. Working on a Branch\n  \
             ○ 3. Opening a Pull Request\n  ○ 4. Review and Merge\n",
        );
}

#[test]
fn first_commit_lesson_end_to_end() {
    cli()
        .input(&[
            "lesson 1",
            "",
            "git status",
            "git add hello.py",
            "git commit -m \"Add hello script\"",
            "git log --oneline",
            "",
        ])
        .passes()
        .stdout_has("Starting lesson: Your First Commit\n")
        .stdout_has("[2/6] A new file, hello.py, just appeared.")
        .stdout_has("\tmodified:   hello.py\n")
        .stdout_has("✓ hello.py is staged.\n")
        .stdout_has("[main c000002] Add hello script\n 1 file changed\n")
        .stdout_has("c000002 (HEAD -> main) Add hello script\nc000001 Initial commit\n")
        .stdout_has("Lesson complete: Your First Commit\n")
        .stdout_has("Type 'lesson 2' to continue with Working on a Branch.\n");
}

#[test]
fn quote_style_is_accepted() {
    cli()
        .args(&["--lesson", "first-commit"])
        .input(&["", "git status", "git add .", "git commit -m 'Add hello script'"])
        .passes()
        .stdout_has("✓ Your first commit is in the history.\n");
}

#[test]
fn wrong_command_gets_feedback_and_does_not_run() {
    cli()
        .args(&["--lesson", "1"])
        .input(&["", "git branch", "status"])
        .passes()
        .stdout_has("✗ That's not quite right.\n  → The command is `git` followed by `status`.\n")
        .stdout_lacks("* main")
        .stdout_has("Changes not staged for commit:\n  modified: hello.py\n");
}

#[test]
fn other_tools_get_generic_feedback() {
    cli()
        .args(&["--lesson", "1"])
        .input(&["", "svn status"])
        .passes()
        .stdout_has("  → Git commands start with 'git' or 'gh'.\n");
}

#[test]
fn pull_request_lesson_starts_from_seeded_repository() {
    cli()
        .args(&["--lesson", "pull-requests"])
        .input(&[
            "",
            "git status",
            "git push -u origin feature/login",
            "gh pr create --title \"Add login page\"",
            "gh pr list",
        ])
        .passes()
        .stdout_has("Recommended first: branching\n")
        .stdout_has("On branch feature/login\n")
        .stdout_has("Pull request #1 is open.\n")
        .stdout_has("#1  [O]  Add login page\n       feature/login -> main\n");
}

#[test]
fn custom_lesson_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("custom.toml"),
        r#"
id = "custom"
title = "Custom Lesson"

[[steps]]
id = "fetch"
instruction = "Fetch from origin."
accepted = ["git fetch"]
pattern = "git fetch(\\s+origin)?$"
success_message = "Fetched."
"#,
    )
    .unwrap();

    cli()
        .args(&["--no-builtin"])
        .env("GG_LESSONS_DIR", dir.path())
        .input(&["lesson custom", "git fetch origin"])
        .passes()
        .stdout_has("Loaded 1 lesson.\n")
        .stdout_has("[1/1] Fetch from origin.\n")
        .stdout_has("✓ Fetched.\n")
        .stdout_has("Lesson complete: Custom Lesson\n")
        .stdout_has("All lessons complete!");
}
