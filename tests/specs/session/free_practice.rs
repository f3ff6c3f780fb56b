//! Free practice specs
//!
//! Without an active lesson every line runs against the simulated
//! repository.

use crate::prelude::*;

#[test]
fn commit_needs_staged_changes() {
    cli()
        .args(&["--no-builtin"])
        .input(&[
            "git checkout -b feature",
            "git commit -m \"x\"",
            "git add app.py",
            "git commit -m \"x\"",
            "quit",
        ])
        .passes()
        .stdout_eq(&format!(
            "{WELCOME_NO_LESSONS}\
             Switched to a new branch 'feature'\n\
             nothing to commit, working tree clean\n\
             hint: Use 'git add <file>' to stage changes\n\
             [feature c000002] x\n 1 file changed\n\
             {GOODBYE}"
        ));
}

#[test]
fn pull_request_requires_push() {
    cli()
        .args(&["--no-builtin"])
        .input(&[
            "git checkout -b feature",
            "git add app.py",
            "git commit -m \"Add app\"",
            "gh pr create --title \"T\"",
            "git push -u origin feature",
            "gh pr create --title \"T\"",
        ])
        .passes()
        .stdout_has(
            "error: branch 'feature' has not been pushed to remote\n\
             hint: Push your branch first: git push -u origin feature\n",
        )
        .stdout_has(" * [new branch]      feature -> feature\n")
        .stdout_has("branch 'feature' set up to track 'origin/feature'.\n")
        .stdout_has(
            "Creating pull request for feature into main in learner/my-project\n\n\
             https://github.com/learner/my-project/pull/1\n",
        );
}

#[test]
fn review_and_merge_flow() {
    cli()
        .args(&["--no-builtin"])
        .input(&[
            "git checkout -b feature",
            "git add app.py",
            "git commit -m \"Add app\"",
            "git push -u origin feature",
            "gh pr create --title \"Add app\"",
            "gh pr review --approve",
            "gh pr merge --squash",
            "git branch",
        ])
        .passes()
        .stdout_has("* main\n");
}

#[test]
fn status_and_tree_views() {
    cli()
        .args(&["--no-builtin"])
        .input(&["git checkout -b feature", "git add app.py", "status", "tree"])
        .passes()
        .stdout_has(
            "Repository Status\nOn branch feature\n\n\
             Changes to be committed:\n  added: app.py\n",
        )
        .stdout_has(
            "Commit History\n\
             * c000001 (HEAD -> feature, main) Initial commit\n\
             \n\
             Branches: *feature main\n",
        );
}

#[test]
fn parse_errors_do_not_stop_session() {
    cli()
        .args(&["--no-builtin"])
        .input(&["svn up", "git commit -m \"unterminated", "git branch"])
        .passes()
        .stdout_has("Unknown command: 'svn'. Commands should start with 'git' or 'gh'.\n")
        .stdout_has("Invalid command syntax:")
        .stdout_has("* main\n");
}

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--no-builtin"])
        .input(&["help", "help git commit"])
        .passes()
        .stdout_has("App Commands:")
        .stdout_has("Usage: git commit");
}

#[test]
fn end_of_input_ends_session() {
    cli()
        .args(&["--no-builtin"])
        .passes()
        .stdout_eq(&format!("{WELCOME_NO_LESSONS}{GOODBYE}"));
}
