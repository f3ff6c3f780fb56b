// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gg_lessons::{Lesson, LessonStep};

fn basics() -> Lesson {
    Lesson::new("basics", "Basics").with_steps(vec![
        LessonStep::explanation("intro", "Welcome"),
        LessonStep::command("stage", "Stage hello.py", &["git add hello.py"])
            .with_setup(&["hello.py"])
            .with_hints(&["Use git add"]),
        LessonStep::command("commit", "Commit it", &["git commit -m 'Fix bug'"])
            .with_success("Committed."),
    ])
}

fn session(lessons: Vec<Lesson>) -> Session {
    let mut engine = LessonEngine::new();
    for lesson in lessons {
        engine.add_lesson(lesson);
    }
    let settings = Settings {
        repo: RepoConfig::default(),
        deterministic: true,
    };
    Session::new(settings, engine, Palette::plain())
}

fn send(session: &mut Session, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for line in lines {
        session.handle_line(line, &mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn welcome_counts_lessons() {
    let mut out = Vec::new();
    session(vec![basics()]).welcome(&mut out).unwrap();
    similar_asserts::assert_eq!(
        String::from_utf8(out).unwrap(),
        "gg - git and GitHub flow simulator\n\
         Type 'help' for commands or 'lessons' to browse lessons.\n\
         Loaded 1 lesson.\n"
    );
}

#[test]
fn welcome_without_lessons() {
    let mut out = Vec::new();
    session(vec![]).welcome(&mut out).unwrap();
    assert!(String::from_utf8(out)
        .unwrap()
        .ends_with("No lessons found. You can still practice git commands freely.\n"));
}

#[test]
fn free_practice_runs_commands() {
    let mut s = session(vec![]);
    let out = send(&mut s, &["git checkout -b feature", "git commit -m 'x'"]);
    similar_asserts::assert_eq!(
        out,
        "Switched to a new branch 'feature'\n\
         nothing to commit, working tree clean\n\
         hint: Use 'git add <file>' to stage changes\n"
    );
    assert_eq!(s.repo().current_branch(), "feature");
}

#[test]
fn parse_errors_are_reported() {
    let mut s = session(vec![]);
    let out = send(&mut s, &["svn commit"]);
    assert_eq!(
        out,
        "Unknown command: 'svn'. Commands should start with 'git' or 'gh'.\n"
    );
}

#[test]
fn blank_lines_are_ignored() {
    let mut s = session(vec![]);
    assert_eq!(send(&mut s, &["", "   "]), "");
}

#[test]
fn full_lesson_transcript() {
    let mut s = session(vec![basics()]);
    let out = send(
        &mut s,
        &[
            "lesson 1",
            "",
            "git status",
            "git add hello.py",
            "git commit -m \"Fix bug\"",
        ],
    );
    similar_asserts::assert_eq!(
        out,
        "Starting lesson: Basics\n\
         \n\
         [1/3] Welcome\n\
         (Press Enter to continue)\n\
         \n\
         [2/3] Stage hello.py\n\
         ✗ That's not quite right.\n  \
         → Use git add\n\
         ✓ Correct!\n\
         \n\
         [3/3] Commit it\n\
         [main c000002] Fix bug\n 1 file changed\n\
         ✓ Committed.\n\
         \n\
         Lesson complete: Basics\n\
         All lessons complete! You're ready for real GitHub flow.\n"
    );
    assert!(s.lessons().is_completed("basics"));
    assert!(!s.lessons().is_active());
}

#[test]
fn rejected_attempt_does_not_run() {
    let mut s = session(vec![basics()]);
    send(&mut s, &["lesson basics", "", "git add -A"]);
    assert_eq!(s.repo().state().working, vec!["hello.py"]);
    assert!(s.repo().state().staged.is_empty());
}

#[test]
fn hint_and_skip() {
    let mut s = session(vec![basics()]);
    send(&mut s, &["lesson 1", ""]);
    let out = send(&mut s, &["hint", "skip"]);
    similar_asserts::assert_eq!(
        out,
        "Hint: Use git add\nSkipped current step.\n\n[3/3] Commit it\n"
    );
}

#[test]
fn skip_without_lesson() {
    let mut s = session(vec![]);
    assert_eq!(send(&mut s, &["skip"]), "No active lesson to skip.\n");
}

#[test]
fn quit_stops_session() {
    let mut s = session(vec![]);
    send(&mut s, &["QUIT"]);
    assert!(!s.is_running());
}

#[test]
fn quit_on_explanation_step() {
    let mut s = session(vec![basics()]);
    send(&mut s, &["lesson 1", "exit"]);
    assert!(!s.is_running());
    assert_eq!(s.lessons().progress(), Some((1, 3)));
}

#[test]
fn unknown_lesson() {
    let mut s = session(vec![basics()]);
    assert_eq!(send(&mut s, &["lesson 9"]), "Lesson not found: 9\n");
}

#[test]
fn lesson_start_replaces_repository() {
    let mut s = session(vec![basics()]);
    send(&mut s, &["git checkout -b scratch"]);
    send(&mut s, &["lesson 1"]);
    assert_eq!(s.repo().current_branch(), "main");
    assert!(s.repo().state().branches.get("scratch").is_none());
}

#[test]
fn reset_restarts_active_lesson() {
    let mut s = session(vec![basics()]);
    send(&mut s, &["lesson 1", "", "git add hello.py"]);
    let out = send(&mut s, &["reset"]);
    assert!(out.starts_with("Restarting lesson.\nStarting lesson: Basics\n"));
    assert_eq!(s.lessons().progress(), Some((1, 3)));
    assert!(s.repo().state().staged.is_empty());
}

#[test]
fn reset_without_lesson_gives_fresh_repo() {
    let mut s = session(vec![]);
    send(&mut s, &["git checkout -b scratch"]);
    assert_eq!(send(&mut s, &["reset"]), "Repository reset to a fresh state.\n");
    assert_eq!(s.repo().current_branch(), "main");
}

#[test]
fn missing_prerequisites_are_recommended() {
    let second = Lesson::new("second", "Second")
        .with_prerequisites(&["basics"])
        .with_steps(vec![LessonStep::explanation("only", "Hi")]);
    let mut s = session(vec![basics(), second]);
    let out = send(&mut s, &["lesson second"]);
    assert!(out.contains("Recommended first: basics\n"));
    assert!(s.lessons().is_active());
}

#[test]
fn completion_points_to_next_lesson() {
    let next = Lesson::new("next", "Next Steps")
        .with_steps(vec![LessonStep::explanation("only", "Hi")]);
    let mut s = session(vec![basics(), next]);
    send(&mut s, &["lesson 1"]);
    let out = send(&mut s, &["skip", "skip", "skip"]);
    assert!(out.ends_with("Lesson complete: Basics\nType 'lesson 2' to continue with Next Steps.\n"));
}

#[test]
fn lessons_lists_catalog() {
    let mut s = session(vec![basics()]);
    similar_asserts::assert_eq!(
        send(&mut s, &["lessons"]),
        "Lessons\n  ○ 1. Basics\nType 'lesson <number>' to start a lesson.\n"
    );
}

#[test]
fn lesson_without_argument() {
    let mut s = session(vec![basics()]);
    assert_eq!(send(&mut s, &["lesson"]), "Usage: lesson <number>\n");
    send(&mut s, &["lesson 1", ""]);
    assert_eq!(
        send(&mut s, &["lesson"]),
        "Starting lesson: Basics\n\n[2/3] Stage hello.py\n"
    );
}

#[test]
fn help_is_not_judged() {
    let mut s = session(vec![basics()]);
    send(&mut s, &["lesson 1", ""]);
    let out = send(&mut s, &["help"]);
    assert!(out.starts_with("gg - git and GitHub flow simulator"));
    assert_eq!(s.lessons().attempts(), 0);
}

#[test]
fn run_reads_until_end_of_input() {
    let mut s = session(vec![]);
    let mut out = Vec::new();
    s.run("git branch\n".as_bytes(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "* main\nGoodbye! Happy coding!\n"
    );
}

#[test]
fn run_stops_at_quit() {
    let mut s = session(vec![]);
    let mut out = Vec::new();
    s.run("quit\ngit checkout -b never\n".as_bytes(), &mut out)
        .unwrap();
    assert_eq!(s.repo().current_branch(), "main");
}

#[test]
fn interactive_prompt_shows_branch() {
    let mut s = session(vec![]);
    s.set_interactive(true);
    let mut out = Vec::new();
    s.run("".as_bytes(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "(main) $ Goodbye! Happy coding!\n"
    );
}

#[test]
fn import_replaces_repository() {
    let mut s = session(vec![]);
    let mut source = VirtualRepository::deterministic(RepoConfig::default());
    assert!(source.checkout("saved", true, None).success);
    s.import(&source.export_state()).unwrap();
    assert_eq!(s.repo().current_branch(), "saved");
}
