// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

const MINIMAL: &str = r#"
id = "basics"
title = "Basics"

[[steps]]
id = "status"
instruction = "Run git status"
accepted = ["git status"]
"#;

#[test]
fn parses_minimal_toml() {
    let lesson = parse_lesson(MINIMAL).unwrap();
    assert_eq!(lesson.id, "basics");
    assert_eq!(lesson.title, "Basics");
    assert_eq!(lesson.steps.len(), 1);

    let step = &lesson.steps[0];
    assert_eq!(step.kind, StepType::Command);
    assert_eq!(step.accepted, vec!["git status"]);
    assert_eq!(step.success_message, "Correct!");
    assert!(step.hints.is_empty());
    assert!(lesson.initial.is_none());
}

#[test]
fn step_types_parse_in_snake_case() {
    let lesson = parse_lesson(
        r#"
id = "kinds"

[[steps]]
id = "a"
type = "explanation"
instruction = "Read this"

[[steps]]
id = "b"
type = "free_practice"
instruction = "Play"
"#,
    )
    .unwrap();
    assert_eq!(lesson.steps[0].kind, StepType::Explanation);
    assert_eq!(lesson.steps[1].kind, StepType::FreePractice);
    assert_eq!(lesson.steps[1].kind.to_string(), "free_practice");
}

#[test]
fn fills_missing_step_ids() {
    let lesson = parse_lesson(
        r#"
id = "anon"

[[steps]]
type = "explanation"

[[steps]]
accepted = ["git log"]
"#,
    )
    .unwrap();
    let ids: Vec<_> = lesson.steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["step-1", "step-2"]);
}

#[test]
fn accepts_legacy_field_names() {
    let json = r#"{
        "lesson_id": "legacy",
        "title": "Legacy",
        "required_lessons": ["basics"],
        "steps": [
            {
                "step_id": "commit",
                "step_type": "command",
                "instruction": "Commit",
                "expected_commands": ["git commit -m 'x'"],
                "command_pattern": "git commit",
                "failure_hints": ["Use -m"]
            }
        ]
    }"#;
    let lesson = parse_lesson_with_format(json, Format::Json).unwrap();
    assert_eq!(lesson.id, "legacy");
    assert_eq!(lesson.prerequisites, vec!["basics"]);
    let step = &lesson.steps[0];
    assert_eq!(step.id, "commit");
    assert_eq!(step.accepted, vec!["git commit -m 'x'"]);
    assert_eq!(step.pattern.as_deref(), Some("git commit"));
    assert_eq!(step.hints, vec!["Use -m"]);
}

#[test]
fn parses_initial_state() {
    let lesson = parse_lesson(
        r#"
id = "seeded"

[[steps]]
accepted = ["git status"]

[initial]
head = "feature"

[initial.commits.aaa1111]
message = "Initial commit"

[initial.commits.bbb2222]
message = "Work"
parent_id = "aaa1111"
files_changed = ["app.py"]

[initial.branches.main]
commit_id = "aaa1111"

[initial.branches.feature]
commit_id = "bbb2222"
"#,
    )
    .unwrap();
    let initial = lesson.initial.unwrap();
    assert_eq!(initial.head, "feature");
    assert_eq!(initial.commits.len(), 2);
    assert_eq!(initial.branches["feature"].commit_id, "bbb2222");
}

#[test]
fn rejects_missing_id() {
    let err = parse_lesson("id = \"  \"\n").unwrap_err();
    assert!(matches!(err, LessonError::Invalid { .. }));
    assert!(err.to_string().contains("missing id"));
}

#[test]
fn rejects_duplicate_step_ids() {
    let err = parse_lesson(
        r#"
id = "dup"

[[steps]]
id = "same"
type = "explanation"

[[steps]]
id = "same"
type = "explanation"
"#,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "invalid lesson 'dup': duplicate step id 'same'");
}

#[test]
fn rejects_command_step_without_expectation() {
    let err = parse_lesson(
        r#"
id = "empty"

[[steps]]
id = "nothing"
"#,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid lesson 'empty': command step 'nothing' has no accepted command or pattern"
    );
}

#[test]
fn pattern_alone_is_enough() {
    let lesson = parse_lesson(
        r#"
id = "pat"

[[steps]]
id = "commit"
pattern = "git commit"
"#,
    )
    .unwrap();
    assert!(lesson.steps[0].accepted.is_empty());
}

#[test]
fn rejects_bad_pattern() {
    let err = parse_lesson(
        r#"
id = "bad"

[[steps]]
id = "broken"
pattern = "git ("
"#,
    )
    .unwrap_err();
    match err {
        LessonError::Pattern { lesson, step, .. } => {
            assert_eq!(lesson, "bad");
            assert_eq!(step, "broken");
        }
        other => panic!("expected pattern error, got {other:?}"),
    }
}

#[test]
fn rejects_inconsistent_initial_state() {
    let err = parse_lesson(
        r#"
id = "broken-state"

[initial]
head = "nowhere"

[initial.commits.aaa1111]
message = "Initial commit"

[initial.branches.main]
commit_id = "aaa1111"
"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        LessonError::Snapshot {
            source: gg_repo::SnapshotError::UnknownHead(_),
            ..
        }
    ));
}

#[test]
fn syntax_errors_surface_per_format() {
    assert!(matches!(parse_lesson("id = "), Err(LessonError::Toml(_))));
    assert!(matches!(
        parse_lesson_with_format("{", Format::Json),
        Err(LessonError::Json(_))
    ));
}

#[yare::parameterized(
    toml    = { "lesson.toml", Some(Format::Toml) },
    json    = { "lesson.json", Some(Format::Json) },
    yaml    = { "lesson.yaml", None },
    no_ext  = { "lesson", None },
)]
fn format_for_path(name: &str, expected: Option<Format>) {
    assert_eq!(Format::for_path(Path::new(name)), expected);
}

#[test]
fn load_lesson_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("basics.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(MINIMAL.as_bytes()).unwrap();

    let lesson = load_lesson_file(&path).unwrap();
    assert_eq!(lesson.id, "basics");
}

#[test]
fn load_lesson_file_rejects_unknown_extension() {
    let err = load_lesson_file(Path::new("notes.txt")).unwrap_err();
    assert!(matches!(err, LessonError::UnsupportedFile(_)));
}

#[test]
fn load_lesson_file_missing_is_io() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_lesson_file(&dir.path().join("gone.toml")).unwrap_err();
    assert!(matches!(err, LessonError::Io(_)));
}
