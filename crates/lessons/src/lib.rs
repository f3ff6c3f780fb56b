// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Lesson definitions, loading, and the progression engine

mod builtin;
mod engine;
mod find;
mod lesson;
mod matcher;
mod parser;

pub use builtin::{builtin_lesson_files, builtin_lessons};
pub use engine::{LessonEngine, ValidationResult, HINT_NUDGE_ATTEMPTS, REVEAL_ATTEMPTS};
pub use find::load_lessons_dir;
pub use lesson::{Lesson, LessonStep, StepType};
pub use matcher::{commands_match, normalize_command, pattern_matches};
pub use parser::{
    load_lesson_file, parse_lesson, parse_lesson_with_format, validate, Format, LessonError,
};
