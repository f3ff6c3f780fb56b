// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lessons compiled into the binary from `data/`.

use crate::lesson::Lesson;
use crate::parser::{parse_lesson, LessonError};

include!(concat!(env!("OUT_DIR"), "/builtin_lessons.rs"));

/// File names of the bundled lessons, in catalog order.
pub fn builtin_lesson_files() -> impl Iterator<Item = &'static str> {
    BUILTIN_LESSONS.iter().map(|(name, _)| *name)
}

/// Parse the bundled lessons.
pub fn builtin_lessons() -> Result<Vec<Lesson>, LessonError> {
    BUILTIN_LESSONS
        .iter()
        .map(|(_, content)| parse_lesson(content))
        .collect()
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
