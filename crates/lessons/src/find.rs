// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lesson file discovery

use crate::lesson::Lesson;
use crate::parser::{load_lesson_file, Format};
use std::path::{Path, PathBuf};

/// Load every `.toml` and `.json` lesson directly under `dir`, in file
/// name order. Files that fail to parse are skipped with a warning. A
/// missing directory yields no lessons.
pub fn load_lessons_dir(dir: &Path) -> Result<Vec<Lesson>, std::io::Error> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut lessons = Vec::new();
    for path in lesson_files(dir)? {
        match load_lesson_file(&path) {
            Ok(lesson) => lessons.push(lesson),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping invalid lesson");
            }
        }
    }
    Ok(lessons)
}

fn lesson_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && Format::for_path(path).is_some())
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
