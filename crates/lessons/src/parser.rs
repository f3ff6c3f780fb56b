// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lesson parsing (TOML and JSON)

use crate::lesson::{Lesson, StepType};
use crate::matcher::compile_pattern;
use gg_repo::SnapshotError;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Lesson file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Format implied by a file extension.
    pub fn for_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Some(Format::Toml),
            Some("json") => Some(Format::Json),
            _ => None,
        }
    }
}

/// Errors that can occur while loading or starting lessons
#[derive(Debug, Error)]
pub enum LessonError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported lesson file: {0}")]
    UnsupportedFile(String),

    #[error("invalid lesson '{lesson}': {message}")]
    Invalid { lesson: String, message: String },

    #[error("invalid pattern in lesson '{lesson}' step '{step}': {source}")]
    Pattern {
        lesson: String,
        step: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("invalid initial state in lesson '{lesson}': {source}")]
    Snapshot {
        lesson: String,
        #[source]
        source: SnapshotError,
    },

    #[error("lesson '{0}' not found")]
    NotFound(String),
}

/// Parse a lesson from TOML content (convenience wrapper)
pub fn parse_lesson(content: &str) -> Result<Lesson, LessonError> {
    parse_lesson_with_format(content, Format::Toml)
}

/// Parse a lesson from the given content in the specified format
pub fn parse_lesson_with_format(content: &str, format: Format) -> Result<Lesson, LessonError> {
    let mut lesson: Lesson = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };

    for (i, step) in lesson.steps.iter_mut().enumerate() {
        if step.id.is_empty() {
            step.id = format!("step-{}", i + 1);
        }
    }

    validate(&lesson)?;
    Ok(lesson)
}

/// Read and parse one lesson file.
pub fn load_lesson_file(path: &Path) -> Result<Lesson, LessonError> {
    let Some(format) = Format::for_path(path) else {
        return Err(LessonError::UnsupportedFile(path.display().to_string()));
    };
    let content = std::fs::read_to_string(path)?;
    parse_lesson_with_format(&content, format)
}

fn invalid(lesson: &Lesson, message: impl Into<String>) -> LessonError {
    LessonError::Invalid {
        lesson: lesson.id.clone(),
        message: message.into(),
    }
}

/// Check a lesson for problems that would only show up mid-session.
pub fn validate(lesson: &Lesson) -> Result<(), LessonError> {
    if lesson.id.trim().is_empty() {
        return Err(invalid(lesson, "missing id"));
    }

    let mut seen = HashSet::new();
    for step in &lesson.steps {
        if !seen.insert(step.id.as_str()) {
            return Err(invalid(lesson, format!("duplicate step id '{}'", step.id)));
        }
        if step.kind == StepType::Command && step.accepted.is_empty() && step.pattern.is_none() {
            return Err(invalid(
                lesson,
                format!("command step '{}' has no accepted command or pattern", step.id),
            ));
        }
        if let Some(pattern) = &step.pattern {
            compile_pattern(pattern).map_err(|e| LessonError::Pattern {
                lesson: lesson.id.clone(),
                step: step.id.clone(),
                source: Box::new(e),
            })?;
        }
    }

    if let Some(initial) = &lesson.initial {
        initial.validate().map_err(|source| LessonError::Snapshot {
            lesson: lesson.id.clone(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
