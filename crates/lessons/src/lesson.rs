// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lesson definitions.
//!
//! Field names follow the lesson file format. Aliases accept the older
//! spellings (`lesson_id`, `step_type`, `expected_commands`, ...) so
//! existing lesson files load unchanged.

use gg_repo::StateSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a step consumes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    /// Read-only text; any input continues.
    Explanation,
    /// The learner must type one of the accepted commands.
    #[default]
    Command,
    /// Anything goes; the step never advances on its own.
    FreePractice,
}

impl StepType {
    pub fn as_str(self) -> &'static str {
        match self {
            StepType::Explanation => "explanation",
            StepType::Command => "command",
            StepType::FreePractice => "free_practice",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_success_message() -> String {
    "Correct!".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonStep {
    /// Filled in as `step-<n>` when omitted.
    #[serde(default, alias = "step_id")]
    pub id: String,
    #[serde(default, rename = "type", alias = "step_type")]
    pub kind: StepType,
    #[serde(default)]
    pub instruction: String,
    #[serde(default, alias = "expected_commands")]
    pub accepted: Vec<String>,
    /// Case-insensitive regex matched at the start of the input
    #[serde(default, alias = "command_pattern")]
    pub pattern: Option<String>,
    #[serde(default = "default_success_message")]
    pub success_message: String,
    #[serde(default, alias = "failure_hints")]
    pub hints: Vec<String>,
    /// Working-tree edits simulated when the step begins
    #[serde(default)]
    pub setup_changes: Vec<String>,
}

impl LessonStep {
    fn new(id: &str, kind: StepType, instruction: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            instruction: instruction.to_string(),
            accepted: Vec::new(),
            pattern: None,
            success_message: default_success_message(),
            hints: Vec::new(),
            setup_changes: Vec::new(),
        }
    }

    pub fn explanation(id: &str, instruction: &str) -> Self {
        Self::new(id, StepType::Explanation, instruction)
    }

    pub fn free_practice(id: &str, instruction: &str) -> Self {
        Self::new(id, StepType::FreePractice, instruction)
    }

    pub fn command(id: &str, instruction: &str, accepted: &[&str]) -> Self {
        let mut step = Self::new(id, StepType::Command, instruction);
        step.accepted = accepted.iter().map(|s| s.to_string()).collect();
        step
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    pub fn with_hints(mut self, hints: &[&str]) -> Self {
        self.hints = hints.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_setup(mut self, files: &[&str]) -> Self {
        self.setup_changes = files.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_success(mut self, message: &str) -> Self {
        self.success_message = message.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(alias = "lesson_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default, alias = "step")]
    pub steps: Vec<LessonStep>,
    /// Lesson ids to finish first. Informational only.
    #[serde(default, alias = "required_lessons")]
    pub prerequisites: Vec<String>,
    /// Repository to start from instead of a fresh one
    #[serde(default, alias = "initial_state", skip_serializing_if = "Option::is_none")]
    pub initial: Option<StateSnapshot>,
}

impl Lesson {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            objectives: Vec::new(),
            steps: Vec::new(),
            prerequisites: Vec::new(),
            initial: None,
        }
    }

    pub fn with_steps(mut self, steps: Vec<LessonStep>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_prerequisites(mut self, ids: &[&str]) -> Self {
        self.prerequisites = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_initial(mut self, snapshot: StateSnapshot) -> Self {
        self.initial = Some(snapshot);
        self
    }

    pub fn step(&self, index: usize) -> Option<&LessonStep> {
        self.steps.get(index)
    }
}
