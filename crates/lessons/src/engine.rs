// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lesson progression.
//!
//! The engine is idle until a lesson starts, then tracks the active step
//! and the number of attempts made at it. Finishing the last step records
//! the lesson as completed and returns the engine to idle.
//!
//! The engine never holds the repository. Operations that seed state
//! (starting a lesson, entering a step with setup changes) take it as an
//! argument.

use crate::lesson::{Lesson, LessonStep, StepType};
use crate::matcher::{commands_match, pattern_matches};
use crate::parser::LessonError;
use gg_repo::VirtualRepository;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info};

/// Attempts after which feedback nudges toward `hint`.
pub const HINT_NUDGE_ATTEMPTS: u32 = 3;
/// Attempts after which feedback reveals the expected command.
pub const REVEAL_ATTEMPTS: u32 = 5;

/// Outcome of checking one input against the active step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub success: bool,
    pub message: String,
    pub hints: Vec<String>,
    /// The caller should move to the next step.
    pub advance: bool,
}

impl ValidationResult {
    fn pass(message: impl Into<String>, advance: bool) -> Self {
        Self {
            success: true,
            message: message.into(),
            hints: Vec::new(),
            advance,
        }
    }

    fn fail(message: impl Into<String>, hints: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            hints,
            advance: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveLesson {
    id: String,
    step: usize,
}

#[derive(Debug, Default)]
pub struct LessonEngine {
    lessons: IndexMap<String, Lesson>,
    active: Option<ActiveLesson>,
    completed: IndexSet<String>,
    attempts: u32,
}

impl LessonEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lesson. A lesson with an existing id replaces it in place.
    pub fn add_lesson(&mut self, lesson: Lesson) {
        debug!(lesson = %lesson.id, steps = lesson.steps.len(), "registered lesson");
        self.lessons.insert(lesson.id.clone(), lesson);
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.get(id)
    }

    /// All lessons in registration order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.values()
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Look a lesson up by 1-based catalog number or by id.
    pub fn find(&self, key: &str) -> Option<&Lesson> {
        if let Ok(n) = key.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| self.lessons.get_index(i))
                .map(|(_, l)| l);
        }
        self.lessons.get(key)
    }

    /// Begin `id`: seed the repository from the lesson's initial state (if
    /// any), reset progress, and apply the first step's setup.
    ///
    /// Returns the first step, or `None` for a lesson without steps, which
    /// completes immediately.
    pub fn start_lesson(
        &mut self,
        id: &str,
        repo: &mut VirtualRepository,
    ) -> Result<Option<&LessonStep>, LessonError> {
        let Some(lesson) = self.lessons.get(id) else {
            return Err(LessonError::NotFound(id.to_string()));
        };
        if let Some(initial) = &lesson.initial {
            repo.import_state(initial)
                .map_err(|source| LessonError::Snapshot {
                    lesson: id.to_string(),
                    source,
                })?;
        }

        info!(lesson = id, "starting lesson");
        self.active = Some(ActiveLesson {
            id: id.to_string(),
            step: 0,
        });
        self.attempts = 0;
        Ok(self.enter_step(repo))
    }

    /// Apply the active step's setup, or complete the lesson if the index
    /// ran past the last step.
    fn enter_step(&mut self, repo: &mut VirtualRepository) -> Option<&LessonStep> {
        let active = self.active.as_ref()?;
        let lesson = self.lessons.get(&active.id)?;
        match lesson.steps.get(active.step) {
            Some(step) => {
                for file in &step.setup_changes {
                    repo.add_working_change(file);
                }
                debug!(lesson = %lesson.id, step = %step.id, "entered step");
            }
            None => {
                self.complete();
                return None;
            }
        }
        self.current_step()
    }

    fn complete(&mut self) {
        if let Some(active) = self.active.take() {
            info!(lesson = %active.id, "lesson completed");
            self.completed.insert(active.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.active.as_ref().and_then(|a| self.lessons.get(&a.id))
    }

    pub fn current_step(&self) -> Option<&LessonStep> {
        let active = self.active.as_ref()?;
        self.lessons.get(&active.id)?.steps.get(active.step)
    }

    /// `(step number, step count)` of the active lesson, 1-based.
    pub fn progress(&self) -> Option<(usize, usize)> {
        let active = self.active.as_ref()?;
        let lesson = self.lessons.get(&active.id)?;
        Some((active.step + 1, lesson.steps.len()))
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Judge `input` against the active step. Every call counts as an
    /// attempt. The engine does not advance by itself; callers act on
    /// [`ValidationResult::advance`].
    pub fn validate(&mut self, input: &str) -> ValidationResult {
        let Some(step) = self.current_step() else {
            return ValidationResult::fail("No active lesson step", Vec::new());
        };
        let step = step.clone();
        self.attempts += 1;

        match step.kind {
            StepType::Explanation => ValidationResult::pass("", true),
            StepType::FreePractice => ValidationResult::pass("", false),
            StepType::Command => {
                let accepted = step.accepted.iter().any(|e| commands_match(input, e))
                    || step
                        .pattern
                        .as_deref()
                        .is_some_and(|p| pattern_matches(p, input));
                if accepted {
                    ValidationResult::pass(step.success_message.clone(), true)
                } else {
                    self.feedback(input, &step)
                }
            }
        }
    }

    fn feedback(&self, input: &str, step: &LessonStep) -> ValidationResult {
        let input = input.trim();
        let mut hints = Vec::new();
        if input.is_empty() {
            hints.push("Please type a command.".to_string());
        } else if !input.starts_with("git") && !input.starts_with("gh") {
            hints.push("Git commands start with 'git' or 'gh'.".to_string());
        } else {
            hints.extend(step.hints.iter().take(2).cloned());
        }

        if self.attempts >= HINT_NUDGE_ATTEMPTS {
            hints.push("Type 'hint' for more help.".to_string());
        }
        if self.attempts >= REVEAL_ATTEMPTS {
            if let Some(first) = step.accepted.first() {
                hints.push(format!("Try: {first}"));
            }
        }
        ValidationResult::fail("That's not quite right.", hints)
    }

    /// Move to the next step, resetting the attempt counter.
    ///
    /// Returns the new step, or `None` when the lesson just completed (or
    /// none was active).
    pub fn advance(&mut self, repo: &mut VirtualRepository) -> Option<&LessonStep> {
        let active = self.active.as_mut()?;
        active.step += 1;
        self.attempts = 0;
        self.enter_step(repo)
    }

    /// Skip the active step. Same as [`advance`](Self::advance).
    pub fn skip(&mut self, repo: &mut VirtualRepository) -> Option<&LessonStep> {
        self.advance(repo)
    }

    /// Escalating hint for the active step.
    pub fn hint(&self) -> String {
        let Some(step) = self.current_step() else {
            return "No active lesson step.".to_string();
        };
        if step.kind == StepType::Explanation {
            return "Press Enter to continue.".to_string();
        }
        if !step.hints.is_empty() {
            let index = (self.attempts.saturating_sub(1) as usize).min(step.hints.len() - 1);
            return step.hints[index].clone();
        }
        if let Some(first) = step.accepted.first() {
            let words: Vec<&str> = first.split_whitespace().collect();
            return match words.as_slice() {
                [a, b, _, ..] => format!("The command starts with: {a} {b} ..."),
                [a, ..] => format!("The command starts with: {a} ..."),
                [] => "Keep trying!".to_string(),
            };
        }
        "Keep trying!".to_string()
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    /// Completed lesson ids in completion order.
    pub fn completed(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(String::as_str)
    }

    /// First lesson in catalog order that is not completed.
    pub fn next_lesson(&self) -> Option<&Lesson> {
        self.lessons.values().find(|l| !self.completed.contains(&l.id))
    }

    /// Prerequisites of `id` not yet completed. Unknown lessons have none.
    pub fn missing_prerequisites(&self, id: &str) -> Vec<&str> {
        self.lessons
            .get(id)
            .map(|l| {
                l.prerequisites
                    .iter()
                    .filter(|p| !self.completed.contains(*p))
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
