// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive session: reads lines, routes them to the lesson engine and
//! the command executor, and prints the results.
//!
//! The session owns the repository. Starting or resetting a lesson
//! replaces it with a fresh one, so nothing from a previous attempt leaks
//! into the next.

use std::io::{self, BufRead, Write};

use gg_core::CommandResult;
use gg_engine::CommandExecutor;
use gg_lessons::{LessonEngine, StepType};
use gg_repo::{RepoConfig, SnapshotError, StateSnapshot, VirtualRepository};

use crate::color::Palette;
use crate::view;

/// How fresh repositories are built.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub repo: RepoConfig,
    /// Sequential commit ids and a pinned clock
    pub deterministic: bool,
}

impl Settings {
    fn fresh_repo(&self) -> VirtualRepository {
        if self.deterministic {
            VirtualRepository::deterministic(self.repo.clone())
        } else {
            VirtualRepository::new(self.repo.clone())
        }
    }
}

pub struct Session {
    settings: Settings,
    repo: VirtualRepository,
    executor: CommandExecutor,
    lessons: LessonEngine,
    palette: Palette,
    interactive: bool,
    running: bool,
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit")
}

impl Session {
    pub fn new(settings: Settings, lessons: LessonEngine, palette: Palette) -> Self {
        Self {
            repo: settings.fresh_repo(),
            settings,
            executor: CommandExecutor::new(),
            lessons,
            palette,
            interactive: false,
            running: true,
        }
    }

    /// Show prompts before each read.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn repo(&self) -> &VirtualRepository {
        &self.repo
    }

    pub fn lessons(&self) -> &LessonEngine {
        &self.lessons
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Replace the repository with a saved snapshot.
    pub fn import(&mut self, snapshot: &StateSnapshot) -> Result<(), SnapshotError> {
        self.repo.import_state(snapshot)
    }

    pub fn welcome(&self, out: &mut impl Write) -> io::Result<()> {
        let p = &self.palette;
        writeln!(out, "{}", p.header("gg - git and GitHub flow simulator"))?;
        writeln!(
            out,
            "{}",
            p.context("Type 'help' for commands or 'lessons' to browse lessons.")
        )?;
        match self.lessons.len() {
            0 => writeln!(
                out,
                "{}",
                p.yellow("No lessons found. You can still practice git commands freely.")
            ),
            1 => writeln!(out, "Loaded 1 lesson."),
            n => writeln!(out, "Loaded {n} lessons."),
        }
    }

    /// Read lines until `quit`, `exit`, or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        let mut lines = input.lines();
        while self.is_running() {
            self.prompt(out)?;
            let Some(line) = lines.next() else {
                break;
            };
            self.handle_line(&line?, out)?;
        }
        writeln!(out, "Goodbye! Happy coding!")
    }

    fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        if !self.interactive {
            return Ok(());
        }
        let on_explanation = self
            .lessons
            .current_step()
            .is_some_and(|s| s.kind == StepType::Explanation);
        if on_explanation {
            write!(out, "{}", self.palette.muted("Press Enter to continue... "))?;
        } else {
            let branch = self.palette.yellow(self.repo.current_branch());
            write!(out, "({branch}) $ ")?;
        }
        out.flush()
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let input = line.trim();

        let on_explanation = self
            .lessons
            .current_step()
            .is_some_and(|s| s.kind == StepType::Explanation);
        if on_explanation {
            if is_quit(input) {
                self.running = false;
                return Ok(());
            }
            self.lessons.validate(input);
            return self.advance(out);
        }

        if input.is_empty() {
            return Ok(());
        }

        let mut words = input.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_lowercase();
        match keyword.as_str() {
            "quit" | "exit" => self.running = false,
            "lessons" => writeln!(out, "{}", view::render_lessons(&self.lessons, &self.palette))?,
            "lesson" => match words.next() {
                Some(key) => self.start_lesson(key, out)?,
                None => self.show_current_lesson(out)?,
            },
            "hint" => {
                let hint = self.lessons.hint();
                writeln!(out, "{}", self.palette.context(&format!("Hint: {hint}")))?;
            }
            "skip" => {
                if self.lessons.is_active() {
                    writeln!(out, "{}", self.palette.yellow("Skipped current step."))?;
                    self.advance(out)?;
                } else {
                    writeln!(out, "{}", self.palette.yellow("No active lesson to skip."))?;
                }
            }
            "reset" => self.reset(out)?,
            "status" => writeln!(out, "{}", view::render_status(&self.repo, &self.palette))?,
            "tree" => writeln!(
                out,
                "{}",
                view::render_tree(&self.repo, &self.palette, view::TREE_DEPTH)
            )?,
            "help" => self.execute(input, out)?,
            _ => self.attempt(input, out)?,
        }
        Ok(())
    }

    /// Judge `input` against a command step, running it only when accepted.
    /// Outside command steps the input simply runs.
    fn attempt(&mut self, input: &str, out: &mut impl Write) -> io::Result<()> {
        let on_command = self
            .lessons
            .current_step()
            .is_some_and(|s| s.kind == StepType::Command);
        if !on_command {
            return self.execute(input, out);
        }

        let verdict = self.lessons.validate(input);
        if !verdict.success {
            writeln!(out, "{}", self.palette.red(&format!("✗ {}", verdict.message)))?;
            for hint in &verdict.hints {
                writeln!(out, "  {}", self.palette.context(&format!("→ {hint}")))?;
            }
            return Ok(());
        }

        self.execute(input, out)?;
        writeln!(out, "{}", self.palette.green(&format!("✓ {}", verdict.message)))?;
        if verdict.advance {
            self.advance(out)?;
        }
        Ok(())
    }

    fn execute(&mut self, input: &str, out: &mut impl Write) -> io::Result<()> {
        match self.executor.run(&mut self.repo, input) {
            Ok(result) if result.is_exit() => {
                self.running = false;
                Ok(())
            }
            Ok(result) => self.print_result(&result, out),
            Err(e) => writeln!(out, "{}", self.palette.red(&e.diagnostic(input))),
        }
    }

    fn print_result(&self, result: &CommandResult, out: &mut impl Write) -> io::Result<()> {
        if let Some(output) = result.output.as_deref().filter(|s| !s.is_empty()) {
            writeln!(out, "{output}")?;
        }
        if !result.message.is_empty() {
            if result.success {
                writeln!(out, "{}", result.message)?;
            } else {
                writeln!(out, "{}", self.palette.red(&result.message))?;
            }
        }
        for hint in &result.hints {
            writeln!(out, "{}", self.palette.context(&format!("hint: {hint}")))?;
        }
        Ok(())
    }

    /// Start a lesson by number or id on a fresh repository.
    pub fn start_lesson(&mut self, key: &str, out: &mut impl Write) -> io::Result<()> {
        let Some(lesson) = self.lessons.find(key) else {
            return writeln!(out, "{}", self.palette.red(&format!("Lesson not found: {key}")));
        };
        let id = lesson.id.clone();
        let missing: Vec<String> = self
            .lessons
            .missing_prerequisites(&id)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut repo = self.settings.fresh_repo();
        let started = self
            .lessons
            .start_lesson(&id, &mut repo)
            .map(|first| first.is_some());
        let has_step = match started {
            Ok(has_step) => has_step,
            Err(e) => {
                return writeln!(
                    out,
                    "{}",
                    self.palette.red(&format!("Failed to start lesson: {e}"))
                );
            }
        };
        self.repo = repo;

        if let Some(lesson) = self.lessons.lesson(&id) {
            writeln!(out, "{}", view::render_lesson_intro(lesson, &self.palette))?;
        }
        if !missing.is_empty() {
            writeln!(
                out,
                "{}",
                self.palette
                    .yellow(&format!("Recommended first: {}", missing.join(", ")))
            )?;
        }
        if has_step {
            self.announce_step(out)
        } else {
            self.announce_complete(&id, out)
        }
    }

    fn show_current_lesson(&self, out: &mut impl Write) -> io::Result<()> {
        match self.lessons.current_lesson() {
            Some(lesson) => {
                writeln!(out, "{}", view::render_lesson_intro(lesson, &self.palette))?;
                self.announce_step(out)
            }
            None => writeln!(out, "{}", self.palette.context("Usage: lesson <number>")),
        }
    }

    fn reset(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.lessons.current_lesson().map(|l| l.id.clone()) {
            Some(id) => {
                writeln!(out, "{}", self.palette.yellow("Restarting lesson."))?;
                self.start_lesson(&id, out)
            }
            None => {
                self.repo = self.settings.fresh_repo();
                writeln!(out, "{}", self.palette.yellow("Repository reset to a fresh state."))
            }
        }
    }

    fn advance(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(id) = self.lessons.current_lesson().map(|l| l.id.clone()) else {
            return Ok(());
        };
        if self.lessons.advance(&mut self.repo).is_some() {
            self.announce_step(out)
        } else {
            self.announce_complete(&id, out)
        }
    }

    fn announce_step(&self, out: &mut impl Write) -> io::Result<()> {
        if let (Some(step), Some(progress)) = (self.lessons.current_step(), self.lessons.progress()) {
            writeln!(out)?;
            writeln!(out, "{}", view::render_step(step, progress, &self.palette))?;
        }
        Ok(())
    }

    fn announce_complete(&self, id: &str, out: &mut impl Write) -> io::Result<()> {
        let title = self.lessons.lesson(id).map_or(id, |l| l.title.as_str());
        writeln!(out)?;
        writeln!(out, "{}", self.palette.green(&format!("Lesson complete: {title}")))?;

        match self.lessons.next_lesson() {
            None => writeln!(
                out,
                "{}",
                self.palette
                    .green("All lessons complete! You're ready for real GitHub flow.")
            ),
            Some(next) => {
                let number = self
                    .lessons
                    .lessons()
                    .position(|l| l.id == next.id)
                    .map_or(0, |i| i + 1);
                writeln!(
                    out,
                    "{}",
                    self.palette.context(&format!(
                        "Type 'lesson {number}' to continue with {}.",
                        next.title
                    ))
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
