// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! gg - git and GitHub flow simulator

mod app;
mod color;
mod config;
mod env;
mod view;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gg_lessons::LessonEngine;
use gg_repo::StateSnapshot;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::{Session, Settings};
use crate::color::Palette;
use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "gg",
    version,
    about = "Practice git and GitHub flow against a simulated repository",
    styles = color::styles()
)]
struct Cli {
    /// Start this lesson right away (number or id)
    #[arg(short, long, value_name = "LESSON")]
    lesson: Option<String>,

    /// Load additional lessons from this directory
    #[arg(long, value_name = "DIR")]
    lessons_dir: Option<PathBuf>,

    /// Do not load the bundled lessons
    #[arg(long)]
    no_builtin: bool,

    /// Start from a saved repository snapshot
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Save the repository snapshot on exit
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Use sequential commit ids and a fixed clock
    #[arg(long)]
    deterministic: bool,

    /// Config file [default: $GG_CONFIG or <config dir>/gg/config.toml]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn init_logging() {
    let directive = env::log_filter().unwrap_or_else(|| env::DEFAULT_LOG_FILTER.to_string());
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Ok(Config::load(path, true)?);
    }
    match env::config_path() {
        Some(path) => Ok(Config::load(&path, env::config_path_explicit())?),
        None => Ok(Config::default()),
    }
}

/// Bundled lessons first, then the lesson directory. A directory lesson
/// with a bundled id replaces it.
fn load_lessons(cli: &Cli, config: &Config) -> Result<LessonEngine> {
    let mut engine = LessonEngine::new();
    if !cli.no_builtin {
        for lesson in gg_lessons::builtin_lessons().context("bundled lessons are invalid")? {
            engine.add_lesson(lesson);
        }
    }

    let dir = cli
        .lessons_dir
        .clone()
        .or_else(env::lessons_dir)
        .or_else(|| config.lessons.dir.clone());
    if let Some(dir) = dir {
        let lessons = gg_lessons::load_lessons_dir(&dir)
            .with_context(|| format!("failed to read lessons from {}", dir.display()))?;
        for lesson in lessons {
            engine.add_lesson(lesson);
        }
    }
    Ok(engine)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = load_config(cli.config.as_deref())?;
    let settings = Settings {
        repo: config.repo_config(),
        deterministic: cli.deterministic || env::deterministic(),
    };
    let lessons = load_lessons(&cli, &config)?;
    tracing::debug!(
        lessons = lessons.len(),
        deterministic = settings.deterministic,
        "starting session"
    );

    let mut session = Session::new(settings, lessons, Palette::detect());
    if let Some(path) = &cli.load {
        let snapshot = StateSnapshot::load(path)
            .with_context(|| format!("failed to load snapshot {}", path.display()))?;
        session
            .import(&snapshot)
            .with_context(|| format!("invalid snapshot {}", path.display()))?;
    }

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    session.set_interactive(stdin.is_terminal());
    session.welcome(&mut out)?;
    if let Some(key) = &cli.lesson {
        session.start_lesson(key, &mut out)?;
    }
    session.run(stdin.lock(), &mut out)?;
    tracing::debug!(
        completed = session.lessons().completed().count(),
        "session ended"
    );

    if let Some(path) = &cli.save {
        session
            .repo()
            .export_state()
            .save(path)
            .with_context(|| format!("failed to save snapshot {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
