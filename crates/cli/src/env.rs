// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

fn flag(var: &str) -> bool {
    std::env::var(var).is_ok_and(|v| v == "1")
}

// --- Logging ---

/// Default log filter when `GG_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Tracing filter directive from GG_LOG
pub fn log_filter() -> Option<String> {
    non_empty("GG_LOG")
}

// --- Lessons ---

/// Extra lesson directory from GG_LESSONS_DIR
pub fn lessons_dir() -> Option<PathBuf> {
    non_empty("GG_LESSONS_DIR").map(PathBuf::from)
}

// --- Config file ---

/// Resolve config file: GG_CONFIG > <config dir>/gg/config.toml
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = non_empty("GG_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("gg").join("config.toml"))
}

/// True when the config path came from GG_CONFIG, so a missing file is an error.
pub fn config_path_explicit() -> bool {
    non_empty("GG_CONFIG").is_some()
}

// --- Determinism ---

/// GG_DETERMINISTIC=1 pins commit ids and timestamps
pub fn deterministic() -> bool {
    flag("GG_DETERMINISTIC")
}

// --- Color ---

pub fn no_color() -> bool {
    flag("NO_COLOR")
}

pub fn force_color() -> bool {
    flag("COLOR")
}
