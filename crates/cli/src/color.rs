// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};

pub mod codes {
    /// Section headers: pastel cyan / steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Descriptions and context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Muted / secondary text: darker grey
    pub const MUTED: u8 = 240;

    /// Pre-formatted ANSI escape sequences for use in tests
    #[cfg(test)]
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    #[cfg(test)]
    pub const CONTEXT_START: &str = "\x1b[38;5;245m";
    #[cfg(test)]
    pub const RESET: &str = "\x1b[0m";
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

/// Clap styles matching the session palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    Styles::styled()
        .header(fg(codes::HEADER).bold())
        .usage(fg(codes::HEADER).bold())
        .literal(fg(codes::LITERAL))
        .placeholder(fg(codes::CONTEXT))
}

/// Colors for session output. Every method returns `text` unchanged when
/// color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colorize: bool,
}

impl Palette {
    /// Palette following `NO_COLOR` / `COLOR` / TTY detection.
    pub fn detect() -> Self {
        Self {
            colorize: should_colorize(),
        }
    }

    /// Palette that never emits color codes.
    pub fn plain() -> Self {
        Self { colorize: false }
    }

    #[cfg(test)]
    pub fn forced() -> Self {
        Self { colorize: true }
    }

    fn paint(&self, start: &str, text: &str) -> String {
        if self.colorize {
            format!("{start}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Section headers and lesson titles (steel blue).
    pub fn header(&self, text: &str) -> String {
        self.paint(&fg256(codes::HEADER), text)
    }

    /// Command names and ids (light grey).
    pub fn literal(&self, text: &str) -> String {
        self.paint(&fg256(codes::LITERAL), text)
    }

    /// Hints and instructions (medium grey).
    pub fn context(&self, text: &str) -> String {
        self.paint(&fg256(codes::CONTEXT), text)
    }

    /// Secondary text (darker grey).
    pub fn muted(&self, text: &str) -> String {
        self.paint(&fg256(codes::MUTED), text)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint("\x1b[32m", text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint("\x1b[33m", text)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint("\x1b[31m", text)
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
