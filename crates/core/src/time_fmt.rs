// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Git-style timestamp formatting.

use chrono::{DateTime, Utc};

/// Format epoch milliseconds the way `git log` prints author dates:
/// `"Tue Nov 14 22:13:20 2023 +0000"`. Times are rendered in UTC.
pub fn format_git_date(epoch_ms: u64) -> String {
    let secs = (epoch_ms / 1000) as i64;
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%a %b %d %H:%M:%S %Y +0000").to_string(),
        None => String::from("Thu Jan 01 00:00:00 1970 +0000"),
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
