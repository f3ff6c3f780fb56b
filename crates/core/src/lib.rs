// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gg-core: shared types for the gg git/gh workflow simulator

pub mod clock;
pub mod id;
pub mod result;
pub mod time_fmt;

pub use clock::{Clock, FakeClock, SystemClock};
pub use id::{is_fingerprint, FingerprintIdGen, IdGen, SequentialIdGen, FINGERPRINT_LEN};
pub use result::{CommandResult, EXIT_SENTINEL};
pub use time_fmt::format_git_date;
