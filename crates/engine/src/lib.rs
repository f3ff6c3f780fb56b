// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gg command engine: routes parsed git/gh commands to the simulated
//! repository and hosting service.

mod executor;
mod gh;
mod git;

pub use executor::CommandExecutor;
pub use git::DEFAULT_LOG_COUNT;
