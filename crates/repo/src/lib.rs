// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gg-repo: the in-memory repository and the simulated hosting service.
//!
//! Nothing here touches the filesystem or network except the explicit
//! snapshot save/load helpers.

pub mod hosting;
pub mod model;
pub mod repository;
pub mod snapshot;
pub mod status;

pub use hosting::{Hosting, MergeMethod, PrFilter};
pub use model::{
    Branch, ChangeKind, Commit, CommitId, PrStatus, PullRequest, RepoConfig, RepositoryState,
    Review, ReviewStatus, StagedChange, DEFAULT_BRANCH, DEFAULT_REMOTE,
};
pub use repository::{is_valid_branch_name, BranchListing, VirtualRepository};
pub use snapshot::{BranchRecord, CommitRecord, SnapshotError, StateSnapshot};
pub use status::{files_changed, RepositoryStatus};
