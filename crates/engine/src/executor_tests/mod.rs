// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod gh;
mod git;
mod internal;

use super::*;
use gg_repo::RepoConfig;

struct TestHarness {
    executor: CommandExecutor,
    repo: VirtualRepository,
}

fn setup() -> TestHarness {
    TestHarness {
        executor: CommandExecutor::new(),
        repo: VirtualRepository::deterministic(RepoConfig::default()),
    }
}

impl TestHarness {
    fn run(&mut self, input: &str) -> CommandResult {
        self.executor
            .run(&mut self.repo, input)
            .unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"))
    }

    /// Run and require success; returns the output text.
    fn ok(&mut self, input: &str) -> String {
        let result = self.run(input);
        assert!(result.success, "{input:?} failed: {}", result.message);
        result.output.unwrap_or_default()
    }

    /// Run and require failure.
    fn fails(&mut self, input: &str) -> CommandResult {
        let result = self.run(input);
        assert!(!result.success, "{input:?} unexpectedly succeeded");
        result
    }

    /// `feature` branch with one commit, pushed with upstream.
    fn pushed_feature(&mut self) {
        self.ok("git checkout -b feature");
        self.repo.add_working_change("app.py");
        self.ok("git commit -am 'Add app'");
        self.ok("git push -u origin feature");
    }
}
