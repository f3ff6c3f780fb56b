//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving the gg binary: arguments, environment,
//! and the lines typed on stdin.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself when
/// CARGO_MANIFEST_DIR is stale.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Returns the path to the gg binary.
fn gg_binary() -> PathBuf {
    binary_path("gg")
}

/// Create a CLI builder for a gg session
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// Welcome banner printed when no lessons are loaded
pub const WELCOME_NO_LESSONS: &str = "\
gg - git and GitHub flow simulator
Type 'help' for commands or 'lessons' to browse lessons.
No lessons found. You can still practice git commands freely.
";

/// Closing line of every session
pub const GOODBYE: &str = "Goodbye! Happy coding!\n";

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: String,
    /// Holds an empty config file so the user's own settings never leak in
    home: tempfile::TempDir,
}

impl CliBuilder {
    fn new() -> Self {
        let home = tempfile::tempdir().unwrap();
        let config = home.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        Self {
            args: Vec::new(),
            envs: vec![
                ("GG_DETERMINISTIC".into(), "1".into()),
                ("NO_COLOR".into(), "1".into()),
                ("GG_LOG".into(), "off".into()),
                ("GG_CONFIG".into(), config.to_string_lossy().into()),
            ],
            stdin: String::new(),
            home,
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Lines typed into the session, each followed by a newline
    pub fn input(mut self, lines: &[&str]) -> Self {
        for line in lines {
            self.stdin.push_str(line);
            self.stdin.push('\n');
        }
        self
    }

    /// Scratch directory private to this run
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Build the command without running it
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(gg_binary());
        cmd.args(&self.args);
        cmd.env_remove("GG_LESSONS_DIR");
        cmd.env_remove("COLOR");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }

    fn output(&self) -> Output {
        let mut child = self
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("command should run");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(self.stdin.as_bytes())
            .unwrap();
        child.wait_with_output().expect("command should finish")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.output();
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.output();
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for transcript specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stdout does not contain substring.
    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}
