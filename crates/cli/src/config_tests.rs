// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_file_is_default() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.repo_config(), RepoConfig::default());
}

#[test]
fn overrides_repo_identity() {
    let config = Config::parse(
        r#"
[repo]
author = "octocat"
remote_url = "https://github.com/octocat/hello.git"

[lessons]
dir = "/tmp/lessons"
"#,
    )
    .unwrap();
    let repo = config.repo_config();
    assert_eq!(repo.author, "octocat");
    assert_eq!(repo.slug(), "octocat/hello");
    assert_eq!(config.lessons.dir, Some(PathBuf::from("/tmp/lessons")));
}

#[test]
fn partial_repo_section_keeps_defaults() {
    let config = Config::parse("[repo]\nauthor = \"mona\"\n").unwrap();
    let repo = config.repo_config();
    assert_eq!(repo.author, "mona");
    assert_eq!(repo.remote_url, RepoConfig::default().remote_url);
}

#[yare::parameterized(
    unknown_section = { "[server]\nport = 1\n" },
    unknown_key     = { "[repo]\nemail = \"x\"\n" },
    wrong_type      = { "[repo]\nauthor = 3\n" },
)]
fn rejects_bad_config(text: &str) {
    assert!(Config::parse(text).is_err());
}

#[test]
fn missing_optional_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join("config.toml"), false).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn missing_required_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("config.toml"), true).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn parse_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[repo\n").unwrap();
    let err = Config::load(&path, false).unwrap_err();
    assert!(err.to_string().starts_with(&format!("invalid config {}", path.display())));
}
