// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optional user settings file.
//!
//! ```toml
//! [repo]
//! author = "octocat"
//! remote_url = "https://github.com/octocat/hello.git"
//!
//! [lessons]
//! dir = "~/gg-lessons"
//! ```

use gg_repo::RepoConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub repo: RepoSection,
    pub lessons: LessonsSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepoSection {
    pub author: Option<String>,
    pub remote_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LessonsSection {
    pub dir: Option<PathBuf>,
}

impl Config {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read `path`. A missing file yields defaults unless `required`.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Repository identity with configured values over the defaults.
    pub fn repo_config(&self) -> RepoConfig {
        let mut config = RepoConfig::default();
        if let Some(author) = &self.repo.author {
            config.author = author.clone();
        }
        if let Some(url) = &self.repo.remote_url {
            config.remote_url = url.clone();
        }
        config
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
