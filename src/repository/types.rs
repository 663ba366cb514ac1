//! Repository types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumString};

/// How the sources of a repository are obtained
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RepositoryKind {
    Git,
    Svn,
    Archive,
}

impl RepositoryKind {
    /// Whether the acquired sources carry git metadata
    pub fn has_git_metadata(self) -> bool {
        matches!(self, RepositoryKind::Git | RepositoryKind::Svn)
    }
}

/// A repository taking part in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub kind: RepositoryKind,
    pub url: String,
    pub location: PathBuf,
    /// Set by acquisition when the sources changed; forces every task to run
    pub updated: bool,
}

impl Repository {
    pub fn new(kind: RepositoryKind, url: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            url: url.into(),
            location: location.into(),
            updated: false,
        }
    }

    /// Key of the repository in the report
    pub fn id(&self) -> &str {
        &self.url
    }
}

/// Directory below `data_dir` where the sources of `url` are kept
///
/// The scheme and a trailing `.git` are dropped:
/// `https://github.com/example/project.git` becomes
/// `<data_dir>/github.com/example/project`.
pub fn default_location(data_dir: &Path, url: &str) -> PathBuf {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let trimmed = without_scheme.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    let mut location = data_dir.to_path_buf();
    for segment in trimmed.split(['/', '\\', ':']) {
        if segment.is_empty() || segment == "." || segment == ".." {
            continue;
        }
        location.push(segment);
    }
    location
}
