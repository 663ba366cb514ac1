//! Manifest types

use crate::manifest::error::{ManifestError, ManifestResult};
use crate::repository::api::{default_location, Repository, RepositoryKind};
use crate::task::api::MetaTask;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// One repository entry of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    pub kind: RepositoryKind,
    pub url: String,
    /// Where the sources are kept; relative paths are below the data directory
    #[serde(default)]
    pub location: Option<PathBuf>,
}

impl RepositoryConfig {
    pub fn to_repository(&self, data_dir: &Path) -> Repository {
        let location = match &self.location {
            Some(location) if location.is_absolute() => location.clone(),
            Some(location) => data_dir.join(location),
            None => default_location(data_dir, &self.url),
        };
        Repository::new(self.kind, self.url.clone(), location)
    }
}

/// Tasks and repositories of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub repository_tasks: Vec<MetaTask>,
    #[serde(default)]
    pub report_tasks: Vec<MetaTask>,
    pub repositories: Vec<RepositoryConfig>,
}

impl Manifest {
    /// Load and validate a manifest file
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let manifest = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
        .map_err(|message| ManifestError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        manifest.validate()?;
        log::debug!(
            "Loaded task file '{}': {} repository tasks, {} report tasks, {} repositories",
            path.display(),
            manifest.repository_tasks.len(),
            manifest.report_tasks.len(),
            manifest.repositories.len()
        );
        Ok(manifest)
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Reject empty and duplicate repository urls
    pub fn validate(&self) -> ManifestResult<()> {
        let mut seen = HashSet::new();
        for (index, repository) in self.repositories.iter().enumerate() {
            if repository.url.trim().is_empty() {
                return Err(ManifestError::EmptyUrl { index: index + 1 });
            }
            if !seen.insert(repository.url.as_str()) {
                return Err(ManifestError::DuplicateRepository {
                    url: repository.url.clone(),
                });
            }
        }
        Ok(())
    }

    /// Repositories in manifest order with their locations resolved
    pub fn repositories(&self, data_dir: &Path) -> Vec<Repository> {
        self.repositories
            .iter()
            .map(|config| config.to_repository(data_dir))
            .collect()
    }
}
