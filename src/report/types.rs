//! Report data model

use crate::core::fingerprint::Fingerprint;
use crate::report::error::{ReportError, ReportResult};
use crate::task::types::SubReportMap;
use semver::Version;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Version and parameter fingerprint a task last ran with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub version: String,
    pub parameter: String,
}

impl TaskRecord {
    pub fn new(version: &Version, parameter: &Fingerprint) -> Self {
        Self {
            version: version.to_string(),
            parameter: parameter.to_string(),
        }
    }
}

/// Task records keyed by task name
pub type TaskRecords = BTreeMap<String, TaskRecord>;

/// Aggregated report of a run
///
/// ```json
/// {
///   "tasks": { "ProjectMetrics": { "version": "1.0.0", "parameter": "74234e98..." } },
///   "projects": { "https://github.com/example/project.git": { "ProjectMetrics": { ... } } }
/// }
/// ```
///
/// Top-level keys other than `tasks` and `projects` are kept as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub tasks: TaskRecords,
    #[serde(default)]
    pub projects: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry of a repository
    pub fn project(&self, id: &str) -> Option<&Value> {
        self.projects.get(id)
    }

    pub fn project_mut(&mut self, id: &str) -> Option<&mut Value> {
        self.projects.get_mut(id)
    }

    /// Entry of a repository as a sub-report map, if it is an object
    pub fn project_data(&self, id: &str) -> Option<&SubReportMap> {
        self.projects.get(id).and_then(Value::as_object)
    }

    pub fn insert_project(&mut self, id: impl Into<String>, data: Value) {
        self.projects.insert(id.into(), data);
    }

    /// Load a report written by a previous run
    pub fn load(path: &Path) -> ReportResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ReportError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_pretty_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> ReportResult<()> {
        let mut content = self.to_pretty_json()?;
        content.push('\n');
        fs::write(path, content).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
