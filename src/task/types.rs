//! Type definitions for the task system

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use strum_macros::{Display, EnumString};

/// Result one task produced for one repository
pub type SubReport = Value;

/// Sub-reports of one repository keyed by task name
pub type SubReportMap = serde_json::Map<String, Value>;

/// Task kind, fixed by the capability set a task implements
///
/// - `Git`: runs once per repository against its version control metadata
/// - `File`: observes every file of a repository during the shared file pass
/// - `Report`: runs once over the aggregated report after all repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TaskKind {
    Git,
    File,
    Report,
}

impl TaskKind {
    /// Whether tasks of this kind produce per-repository results
    pub fn is_repository_scoped(self) -> bool {
        matches!(self, TaskKind::Git | TaskKind::File)
    }
}

/// One manifest entry referencing a registered task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTask {
    pub name: String,
    #[serde(default)]
    pub parameter: Value,
}

impl MetaTask {
    pub fn new(name: impl Into<String>, parameter: Value) -> Self {
        Self {
            name: name.into(),
            parameter,
        }
    }

    /// Meta task without a parameter
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Value::Null)
    }
}

/// Arguments handed to every task constructor
///
/// The values are user provided; a task that needs one has to check that it
/// is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalArgs {
    pub github_token: Option<String>,
    pub data_dir: PathBuf,
}

/// Whether a sub-report carries no data and must not be stored
pub fn is_empty_report(report: &Value) -> bool {
    match report {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
