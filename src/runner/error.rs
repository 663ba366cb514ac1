//! Runner errors
//!
//! Every error names where it happened: the repository, the task and, for
//! file tasks, the file that was being analysed.

use crate::core::error_handling::ContextualError;
use crate::report::api::Report;
use crate::repository::api::AcquisitionError;
use crate::scanner::api::ScanError;
use crate::task::api::TaskError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type RunResult<T> = std::result::Result<T, RunError>;

#[derive(Debug, Error)]
pub enum RunError {
    /// The manifest does not match the registered tasks
    #[error(transparent)]
    Configuration(#[from] TaskError),

    #[error("Failed to acquire repository '{repository}': {source}")]
    Acquisition {
        repository: String,
        #[source]
        source: AcquisitionError,
    },

    #[error("Task '{task}' failed for repository '{repository}'{}: {source}", in_file(.file))]
    Task {
        repository: String,
        task: String,
        file: Option<PathBuf>,
        #[source]
        source: TaskError,
    },

    #[error("Failed to scan repository '{repository}': {source}")]
    Scan {
        repository: String,
        #[source]
        source: ScanError,
    },

    /// Report task failure, with the report as it was handed to the task
    #[error("Report task '{task}' failed: {source}")]
    ReportTask {
        task: String,
        report: Box<Report>,
        #[source]
        source: TaskError,
    },
}

fn in_file(file: &Option<PathBuf>) -> String {
    file.as_ref()
        .map(|path| format!(" on file '{}'", path.display()))
        .unwrap_or_default()
}

impl RunError {
    pub(crate) fn task(
        repository: &str,
        task: &str,
        file: Option<&Path>,
        source: TaskError,
    ) -> Self {
        RunError::Task {
            repository: repository.to_string(),
            task: task.to_string(),
            file: file.map(Path::to_path_buf),
            source,
        }
    }

    /// Repository the error happened for, if any
    pub fn repository(&self) -> Option<&str> {
        match self {
            RunError::Acquisition { repository, .. }
            | RunError::Task { repository, .. }
            | RunError::Scan { repository, .. } => Some(repository),
            RunError::Configuration(_) | RunError::ReportTask { .. } => None,
        }
    }
}

impl ContextualError for RunError {
    fn is_user_actionable(&self) -> bool {
        match self {
            RunError::Configuration(e) => e.is_user_actionable(),
            RunError::Acquisition { source, .. } => source.is_user_actionable(),
            RunError::Scan { source, .. } => source.is_user_actionable(),
            RunError::Task { .. } | RunError::ReportTask { .. } => true,
        }
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}
