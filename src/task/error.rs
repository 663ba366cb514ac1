//! Task Error Handling

use crate::core::error_handling::ContextualError;
use crate::task::types::TaskKind;
use thiserror::Error;

/// Result type alias for task operations
pub type TaskResult<T> = std::result::Result<T, TaskError>;

/// Errors raised while registering, resolving or executing tasks
#[derive(Debug, Error)]
pub enum TaskError {
    /// No task registered under this name
    #[error("There is no task with the name '{name}' registered")]
    NotFound { name: String },

    /// Two registrations share a name
    #[error("The name '{name}' is already used by another task, please use a different one")]
    DuplicateName { name: String },

    /// Registration without a name
    #[error("A task registration does not specify a name")]
    MissingName,

    /// Registration without a version
    #[error("Task '{name}' does not specify a version")]
    MissingVersion { name: String },

    /// Version string is not a semantic version
    #[error("Task '{name}' declares version '{version}' which is not a semantic version: {source}")]
    InvalidVersion {
        name: String,
        version: String,
        #[source]
        source: semver::Error,
    },

    /// Task constructed through the factory of another kind
    #[error("Task '{name}' is a {actual} task, expected a {expected} task")]
    KindMismatch {
        name: String,
        expected: TaskKind,
        actual: TaskKind,
    },

    /// Task listed in a manifest section that cannot run it
    #[error("Task '{name}' is a {kind} task and cannot be listed under '{section}'")]
    WrongSection {
        name: String,
        kind: TaskKind,
        section: &'static str,
    },

    /// Task rejected its parameter at construction
    #[error("Invalid parameter for task '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    /// Task failed while analysing
    #[error("Task '{name}' failed: {message}")]
    Execution { name: String, message: String },
}

impl TaskError {
    pub fn execution(name: impl Into<String>, message: impl Into<String>) -> Self {
        TaskError::Execution {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        TaskError::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Whether the error stems from the task configuration rather than a run
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, TaskError::Execution { .. })
    }
}

impl ContextualError for TaskError {
    fn is_user_actionable(&self) -> bool {
        self.is_configuration_error()
    }

    fn user_message(&self) -> Option<String> {
        self.is_configuration_error().then(|| self.to_string())
    }
}
