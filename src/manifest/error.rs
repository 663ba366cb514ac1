//! Manifest errors

use crate::core::error_handling::ContextualError;
use std::path::PathBuf;
use thiserror::Error;

pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read task file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid task file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Repository #{index} in the task file has an empty url")]
    EmptyUrl { index: usize },

    #[error("Repository '{url}' is listed more than once in the task file")]
    DuplicateRepository { url: String },
}

impl ContextualError for ManifestError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}
