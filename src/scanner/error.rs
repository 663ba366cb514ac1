//! Scanner Error Types

use crate::core::error_handling::ContextualError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Reading a directory or file failed
    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is text in an encoding that could not be determined
    #[error("Can't open file '{path}' - tried encodings utf-8 and iso-8859-15")]
    UnreadableFile { path: PathBuf },
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

impl ContextualError for ScanError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, ScanError::UnreadableFile { .. })
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
