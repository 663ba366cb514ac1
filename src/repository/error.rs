//! Repository acquisition errors

use crate::core::error_handling::ContextualError;
use std::path::PathBuf;
use thiserror::Error;

pub type AcquisitionResult<T> = std::result::Result<T, AcquisitionError>;

#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("The repository '{location}' seems to be corrupt - please delete it")]
    Corrupt { location: PathBuf },

    #[error("The directory '{location}' is used and would be overwritten when cloning")]
    DirectoryInUse { location: PathBuf },

    #[error("Command '{command}' failed with status {status}: {stderr}")]
    Command {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No extracted archive found at '{location}'")]
    MissingArchive { location: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContextualError for AcquisitionError {
    fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            AcquisitionError::Corrupt { .. }
                | AcquisitionError::DirectoryInUse { .. }
                | AcquisitionError::MissingArchive { .. }
                | AcquisitionError::Spawn { .. }
        )
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}
