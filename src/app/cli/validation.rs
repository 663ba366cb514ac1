//! CLI argument validation
//!
//! Checks the arguments for consistency before anything is read or written:
//! the task file must exist, an old report and the data directory must exist,
//! and overwriting the old report requires `--force`.

use super::args::Args;
use thiserror::Error;

/// Invalid argument combination or value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl crate::core::error_handling::ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.message.clone())
    }
}

impl Args {
    /// Validate arguments for a run
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_tasks()?;
        self.validate_report()?;
        self.validate_data_dir()?;
        self.validate_output()?;
        self.validate_overwrite()?;
        Ok(())
    }

    fn validate_tasks(&self) -> Result<(), ValidationError> {
        match &self.tasks {
            None => Err(ValidationError::new(
                "No task file given - use --tasks or set 'tasks' in the configuration file",
            )),
            Some(path) if !path.is_file() => Err(ValidationError::new(&format!(
                "Task file does not exist: '{}'",
                path.display()
            ))),
            Some(_) => Ok(()),
        }
    }

    fn validate_report(&self) -> Result<(), ValidationError> {
        match &self.report {
            Some(path) if !path.is_file() => Err(ValidationError::new(&format!(
                "Report file does not exist: '{}'",
                path.display()
            ))),
            _ => Ok(()),
        }
    }

    fn validate_data_dir(&self) -> Result<(), ValidationError> {
        let data_dir = self.data_dir();
        if !data_dir.is_dir() {
            return Err(ValidationError::new(&format!(
                "Data directory does not exist: '{}'",
                data_dir.display()
            )));
        }
        Ok(())
    }

    fn validate_output(&self) -> Result<(), ValidationError> {
        let Some(output) = &self.output else {
            return Ok(());
        };
        if output.is_dir() {
            return Err(ValidationError::new(&format!(
                "Output path is a directory: '{}'",
                output.display()
            )));
        }
        let parent = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return Ok(()),
        };
        if !parent.is_dir() {
            return Err(ValidationError::new(&format!(
                "Parent directory of the output does not exist: '{}'",
                parent.display()
            )));
        }
        Ok(())
    }

    /// `--force` is required to overwrite the old report and allowed only then
    fn validate_overwrite(&self) -> Result<(), ValidationError> {
        let overwrites_report = self.output.is_some() && self.output == self.report;

        if self.force && !overwrites_report {
            return Err(ValidationError::new(
                "Force is only needed to overwrite an existing report",
            ));
        }
        if !self.force && overwrites_report {
            let output = self.output.as_deref().map(|p| p.display().to_string());
            return Err(ValidationError::new(&format!(
                "{} exists already! Specify a new location for the new report or --force override",
                output.unwrap_or_default()
            )));
        }
        Ok(())
    }
}
