//! TOML configuration file loading
//!
//! The configuration file uses the long option names as keys:
//!
//! ```toml
//! tasks = "/etc/reposcrab/tasks.toml"
//! data = "/var/lib/reposcrab"
//! update = true
//! log-level = "debug"
//! ```

use super::args::{disables_file_logging, Args};
use super::validation::ValidationError;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory below the user configuration directory holding the config file
pub const CONFIG_DIR: &str = "reposcrab";

/// Name of the default configuration file
pub const CONFIG_FILE: &str = "reposcrab.toml";

/// Default configuration file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

impl Args {
    /// Apply the configuration file to the arguments
    ///
    /// A file named with `--config-file` must exist; the default file is only
    /// read if present. Returns the path of the file that was applied.
    pub fn load_config(&mut self) -> Result<Option<PathBuf>, ValidationError> {
        let path = match &self.config_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(ValidationError::new(&format!(
                        "The specified configuration file does not exist: {}",
                        path.display()
                    )));
                }
                path.clone()
            }
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(None),
            },
        };

        let config = read_config(&path)?;
        self.apply_toml_values(&config).map_err(|e| {
            ValidationError::new(&format!(
                "Error in configuration file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(path))
    }

    /// Apply configuration values for every option not set on the command line
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> Result<(), ValidationError> {
        for key in config.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                return Err(ValidationError::new(&format!("Unknown key '{}'", key)));
            }
        }

        apply_path(config, "tasks", &mut self.tasks)?;
        apply_path(config, "report", &mut self.report)?;
        apply_path(config, "output", &mut self.output)?;
        apply_path(config, "data", &mut self.data)?;
        apply_flag(config, "update", &mut self.update)?;
        apply_flag(config, "print", &mut self.print)?;
        apply_flag(config, "force", &mut self.force)?;
        apply_string(config, "github-token", &mut self.github_token)?;
        apply_string(config, "log-level", &mut self.log_level)?;
        apply_string(config, "log-format", &mut self.log_format)?;

        if self.log_file.is_none() {
            if let Some(log_file) = string_value(config, "log-file")? {
                if !disables_file_logging(log_file) {
                    self.log_file = Some(PathBuf::from(log_file));
                }
            }
        }

        if !self.color && !self.no_color {
            if let Some(value) = config.get("color") {
                let color = value
                    .as_bool()
                    .ok_or_else(|| ValidationError::new("Key 'color' must be a boolean"))?;
                self.no_color = !color;
            }
        }

        Ok(())
    }
}

const KNOWN_KEYS: &[&str] = &[
    "tasks",
    "report",
    "output",
    "data",
    "update",
    "print",
    "force",
    "github-token",
    "log-level",
    "log-format",
    "log-file",
    "color",
];

fn read_config(path: &Path) -> Result<toml::Table, ValidationError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ValidationError::new(&format!(
            "Error reading configuration file {}: {}",
            path.display(),
            e
        ))
    })?;
    toml::from_str::<toml::Table>(&contents).map_err(|e| {
        ValidationError::new(&format!(
            "Error parsing configuration file {}: {}",
            path.display(),
            e
        ))
    })
}

fn string_value<'a>(
    config: &'a toml::Table,
    key: &str,
) -> Result<Option<&'a str>, ValidationError> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| ValidationError::new(&format!("Key '{}' must be a string", key))),
    }
}

fn apply_string(
    config: &toml::Table,
    key: &str,
    target: &mut Option<String>,
) -> Result<(), ValidationError> {
    if target.is_none() {
        *target = string_value(config, key)?.map(str::to_string);
    }
    Ok(())
}

fn apply_path(
    config: &toml::Table,
    key: &str,
    target: &mut Option<PathBuf>,
) -> Result<(), ValidationError> {
    if target.is_none() {
        *target = string_value(config, key)?.map(PathBuf::from);
    }
    Ok(())
}

fn apply_flag(config: &toml::Table, key: &str, target: &mut bool) -> Result<(), ValidationError> {
    if let Some(value) = config.get(key) {
        let enabled = value
            .as_bool()
            .ok_or_else(|| ValidationError::new(&format!("Key '{}' must be a boolean", key)))?;
        *target |= enabled;
    }
    Ok(())
}
