//! ProjectMetrics - file and line counts of a repository
//!
//! Parameter (optional):
//!
//! ```toml
//! parameter = { max_line_length = 100 }
//! ```

use crate::repository::api::Repository;
use crate::scrab_task;
use crate::task::error::{TaskError, TaskResult};
use crate::task::traits::FileTask;
use crate::task::types::{GlobalArgs, SubReport};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;

const NAME: &str = "ProjectMetrics";
const DEFAULT_MAX_LINE_LENGTH: usize = 120;

scrab_task!(NAME, "1.0.0", File, ProjectMetrics::construct);

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct MetricsParameter {
    #[serde(default = "default_max_line_length")]
    max_line_length: usize,
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectMetrics {
    max_line_length: usize,
    files: usize,
    lines: usize,
    blank_lines: usize,
    long_lines: usize,
}

impl ProjectMetrics {
    pub fn new(max_line_length: usize) -> Self {
        Self {
            max_line_length,
            ..Default::default()
        }
    }

    pub fn construct(
        parameter: &Value,
        _global_args: &GlobalArgs,
    ) -> TaskResult<Box<dyn FileTask>> {
        let max_line_length = match parameter {
            Value::Null => DEFAULT_MAX_LINE_LENGTH,
            other => {
                let parameter: MetricsParameter = serde_json::from_value(other.clone())
                    .map_err(|e| TaskError::invalid_parameter(NAME, e.to_string()))?;
                if parameter.max_line_length == 0 {
                    return Err(TaskError::invalid_parameter(
                        NAME,
                        "max_line_length must be greater than zero",
                    ));
                }
                parameter.max_line_length
            }
        };
        Ok(Box::new(ProjectMetrics::new(max_line_length)))
    }
}

impl FileTask for ProjectMetrics {
    fn scrab(
        &mut self,
        _repository: &Repository,
        _filepath: &Path,
        content: &str,
    ) -> TaskResult<()> {
        self.files += 1;
        for line in content.lines() {
            self.lines += 1;
            if line.trim().is_empty() {
                self.blank_lines += 1;
            } else if line.chars().count() > self.max_line_length {
                self.long_lines += 1;
            }
        }
        Ok(())
    }

    fn report(&mut self) -> TaskResult<SubReport> {
        if self.files == 0 {
            return Ok(Value::Null);
        }
        Ok(json!({
            "files": self.files,
            "lines": self.lines,
            "blank_lines": self.blank_lines,
            "long_lines": self.long_lines,
        }))
    }
}
