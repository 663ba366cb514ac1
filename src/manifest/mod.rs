//! Task Manifest
//!
//! The manifest lists the tasks of a run and the repositories they run for.
//! It is TOML, or JSON when the file name ends in `.json`:
//!
//! ```toml
//! [[repository_tasks]]
//! name = "ProjectMetrics"
//! parameter = { max_line_length = 120 }
//!
//! [[report_tasks]]
//! name = "NumericID"
//!
//! [[repositories]]
//! kind = "git"
//! url = "https://github.com/example/project.git"
//! ```

pub(crate) mod error;
pub(crate) mod types;

pub mod api;
