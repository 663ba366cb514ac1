//! Public API for the runners

pub use crate::runner::context::ProjectContext;
pub use crate::runner::error::{RunError, RunResult};
pub use crate::runner::file_pass::FilePassRunner;
pub use crate::runner::orchestrator::{Scrabber, REPORT_SECTION, REPOSITORY_SECTION};
pub use crate::runner::project::ProjectTaskRunner;
pub use crate::runner::report::ReportTaskRunner;
