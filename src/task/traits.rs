//! Task capability traits
//!
//! A task implements exactly one of the three traits; which one is recorded on
//! its registration and decides how the runners drive it.

use crate::report::api::Report;
use crate::repository::api::Repository;
use crate::task::error::TaskResult;
use crate::task::types::SubReport;
use std::path::Path;

/// Task that analyses the version control metadata of a repository
pub trait GitTask {
    /// Analyse the repository and return everything that was found
    fn scrab(&mut self, repository: &Repository) -> TaskResult<SubReport>;
}

/// Task that analyses the files of a repository
///
/// All file tasks of a repository share one pass over its files: `scrab` is
/// called once per file with the decoded content and should only accumulate
/// state, `report` is called once after the last file.
pub trait FileTask {
    fn scrab(&mut self, repository: &Repository, filepath: &Path, content: &str)
        -> TaskResult<()>;

    /// Final result of the pass; an empty value means nothing was found
    fn report(&mut self) -> TaskResult<SubReport>;
}

/// Task that reads and rewrites the aggregated report
pub trait ReportTask {
    fn scrab(&mut self, report: Report) -> TaskResult<Report>;
}
