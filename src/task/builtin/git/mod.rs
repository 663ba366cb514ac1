//! Git tasks - analyse repository metadata

pub mod author_counter;
pub mod project_dates;

use crate::repository::api::Repository;
use crate::task::error::{TaskError, TaskResult};

/// Open the repository behind a git task
pub(crate) fn open_repository(task: &str, repository: &Repository) -> TaskResult<gix::Repository> {
    gix::open(&repository.location).map_err(|e| {
        TaskError::execution(
            task,
            format!(
                "Failed to open repository '{}': {}",
                repository.location.display(),
                e
            ),
        )
    })
}
