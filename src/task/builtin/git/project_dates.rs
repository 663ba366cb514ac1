//! ProjectDates - first and last commit date of a repository
//!
//! ```json
//! "ProjectDates": {
//!   "first_change": "1998-12-21T10:52:45+00:00",
//!   "last_change": "2017-08-09T13:37:06+10:00"
//! }
//! ```

use crate::repository::api::Repository;
use crate::scrab_task;
use crate::task::error::{TaskError, TaskResult};
use crate::task::traits::GitTask;
use crate::task::types::{GlobalArgs, SubReport};
use chrono::{DateTime, FixedOffset};
use serde_json::{json, Value};

const NAME: &str = "ProjectDates";

scrab_task!(NAME, "1.1.0", Git, ProjectDates::construct);

/// Commit time as seconds since epoch plus the committer's UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CommitTime {
    pub seconds: i64,
    pub offset: i32,
}

pub struct ProjectDates;

impl ProjectDates {
    pub fn construct(
        _parameter: &Value,
        _global_args: &GlobalArgs,
    ) -> TaskResult<Box<dyn GitTask>> {
        Ok(Box::new(ProjectDates))
    }

    fn commit_times(repository: &Repository) -> TaskResult<Vec<CommitTime>> {
        let repo = super::open_repository(NAME, repository)?;
        let failed = |what: &str, e: &dyn std::fmt::Display| {
            TaskError::execution(NAME, format!("Failed to {}: {}", what, e))
        };

        let head = repo
            .head_commit()
            .map_err(|e| failed("resolve HEAD commit", &e))?;
        let walk = repo
            .rev_walk([head.id])
            .all()
            .map_err(|e| failed("walk the commit history", &e))?;

        let mut times = Vec::new();
        for info in walk {
            let info = info.map_err(|e| failed("walk the commit history", &e))?;
            let commit = info.object().map_err(|e| failed("load commit", &e))?;
            let time = commit.time().map_err(|e| failed("read commit time", &e))?;
            times.push(CommitTime {
                seconds: time.seconds,
                offset: time.offset,
            });
        }
        Ok(times)
    }
}

/// Render a commit time in ISO 8601 with the committer's offset
pub(crate) fn format_commit_time(time: CommitTime) -> Option<String> {
    let offset = FixedOffset::east_opt(time.offset)?;
    let utc = DateTime::from_timestamp(time.seconds, 0)?;
    Some(utc.with_timezone(&offset).to_rfc3339())
}

/// Earliest and latest commit of the history as a sub-report
pub(crate) fn dates_report(times: &[CommitTime]) -> SubReport {
    let first = times.iter().min_by_key(|t| t.seconds).copied();
    let last = times.iter().max_by_key(|t| t.seconds).copied();

    match (
        first.and_then(format_commit_time),
        last.and_then(format_commit_time),
    ) {
        (Some(first_change), Some(last_change)) => json!({
            "first_change": first_change,
            "last_change": last_change,
        }),
        _ => Value::Null,
    }
}

impl GitTask for ProjectDates {
    fn scrab(&mut self, repository: &Repository) -> TaskResult<SubReport> {
        let times = Self::commit_times(repository)?;
        log::debug!(
            "{}: {} commits in '{}'",
            NAME,
            times.len(),
            repository.location.display()
        );
        Ok(dates_report(&times))
    }
}
