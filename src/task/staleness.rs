//! Staleness decision
//!
//! Decides whether a repository-scoped task has to run again or whether the
//! result of the previous run can be reused. Only the task version and the
//! parameter fingerprint are considered, never the repository content; a
//! repository whose sources changed forces every task to run.

use crate::core::fingerprint::Fingerprint;
use crate::report::api::TaskRecords;
use crate::task::registry::TaskDescriptor;
use crate::task::types::{MetaTask, SubReportMap};
use semver::Version;
use std::cmp::Ordering;
use std::fmt;

/// Why a task has to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    RepositoryUpdated,
    NoOldReport,
    NoTaskRecord,
    VersionChanged { recorded: String, declared: Version },
    ParameterChanged,
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaleReason::RepositoryUpdated => write!(f, "repository sources changed"),
            StaleReason::NoOldReport => write!(f, "no previous report for the repository"),
            StaleReason::NoTaskRecord => write!(f, "task was not part of the previous run"),
            StaleReason::VersionChanged { recorded, declared } => {
                write!(f, "version changed from {} to {}", recorded, declared)
            }
            StaleReason::ParameterChanged => write!(f, "parameter changed"),
        }
    }
}

/// Outcome of the staleness decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    /// The previous result may be reused unchanged
    Fresh,
    /// The task must run
    Stale(StaleReason),
}

impl Staleness {
    pub fn is_stale(&self) -> bool {
        matches!(self, Staleness::Stale(_))
    }
}

/// Decide whether `meta_task` must run for a repository
///
/// `old_data` is the previous run's report of this repository and
/// `old_tasks` the task records of that run. An empty previous report counts
/// as absent.
pub fn decide(
    descriptor: &TaskDescriptor,
    meta_task: &MetaTask,
    updated: bool,
    old_data: Option<&SubReportMap>,
    old_tasks: Option<&TaskRecords>,
) -> Staleness {
    if updated {
        return Staleness::Stale(StaleReason::RepositoryUpdated);
    }
    if old_data.map_or(true, |data| data.is_empty()) {
        return Staleness::Stale(StaleReason::NoOldReport);
    }
    let Some(record) = old_tasks.and_then(|tasks| tasks.get(descriptor.name())) else {
        return Staleness::Stale(StaleReason::NoTaskRecord);
    };

    // Compared by precedence, so build metadata does not count as a change
    let same_version = Version::parse(record.version.trim())
        .map(|recorded| recorded.cmp_precedence(descriptor.version()) == Ordering::Equal)
        .unwrap_or(false);
    if !same_version {
        return Staleness::Stale(StaleReason::VersionChanged {
            recorded: record.version.clone(),
            declared: descriptor.version().clone(),
        });
    }

    if Fingerprint::of(&meta_task.parameter) != record.parameter.as_str() {
        return Staleness::Stale(StaleReason::ParameterChanged);
    }

    Staleness::Fresh
}
