//! Per-repository run context

use crate::report::api::TaskRecords;
use crate::repository::api::Repository;
use crate::task::api::{
    decide, GlobalArgs, MetaTask, Staleness, SubReport, SubReportMap, TaskDescriptor,
    TaskRegistry,
};

/// Everything the runners of one repository share
#[derive(Clone, Copy)]
pub struct ProjectContext<'a> {
    pub registry: &'a TaskRegistry,
    pub global_args: &'a GlobalArgs,
    /// The repository's entry in the previous report
    pub old_data: Option<&'a SubReportMap>,
    /// Task records of the previous report
    pub old_tasks: Option<&'a TaskRecords>,
}

impl<'a> ProjectContext<'a> {
    pub fn new(registry: &'a TaskRegistry, global_args: &'a GlobalArgs) -> Self {
        Self {
            registry,
            global_args,
            old_data: None,
            old_tasks: None,
        }
    }

    pub fn with_old_report(
        mut self,
        old_data: Option<&'a SubReportMap>,
        old_tasks: Option<&'a TaskRecords>,
    ) -> Self {
        self.old_data = old_data;
        self.old_tasks = old_tasks;
        self
    }

    pub fn staleness(
        &self,
        descriptor: &TaskDescriptor,
        meta_task: &MetaTask,
        repository: &Repository,
    ) -> Staleness {
        let staleness = decide(
            descriptor,
            meta_task,
            repository.updated,
            self.old_data,
            self.old_tasks,
        );
        if let Staleness::Stale(reason) = &staleness {
            log::info!(
                "Running '{}' for '{}': {}",
                descriptor.name(),
                repository.id(),
                reason
            );
        } else {
            log::debug!(
                "Reusing result of '{}' for '{}'",
                descriptor.name(),
                repository.id()
            );
        }
        staleness
    }

    /// Previous sub-report of a task, if one was stored
    pub fn previous(&self, task: &str) -> Option<SubReport> {
        self.old_data.and_then(|data| data.get(task)).cloned()
    }
}
