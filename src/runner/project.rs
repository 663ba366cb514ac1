//! Per-Repository Task Runner

use crate::repository::api::Repository;
use crate::runner::context::ProjectContext;
use crate::runner::error::{RunError, RunResult};
use crate::runner::file_pass::FilePassRunner;
use crate::task::api::{
    is_empty_report, MetaTask, Staleness, SubReportMap, TaskDescriptor, TaskKind,
};

/// Runs the repository tasks of one repository
///
/// Any failing task aborts the repository; no partial results survive.
pub struct ProjectTaskRunner<'a> {
    context: ProjectContext<'a>,
    repository: &'a Repository,
    meta_tasks: &'a [MetaTask],
}

impl<'a> ProjectTaskRunner<'a> {
    pub fn new(
        context: ProjectContext<'a>,
        repository: &'a Repository,
        meta_tasks: &'a [MetaTask],
    ) -> Self {
        Self {
            context,
            repository,
            meta_tasks,
        }
    }

    /// Sub-reports of the repository keyed by task name
    pub fn run(&self) -> RunResult<SubReportMap> {
        let mut git_tasks = Vec::new();
        let mut file_tasks = Vec::new();

        for meta_task in self.meta_tasks {
            let descriptor = self.context.registry.get(&meta_task.name)?;
            match descriptor.kind() {
                TaskKind::Git if self.repository.kind.has_git_metadata() => {
                    git_tasks.push((descriptor, meta_task))
                }
                TaskKind::Git => log::debug!(
                    "Skipping git task '{}' for {} repository '{}'",
                    descriptor.name(),
                    self.repository.kind,
                    self.repository.id()
                ),
                TaskKind::File => file_tasks.push((descriptor, meta_task)),
                TaskKind::Report => {}
            }
        }

        let mut results = SubReportMap::new();
        for (descriptor, meta_task) in git_tasks {
            self.run_git_task(descriptor, meta_task, &mut results)?;
        }

        if !file_tasks.is_empty() {
            let file_results =
                FilePassRunner::new(self.context, self.repository, file_tasks).run()?;
            results.extend(file_results);
        }

        Ok(results)
    }

    fn run_git_task(
        &self,
        descriptor: &TaskDescriptor,
        meta_task: &MetaTask,
        results: &mut SubReportMap,
    ) -> RunResult<()> {
        let name = descriptor.name();
        match self.context.staleness(descriptor, meta_task, self.repository) {
            Staleness::Fresh => {
                if let Some(previous) = self.context.previous(name) {
                    results.insert(name.to_string(), previous);
                }
            }
            Staleness::Stale(_) => {
                let failed = |e| RunError::task(self.repository.id(), name, None, e);
                let mut task = descriptor
                    .construct_git(&meta_task.parameter, self.context.global_args)
                    .map_err(failed)?;
                let report = task.scrab(self.repository).map_err(failed)?;
                if !is_empty_report(&report) {
                    results.insert(name.to_string(), report);
                }
            }
        }
        Ok(())
    }
}
