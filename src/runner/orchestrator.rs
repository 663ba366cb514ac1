//! Orchestrator
//!
//! Runs a manifest end to end: checks it against the registry, acquires and
//! analyses each repository in manifest order, records the task versions and
//! parameters the results were computed with, and finally runs the report
//! tasks.

use crate::core::fingerprint::Fingerprint;
use crate::manifest::api::Manifest;
use crate::report::api::{Report, TaskRecord};
use crate::repository::api::{Acquirer, CommandAcquirer};
use crate::runner::context::ProjectContext;
use crate::runner::error::{RunError, RunResult};
use crate::runner::project::ProjectTaskRunner;
use crate::runner::report::ReportTaskRunner;
use crate::task::api::{GlobalArgs, MetaTask, TaskError, TaskKind, TaskRegistry};
use serde_json::Value;

/// Manifest section holding git and file tasks
pub const REPOSITORY_SECTION: &str = "repository_tasks";

/// Manifest section holding report tasks
pub const REPORT_SECTION: &str = "report_tasks";

pub struct Scrabber<'a> {
    registry: &'a TaskRegistry,
    manifest: &'a Manifest,
    global_args: GlobalArgs,
    old_report: Option<Report>,
    acquirer: Box<dyn Acquirer + 'a>,
}

impl<'a> Scrabber<'a> {
    pub fn new(
        registry: &'a TaskRegistry,
        manifest: &'a Manifest,
        global_args: GlobalArgs,
    ) -> Self {
        Self {
            registry,
            manifest,
            global_args,
            old_report: None,
            acquirer: Box::new(CommandAcquirer::default()),
        }
    }

    /// Report of a previous run whose results may be reused
    pub fn with_old_report(mut self, old_report: Option<Report>) -> Self {
        self.old_report = old_report;
        self
    }

    pub fn with_acquirer(mut self, acquirer: impl Acquirer + 'a) -> Self {
        self.acquirer = Box::new(acquirer);
        self
    }

    /// Check that every task exists and is listed in the section that runs it
    pub fn resolve(&self) -> RunResult<()> {
        check_section(self.registry, &self.manifest.repository_tasks, REPOSITORY_SECTION, |kind| {
            kind.is_repository_scoped()
        })?;
        check_section(self.registry, &self.manifest.report_tasks, REPORT_SECTION, |kind| {
            kind == TaskKind::Report
        })?;
        Ok(())
    }

    pub fn run(mut self) -> RunResult<Report> {
        self.resolve()?;

        let mut report = Report::new();
        let repositories = self.manifest.repositories(&self.global_args.data_dir);
        let total = repositories.len();

        for (index, mut repository) in repositories.into_iter().enumerate() {
            log::info!(
                "Processing repository '{}' ({}/{})",
                repository.id(),
                index + 1,
                total
            );
            self.acquirer
                .acquire(&mut repository)
                .map_err(|source| RunError::Acquisition {
                    repository: repository.id().to_string(),
                    source,
                })?;

            let old_data = self
                .old_report
                .as_ref()
                .and_then(|old| old.project_data(repository.id()));
            let old_tasks = self.old_report.as_ref().map(|old| &old.tasks);
            let context = ProjectContext::new(self.registry, &self.global_args)
                .with_old_report(old_data, old_tasks);

            let results =
                ProjectTaskRunner::new(context, &repository, &self.manifest.repository_tasks)
                    .run()?;
            report.insert_project(repository.id(), Value::Object(results));
        }

        for meta_task in &self.manifest.repository_tasks {
            let descriptor = self.registry.get(&meta_task.name)?;
            report.tasks.insert(
                descriptor.name().to_string(),
                TaskRecord::new(descriptor.version(), &Fingerprint::of(&meta_task.parameter)),
            );
        }

        ReportTaskRunner::new(self.registry, &self.global_args, &self.manifest.report_tasks)
            .run(report)
    }
}

fn check_section(
    registry: &TaskRegistry,
    meta_tasks: &[MetaTask],
    section: &'static str,
    allowed: impl Fn(TaskKind) -> bool,
) -> RunResult<()> {
    for meta_task in meta_tasks {
        let descriptor = registry.get(&meta_task.name)?;
        if !allowed(descriptor.kind()) {
            return Err(TaskError::WrongSection {
                name: descriptor.name().to_string(),
                kind: descriptor.kind(),
                section,
            }
            .into());
        }
    }
    Ok(())
}
