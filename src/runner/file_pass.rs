//! File Pass Runner
//!
//! Runs all file tasks of a repository over a single walk of its files.
//! Every file is read and decoded once and the same content is handed to
//! each task that has to run.

use crate::repository::api::Repository;
use crate::runner::context::ProjectContext;
use crate::runner::error::{RunError, RunResult};
use crate::scanner::api::{RepositoryScanner, ScanError};
use crate::task::api::{
    is_empty_report, FileTask, MetaTask, Staleness, SubReportMap, TaskDescriptor, TaskError,
};
use std::path::PathBuf;

/// Failure inside the walk, before the repository is attached
enum PassError {
    Scan(ScanError),
    Task {
        task: String,
        file: PathBuf,
        source: TaskError,
    },
}

impl From<ScanError> for PassError {
    fn from(e: ScanError) -> Self {
        PassError::Scan(e)
    }
}

impl PassError {
    fn into_run_error(self, repository: &Repository) -> RunError {
        match self {
            PassError::Scan(source) => RunError::Scan {
                repository: repository.id().to_string(),
                source,
            },
            PassError::Task { task, file, source } => {
                RunError::task(repository.id(), &task, Some(&file), source)
            }
        }
    }
}

pub struct FilePassRunner<'a> {
    context: ProjectContext<'a>,
    repository: &'a Repository,
    tasks: Vec<(&'a TaskDescriptor, &'a MetaTask)>,
}

impl<'a> FilePassRunner<'a> {
    pub fn new(
        context: ProjectContext<'a>,
        repository: &'a Repository,
        tasks: Vec<(&'a TaskDescriptor, &'a MetaTask)>,
    ) -> Self {
        Self {
            context,
            repository,
            tasks,
        }
    }

    /// Results of all file tasks, reused and computed, keyed by task name
    pub fn run(&self) -> RunResult<SubReportMap> {
        let mut results = SubReportMap::new();
        let mut live: Vec<(&str, Box<dyn FileTask>)> = Vec::new();

        for (descriptor, meta_task) in &self.tasks {
            match self.context.staleness(descriptor, meta_task, self.repository) {
                Staleness::Fresh => {
                    if let Some(previous) = self.context.previous(descriptor.name()) {
                        results.insert(descriptor.name().to_string(), previous);
                    }
                }
                Staleness::Stale(_) => {
                    let task = descriptor
                        .construct_file(&meta_task.parameter, self.context.global_args)
                        .map_err(|e| {
                            RunError::task(self.repository.id(), descriptor.name(), None, e)
                        })?;
                    live.push((descriptor.name(), task));
                }
            }
        }

        if live.is_empty() {
            return Ok(results);
        }

        let repository = self.repository;
        let scanner = RepositoryScanner::new(&repository.location);
        let visited = scanner
            .scan(|path, content| -> Result<(), PassError> {
                for (name, task) in live.iter_mut() {
                    task.scrab(repository, path, content)
                        .map_err(|source| PassError::Task {
                            task: name.to_string(),
                            file: path.to_path_buf(),
                            source,
                        })?;
                }
                Ok(())
            })
            .map_err(|e| e.into_run_error(repository))?;
        log::debug!(
            "File pass over '{}' visited {} files for {} tasks",
            repository.id(),
            visited,
            live.len()
        );

        for (name, mut task) in live {
            let report = task
                .report()
                .map_err(|e| RunError::task(repository.id(), name, None, e))?;
            if !is_empty_report(&report) {
                results.insert(name.to_string(), report);
            }
        }

        Ok(results)
    }
}
