//! Report Task Runner
//!
//! Threads the aggregated report through the report tasks in manifest order.

use crate::report::api::Report;
use crate::runner::error::{RunError, RunResult};
use crate::task::api::{GlobalArgs, MetaTask, TaskRegistry};

pub struct ReportTaskRunner<'a> {
    registry: &'a TaskRegistry,
    global_args: &'a GlobalArgs,
    meta_tasks: &'a [MetaTask],
}

impl<'a> ReportTaskRunner<'a> {
    pub fn new(
        registry: &'a TaskRegistry,
        global_args: &'a GlobalArgs,
        meta_tasks: &'a [MetaTask],
    ) -> Self {
        Self {
            registry,
            global_args,
            meta_tasks,
        }
    }

    /// Run every report task; the first failure aborts the pipeline
    pub fn run(&self, mut report: Report) -> RunResult<Report> {
        for meta_task in self.meta_tasks {
            let descriptor = self.registry.get(&meta_task.name)?;
            log::info!("Running report task '{}'", descriptor.name());

            let snapshot = report.clone();
            let failed = |source| RunError::ReportTask {
                task: descriptor.name().to_string(),
                report: Box::new(snapshot),
                source,
            };

            let constructed = descriptor.construct_report(&meta_task.parameter, self.global_args);
            let mut task = match constructed {
                Ok(task) => task,
                Err(e) => return Err(failed(e)),
            };
            report = match task.scrab(report) {
                Ok(report) => report,
                Err(e) => return Err(failed(e)),
            };
        }
        Ok(report)
    }
}
