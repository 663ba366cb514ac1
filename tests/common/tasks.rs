//! Mock tasks registered through explicit descriptors

use reposcrab::report::api::Report;
use reposcrab::repository::api::Repository;
use reposcrab::task::api::*;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Number of task instances a factory constructed
#[derive(Debug, Clone, Default)]
pub struct Constructed(Arc<AtomicUsize>);

impl Constructed {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn increment(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// File task counting lines containing `needle`, or all lines without one
struct LineCounter {
    needle: Option<String>,
    lines: usize,
}

impl FileTask for LineCounter {
    fn scrab(
        &mut self,
        _repository: &Repository,
        _filepath: &Path,
        content: &str,
    ) -> TaskResult<()> {
        self.lines += content
            .lines()
            .filter(|line| self.needle.as_deref().is_none_or(|needle| line.contains(needle)))
            .count();
        Ok(())
    }

    fn report(&mut self) -> TaskResult<SubReport> {
        Ok(json!({"lines": self.lines}))
    }
}

pub fn line_counter(
    name: &'static str,
    version: &str,
    constructed: &Constructed,
) -> TaskDescriptor {
    let constructed = constructed.clone();
    TaskDescriptor::new(
        name,
        version,
        TaskFactory::file(move |parameter, _| {
            constructed.increment();
            let needle = match parameter {
                Value::Null => None,
                Value::String(needle) => Some(needle.clone()),
                _ => return Err(TaskError::invalid_parameter(name, "expected a string")),
            };
            Ok(Box::new(LineCounter { needle, lines: 0 }) as Box<dyn FileTask>)
        }),
    )
    .unwrap()
}

/// Git task reporting whether a token was handed over
pub fn token_probe(name: &'static str, constructed: &Constructed) -> TaskDescriptor {
    struct Probe(bool);
    impl GitTask for Probe {
        fn scrab(&mut self, repository: &Repository) -> TaskResult<SubReport> {
            Ok(json!({"token": self.0, "location": repository.location.exists()}))
        }
    }
    let constructed = constructed.clone();
    TaskDescriptor::new(
        name,
        "1.0.0",
        TaskFactory::git(move |_, global_args| {
            constructed.increment();
            Ok(Box::new(Probe(global_args.github_token.is_some())) as Box<dyn GitTask>)
        }),
    )
    .unwrap()
}

/// Report task storing the number of projects at the top level
pub fn project_total(name: &'static str) -> TaskDescriptor {
    struct Total;
    impl ReportTask for Total {
        fn scrab(&mut self, mut report: Report) -> TaskResult<Report> {
            let total = report.projects.len();
            report.extra.insert("project_total".to_string(), Value::from(total));
            Ok(report)
        }
    }
    TaskDescriptor::new(
        name,
        "1.0.0",
        TaskFactory::report(|_, _| Ok(Box::new(Total) as Box<dyn ReportTask>)),
    )
    .unwrap()
}
