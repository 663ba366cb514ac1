//! Mock tasks and fixtures for runner tests

use crate::report::api::Report;
use crate::repository::api::{AcquisitionResult, Acquirer, Repository, RepositoryKind};
use crate::task::api::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Call counters shared between a test and the tasks it registers
#[derive(Debug, Clone, Default)]
pub struct Counters {
    pub constructed: Arc<AtomicUsize>,
    pub scrabbed: Arc<AtomicUsize>,
    pub reported: Arc<AtomicUsize>,
}

impl Counters {
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::SeqCst)
    }

    pub fn scrabbed(&self) -> usize {
        self.scrabbed.load(Ordering::SeqCst)
    }

    pub fn reported(&self) -> usize {
        self.reported.load(Ordering::SeqCst)
    }
}

/// File task counting the files and bytes it saw
pub struct CountingFileTask {
    counters: Counters,
    files: usize,
    bytes: usize,
    seen: Option<Arc<Mutex<Vec<String>>>>,
}

impl FileTask for CountingFileTask {
    fn scrab(
        &mut self,
        _repository: &Repository,
        filepath: &Path,
        content: &str,
    ) -> TaskResult<()> {
        self.counters.scrabbed.fetch_add(1, Ordering::SeqCst);
        self.files += 1;
        self.bytes += content.len();
        if let Some(seen) = &self.seen {
            let name = filepath.file_name().unwrap().to_string_lossy().to_string();
            seen.lock().unwrap().push(format!("{}:{}", name, content));
        }
        Ok(())
    }

    fn report(&mut self) -> TaskResult<SubReport> {
        self.counters.reported.fetch_add(1, Ordering::SeqCst);
        Ok(json!({"files": self.files, "bytes": self.bytes}))
    }
}

pub fn counting_file_task(name: &str, version: &str, counters: &Counters) -> TaskDescriptor {
    recording_file_task(name, version, counters, None)
}

/// Registry holding a single counting file task named "Metrics"
pub fn metrics_registry(counters: &Counters) -> TaskRegistry {
    TaskRegistry::from_descriptors([counting_file_task("Metrics", "1.0.0", counters)]).unwrap()
}

pub fn recording_file_task(
    name: &str,
    version: &str,
    counters: &Counters,
    seen: Option<Arc<Mutex<Vec<String>>>>,
) -> TaskDescriptor {
    let counters = counters.clone();
    TaskDescriptor::new(
        name,
        version,
        TaskFactory::file(move |_, _| {
            counters.constructed.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(CountingFileTask {
                counters: counters.clone(),
                files: 0,
                bytes: 0,
                seen: seen.clone(),
            }) as Box<dyn FileTask>)
        }),
    )
    .unwrap()
}

/// File task that never reports anything
pub fn silent_file_task(name: &str) -> TaskDescriptor {
    struct Silent;
    impl FileTask for Silent {
        fn scrab(&mut self, _: &Repository, _: &Path, _: &str) -> TaskResult<()> {
            Ok(())
        }
        fn report(&mut self) -> TaskResult<SubReport> {
            Ok(json!({}))
        }
    }
    TaskDescriptor::new(
        name,
        "1.0.0",
        TaskFactory::file(|_, _| Ok(Box::new(Silent) as Box<dyn FileTask>)),
    )
    .unwrap()
}

/// File task failing on the file with the given name
pub fn failing_file_task(name: &'static str, bad_file: &'static str) -> TaskDescriptor {
    struct Failing {
        name: &'static str,
        bad_file: &'static str,
    }
    impl FileTask for Failing {
        fn scrab(&mut self, _: &Repository, filepath: &Path, _: &str) -> TaskResult<()> {
            if filepath.file_name().is_some_and(|n| n == self.bad_file) {
                return Err(TaskError::execution(self.name, "cannot handle this file"));
            }
            Ok(())
        }
        fn report(&mut self) -> TaskResult<SubReport> {
            Ok(json!({"ok": true}))
        }
    }
    TaskDescriptor::new(
        name,
        "1.0.0",
        TaskFactory::file(move |_, _| {
            Ok(Box::new(Failing { name, bad_file }) as Box<dyn FileTask>)
        }),
    )
    .unwrap()
}

/// File task rejecting any parameter other than null
pub fn strict_file_task(name: &'static str) -> TaskDescriptor {
    TaskDescriptor::new(
        name,
        "1.0.0",
        TaskFactory::file(move |parameter, _| {
            if !parameter.is_null() {
                return Err(TaskError::invalid_parameter(name, "takes no parameter"));
            }
            Ok(Box::new(CountingFileTask {
                counters: Counters::default(),
                files: 0,
                bytes: 0,
                seen: None,
            }) as Box<dyn FileTask>)
        }),
    )
    .unwrap()
}

/// Git task returning a fixed sub-report
pub fn counting_git_task(
    name: &str,
    version: &str,
    counters: &Counters,
    result: Value,
) -> TaskDescriptor {
    struct Fixed {
        counters: Counters,
        result: Value,
    }
    impl GitTask for Fixed {
        fn scrab(&mut self, _: &Repository) -> TaskResult<SubReport> {
            self.counters.scrabbed.fetch_add(1, Ordering::SeqCst);
            Ok(self.result.clone())
        }
    }
    let counters = counters.clone();
    TaskDescriptor::new(
        name,
        version,
        TaskFactory::git(move |_, _| {
            counters.constructed.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(Fixed {
                counters: counters.clone(),
                result: result.clone(),
            }) as Box<dyn GitTask>)
        }),
    )
    .unwrap()
}

pub fn failing_git_task(name: &'static str) -> TaskDescriptor {
    struct Failing(&'static str);
    impl GitTask for Failing {
        fn scrab(&mut self, _: &Repository) -> TaskResult<SubReport> {
            Err(TaskError::execution(self.0, "no history"))
        }
    }
    TaskDescriptor::new(
        name,
        "1.0.0",
        TaskFactory::git(move |_, _| Ok(Box::new(Failing(name)) as Box<dyn GitTask>)),
    )
    .unwrap()
}

/// Report task appending its tag to the top-level `order` list
pub fn tagging_report_task(name: &'static str) -> TaskDescriptor {
    struct Tagging(&'static str);
    impl ReportTask for Tagging {
        fn scrab(&mut self, mut report: Report) -> TaskResult<Report> {
            let order = report
                .extra
                .entry("order")
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(items) = order {
                items.push(Value::from(self.0));
            }
            Ok(report)
        }
    }
    TaskDescriptor::new(
        name,
        "1.0.0",
        TaskFactory::report(move |_, _| Ok(Box::new(Tagging(name)) as Box<dyn ReportTask>)),
    )
    .unwrap()
}

pub fn failing_report_task(name: &'static str) -> TaskDescriptor {
    struct Failing(&'static str);
    impl ReportTask for Failing {
        fn scrab(&mut self, _report: Report) -> TaskResult<Report> {
            Err(TaskError::execution(self.0, "report is inconsistent"))
        }
    }
    TaskDescriptor::new(
        name,
        "1.0.0",
        TaskFactory::report(move |_, _| Ok(Box::new(Failing(name)) as Box<dyn ReportTask>)),
    )
    .unwrap()
}

/// Acquirer that leaves the sources alone and marks chosen repositories updated
#[derive(Debug, Clone, Default)]
pub struct StaticAcquirer {
    pub updated: Vec<String>,
    pub acquired: Arc<Mutex<Vec<String>>>,
}

impl Acquirer for StaticAcquirer {
    fn acquire(&mut self, repository: &mut Repository) -> AcquisitionResult<()> {
        self.acquired.lock().unwrap().push(repository.id().to_string());
        repository.updated = self.updated.iter().any(|id| id == repository.id());
        Ok(())
    }
}

/// Repository with `a.txt`, `b.bin` and `.git/config`
pub fn sample_repository() -> (TempDir, Repository) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
    fs::write(dir.path().join("b.bin"), [0x00u8, 0xff, 0x41]).unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git/config"), "[core]\n").unwrap();

    let repository = Repository::new(RepositoryKind::Archive, "local/sample", dir.path());
    (dir, repository)
}
