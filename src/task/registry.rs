//! Task Registry
//!
//! Catalog of every known task, keyed by its unique name. Each entry records
//! the declared version, the kind and the constructor of the task.

use crate::task::builtin::api::{registrations, TaskRegistration};
use crate::task::error::{TaskError, TaskResult};
use crate::task::traits::{FileTask, GitTask, ReportTask};
use crate::task::types::{GlobalArgs, TaskKind};
use semver::Version;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Constructor of a git task
pub type GitTaskFactory =
    Arc<dyn Fn(&Value, &GlobalArgs) -> TaskResult<Box<dyn GitTask>> + Send + Sync>;

/// Constructor of a file task
pub type FileTaskFactory =
    Arc<dyn Fn(&Value, &GlobalArgs) -> TaskResult<Box<dyn FileTask>> + Send + Sync>;

/// Constructor of a report task
pub type ReportTaskFactory =
    Arc<dyn Fn(&Value, &GlobalArgs) -> TaskResult<Box<dyn ReportTask>> + Send + Sync>;

/// Constructor of a task, tagged with the kind it produces
#[derive(Clone)]
pub enum TaskFactory {
    Git(GitTaskFactory),
    File(FileTaskFactory),
    Report(ReportTaskFactory),
}

impl TaskFactory {
    pub fn git<F>(factory: F) -> Self
    where
        F: Fn(&Value, &GlobalArgs) -> TaskResult<Box<dyn GitTask>> + Send + Sync + 'static,
    {
        TaskFactory::Git(Arc::new(factory))
    }

    pub fn file<F>(factory: F) -> Self
    where
        F: Fn(&Value, &GlobalArgs) -> TaskResult<Box<dyn FileTask>> + Send + Sync + 'static,
    {
        TaskFactory::File(Arc::new(factory))
    }

    pub fn report<F>(factory: F) -> Self
    where
        F: Fn(&Value, &GlobalArgs) -> TaskResult<Box<dyn ReportTask>> + Send + Sync + 'static,
    {
        TaskFactory::Report(Arc::new(factory))
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            TaskFactory::Git(_) => TaskKind::Git,
            TaskFactory::File(_) => TaskKind::File,
            TaskFactory::Report(_) => TaskKind::Report,
        }
    }
}

impl fmt::Debug for TaskFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskFactory::{}", self.kind())
    }
}

/// Immutable description of a registered task
#[derive(Debug, Clone)]
pub struct TaskDescriptor {
    name: String,
    version: Version,
    factory: TaskFactory,
}

impl TaskDescriptor {
    /// Create a descriptor, validating name and version
    pub fn new(name: impl Into<String>, version: &str, factory: TaskFactory) -> TaskResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TaskError::MissingName);
        }
        if version.trim().is_empty() {
            return Err(TaskError::MissingVersion { name });
        }
        let version = Version::parse(version.trim()).map_err(|source| TaskError::InvalidVersion {
            name: name.clone(),
            version: version.to_string(),
            source,
        })?;

        Ok(Self {
            name,
            version,
            factory,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn kind(&self) -> TaskKind {
        self.factory.kind()
    }

    pub fn construct_git(
        &self,
        parameter: &Value,
        global_args: &GlobalArgs,
    ) -> TaskResult<Box<dyn GitTask>> {
        match &self.factory {
            TaskFactory::Git(factory) => factory(parameter, global_args),
            _ => Err(self.kind_mismatch(TaskKind::Git)),
        }
    }

    pub fn construct_file(
        &self,
        parameter: &Value,
        global_args: &GlobalArgs,
    ) -> TaskResult<Box<dyn FileTask>> {
        match &self.factory {
            TaskFactory::File(factory) => factory(parameter, global_args),
            _ => Err(self.kind_mismatch(TaskKind::File)),
        }
    }

    pub fn construct_report(
        &self,
        parameter: &Value,
        global_args: &GlobalArgs,
    ) -> TaskResult<Box<dyn ReportTask>> {
        match &self.factory {
            TaskFactory::Report(factory) => factory(parameter, global_args),
            _ => Err(self.kind_mismatch(TaskKind::Report)),
        }
    }

    fn kind_mismatch(&self, expected: TaskKind) -> TaskError {
        TaskError::KindMismatch {
            name: self.name.clone(),
            expected,
            actual: self.kind(),
        }
    }
}

/// Registry of all tasks available to a run
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, TaskDescriptor>,
}

impl TaskRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every task submitted to the static registration table
    ///
    /// Registrations are loaded namespace by namespace (git, report, file);
    /// the order only decides which error surfaces first.
    pub fn load() -> TaskResult<Self> {
        let all: Vec<&'static TaskRegistration> = registrations().collect();
        let mut registry = Self::new();

        for kind in [TaskKind::Git, TaskKind::Report, TaskKind::File] {
            for registration in all.iter().filter(|r| r.kind() == kind) {
                registry.register(registration.descriptor()?)?;
            }
            log::debug!(
                "Loaded {} {} tasks",
                all.iter().filter(|r| r.kind() == kind).count(),
                kind
            );
        }

        Ok(registry)
    }

    /// Build a registry from explicit descriptors
    pub fn from_descriptors<I>(descriptors: I) -> TaskResult<Self>
    where
        I: IntoIterator<Item = TaskDescriptor>,
    {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Register a task; names must be unique across all kinds
    pub fn register(&mut self, descriptor: TaskDescriptor) -> TaskResult<()> {
        if self.tasks.contains_key(descriptor.name()) {
            return Err(TaskError::DuplicateName {
                name: descriptor.name().to_string(),
            });
        }

        log::trace!(
            "Registered {} task '{}' v{}",
            descriptor.kind(),
            descriptor.name(),
            descriptor.version()
        );
        self.tasks.insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Get a task by name
    pub fn get(&self, name: &str) -> TaskResult<&TaskDescriptor> {
        self.tasks.get(name).ok_or_else(|| TaskError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All descriptors sorted by name
    pub fn descriptors(&self) -> Vec<&TaskDescriptor> {
        let mut descriptors: Vec<&TaskDescriptor> = self.tasks.values().collect();
        descriptors.sort_by(|a, b| a.name().cmp(b.name()));
        descriptors
    }
}
