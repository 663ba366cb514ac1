//! Static registration table for tasks
//!
//! Tasks register themselves with the `scrab_task!` macro; the registry
//! collects every submission when it loads.

use crate::task::error::TaskResult;
use crate::task::registry::{TaskDescriptor, TaskFactory};
use crate::task::traits::{FileTask, GitTask, ReportTask};
use crate::task::types::{GlobalArgs, TaskKind};
use serde_json::Value;
use std::sync::Arc;

/// Constructor function of a statically registered task
pub enum TaskConstructor {
    Git(fn(&Value, &GlobalArgs) -> TaskResult<Box<dyn GitTask>>),
    File(fn(&Value, &GlobalArgs) -> TaskResult<Box<dyn FileTask>>),
    Report(fn(&Value, &GlobalArgs) -> TaskResult<Box<dyn ReportTask>>),
}

/// Entry for a task in the static registration table
pub struct TaskRegistration {
    pub name: &'static str,
    pub version: &'static str,
    pub constructor: TaskConstructor,
}

impl TaskRegistration {
    pub fn kind(&self) -> TaskKind {
        match self.constructor {
            TaskConstructor::Git(_) => TaskKind::Git,
            TaskConstructor::File(_) => TaskKind::File,
            TaskConstructor::Report(_) => TaskKind::Report,
        }
    }

    /// Validated descriptor for this registration
    pub fn descriptor(&self) -> TaskResult<TaskDescriptor> {
        let factory = match self.constructor {
            TaskConstructor::Git(constructor) => TaskFactory::Git(Arc::new(constructor)),
            TaskConstructor::File(constructor) => TaskFactory::File(Arc::new(constructor)),
            TaskConstructor::Report(constructor) => TaskFactory::Report(Arc::new(constructor)),
        };
        TaskDescriptor::new(self.name, self.version, factory)
    }
}

inventory::collect!(TaskRegistration);

/// Register a task in the static registration table
///
/// ```ignore
/// scrab_task!("ProjectDates", "1.1.0", Git, ProjectDates::construct);
/// ```
#[macro_export]
macro_rules! scrab_task {
    ($name:expr, $version:expr, $kind:ident, $constructor:expr) => {
        inventory::submit! {
            $crate::task::api::TaskRegistration {
                name: $name,
                version: $version,
                constructor: $crate::task::api::TaskConstructor::$kind($constructor),
            }
        }
    };
}

/// All registrations submitted to the table
pub fn registrations() -> impl Iterator<Item = &'static TaskRegistration> {
    inventory::iter::<TaskRegistration>.into_iter()
}
