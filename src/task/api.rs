//! Public API for the task system

// Registry and descriptors
pub use crate::task::registry::{
    FileTaskFactory, GitTaskFactory, ReportTaskFactory, TaskDescriptor, TaskFactory,
    TaskRegistry,
};

// Static registration table
pub use crate::task::builtin::api::{TaskConstructor, TaskRegistration};

// Error handling
pub use crate::task::error::{TaskError, TaskResult};

// Task capabilities
pub use crate::task::traits::{FileTask, GitTask, ReportTask};

// Data model
pub use crate::task::types::{
    is_empty_report, GlobalArgs, MetaTask, SubReport, SubReportMap, TaskKind,
};

// Staleness decision
pub use crate::task::staleness::{decide, StaleReason, Staleness};
