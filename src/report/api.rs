//! Public API for the report module

pub use crate::report::error::{ReportError, ReportResult};
pub use crate::report::types::{Report, TaskRecord, TaskRecords};
