//! Report Module
//!
//! The aggregated result of a run: one entry per repository holding the
//! sub-reports of its tasks, plus the version and parameter fingerprint every
//! repository task ran with. A report is read back on the next run to decide
//! which results can be reused.

pub(crate) mod error;
pub(crate) mod types;

pub mod api;
