//! Built-in Task Implementations
//!
//! Tasks that ship with the binary, grouped by kind.

pub mod api;
pub mod file;
pub mod git;
pub mod report;
