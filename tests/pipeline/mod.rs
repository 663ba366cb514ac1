//! Pipeline Integration Test Modules

pub mod incremental;
pub mod manifest_file;
pub mod persistence;
