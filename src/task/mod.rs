//! Task System Module
//!
//! Analysis tasks come in three kinds: `git` tasks look at repository
//! metadata, `file` tasks look at every file of a working copy and `report`
//! tasks post-process the aggregated report. Each task is registered once,
//! under a unique name and a semantic version, in a static registration table.

// Internal modules - all access should go through api module
pub(crate) mod builtin;
pub(crate) mod error;
pub(crate) mod registry;
pub(crate) mod staleness;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the task system
pub mod api;

#[cfg(test)]
mod tests;
