//! Task Runners
//!
//! Drive the tasks of a run. The [`Scrabber`](api::Scrabber) processes the
//! repositories one after another: for each it decides per task whether the
//! previous result can be reused, runs the git tasks, shares a single pass
//! over the files between all file tasks, and stores the merged results.
//! Once every repository is done the report tasks run over the aggregated
//! report in manifest order.

pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod file_pass;
pub(crate) mod orchestrator;
pub(crate) mod project;
pub(crate) mod report;

pub mod api;

#[cfg(test)]
mod tests;
