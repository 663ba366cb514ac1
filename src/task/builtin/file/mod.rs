//! File tasks - analyse the files of a working copy

pub mod language_detector;
pub mod project_metrics;
