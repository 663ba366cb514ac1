//! Test modules for the task system
