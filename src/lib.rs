pub mod app;
pub mod core;
pub mod manifest;
pub mod report;
pub mod repository;
pub mod runner;
pub mod scanner;
pub mod task;
