//! Command line interface

pub mod api;
pub mod args;
pub mod config;
pub mod display;
pub mod validation;

#[cfg(test)]
mod tests;
