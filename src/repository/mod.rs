//! Repository Module
//!
//! Repositories to inventory and the managers that make their sources
//! available in the data directory. A git-svn mirror is a git repository
//! after acquisition, so git tasks run for git and svn repositories alike.

pub(crate) mod error;
pub(crate) mod manager;
pub(crate) mod types;

pub mod api;
