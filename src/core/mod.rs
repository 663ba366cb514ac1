//! Core services shared by every subsystem

pub mod error_handling;
pub mod fingerprint;
pub mod logging;
pub mod version;
