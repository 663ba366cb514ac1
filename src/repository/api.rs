//! Public API for the repository module

pub use crate::repository::error::{AcquisitionError, AcquisitionResult};
pub use crate::repository::manager::{
    manager_for, Acquirer, ArchiveManager, CommandAcquirer, GitManager, RepositoryManager,
    SvnManager,
};
pub use crate::repository::types::{default_location, Repository, RepositoryKind};
