//! Public API for the manifest module

pub use crate::manifest::error::{ManifestError, ManifestResult};
pub use crate::manifest::types::{Manifest, RepositoryConfig};
