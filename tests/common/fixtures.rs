//! Data directory and task file fixtures

use reposcrab::repository::api::{AcquisitionResult, Acquirer, Repository};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Data directory holding extracted repositories
pub struct DataDir {
    pub dir: TempDir,
}

impl DataDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a repository directory with the given files
    pub fn repository(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let root = self.path().join(name);
        for (file, content) in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        fs::create_dir_all(&root).unwrap();
        root
    }

    /// Write a file below the data directory and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

/// Acquirer that marks chosen repositories as updated
#[derive(Debug, Clone, Default)]
pub struct StaticAcquirer {
    pub updated: Vec<String>,
    pub acquired: Arc<Mutex<Vec<String>>>,
}

impl StaticAcquirer {
    pub fn updating(ids: &[&str]) -> Self {
        Self {
            updated: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn acquired(&self) -> Vec<String> {
        self.acquired.lock().unwrap().clone()
    }
}

impl Acquirer for StaticAcquirer {
    fn acquire(&mut self, repository: &mut Repository) -> AcquisitionResult<()> {
        self.acquired.lock().unwrap().push(repository.id().to_string());
        repository.updated = self.updated.iter().any(|id| id == repository.id());
        Ok(())
    }
}
