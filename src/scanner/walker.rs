//! Repository Walker

use crate::scanner::decode::read_file;
use crate::scanner::error::{ScanError, ScanResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Whether a directory entry is hidden
pub fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Walks the files of one repository
///
/// Files of a directory are visited before its subdirectories, both in
/// byte-wise name order.
#[derive(Debug, Clone)]
pub struct RepositoryScanner {
    root: PathBuf,
}

impl RepositoryScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of every visible file in traversal order
    pub fn walk(&self) -> ScanResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.walk_dir(&self.root, &mut |path: &Path| -> ScanResult<()> {
            files.push(path.to_path_buf());
            Ok(())
        })?;
        Ok(files)
    }

    /// Read every visible file once and hand it to `visit`
    ///
    /// Stops at the first error. Returns the number of files visited.
    pub fn scan<F, E>(&self, mut visit: F) -> Result<usize, E>
    where
        F: FnMut(&Path, &str) -> Result<(), E>,
        E: From<ScanError>,
    {
        let mut visited = 0usize;
        self.walk_dir(&self.root, &mut |path: &Path| -> Result<(), E> {
            let content = read_file(path)?;
            visit(path, &content)?;
            visited += 1;
            Ok(())
        })?;
        log::debug!("Scanned {} files in '{}'", visited, self.root.display());
        Ok(visited)
    }

    fn walk_dir<F, E>(&self, dir: &Path, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&Path) -> Result<(), E>,
        E: From<ScanError>,
    {
        let mut entries = fs::read_dir(dir)
            .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
            .map_err(|e| ScanError::io(dir, e))?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut subdirs = Vec::new();
        for entry in entries {
            let name = entry.file_name();
            if is_hidden(&name) {
                continue;
            }
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| ScanError::io(&path, e))?;

            if file_type.is_dir() {
                subdirs.push(path);
            } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
                visit(&path)?;
            } else {
                log::trace!("Skipping '{}'", path.display());
            }
        }

        for subdir in subdirs {
            self.walk_dir(&subdir, visit)?;
        }
        Ok(())
    }
}
