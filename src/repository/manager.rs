//! Repository Managers
//!
//! Make the sources of a repository available at its location. `init` only
//! obtains sources that are not present yet; `update` also refreshes
//! existing ones. Both report whether the sources changed.

use crate::repository::error::{AcquisitionError, AcquisitionResult};
use crate::repository::types::{Repository, RepositoryKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

static SVN_UP_TO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Current branch .* is up to date\.").expect("svn rebase pattern is valid")
});

/// Obtains and refreshes the sources of one repository
pub trait RepositoryManager {
    /// Obtain the sources if they are missing; true if they were obtained
    fn init(&self) -> AcquisitionResult<bool>;

    /// Obtain or refresh the sources; true if anything changed
    fn update(&self) -> AcquisitionResult<bool>;
}

/// Prepares repositories before their tasks run
pub trait Acquirer {
    /// Make the sources available and set `repository.updated`
    fn acquire(&mut self, repository: &mut Repository) -> AcquisitionResult<()>;
}

/// Acquirer driving the repository managers
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandAcquirer {
    pub update: bool,
}

impl CommandAcquirer {
    pub fn new(update: bool) -> Self {
        Self { update }
    }
}

impl Acquirer for CommandAcquirer {
    fn acquire(&mut self, repository: &mut Repository) -> AcquisitionResult<()> {
        let manager = manager_for(repository);
        let changed = if self.update {
            manager.update()?
        } else {
            manager.init()?
        };

        if changed {
            log::info!("Sources of '{}' changed", repository.id());
        } else {
            log::debug!("Sources of '{}' unchanged", repository.id());
        }
        repository.updated = changed;
        Ok(())
    }
}

/// Manager responsible for a repository
pub fn manager_for(repository: &Repository) -> Box<dyn RepositoryManager> {
    let url = repository.url.clone();
    let location = repository.location.clone();
    match repository.kind {
        RepositoryKind::Git => Box::new(GitManager::new(url, location)),
        RepositoryKind::Svn => Box::new(SvnManager::new(url, location)),
        RepositoryKind::Archive => Box::new(ArchiveManager::new(location)),
    }
}

/// Run a command and return its standard output
///
/// The command runs with the C locale so its messages can be matched.
pub(crate) fn run_command(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
) -> AcquisitionResult<String> {
    let command_line = format!("{} {}", program, args.join(" "));
    log::debug!("Running '{}'", command_line);

    let mut command = Command::new(program);
    command.args(args).env("LC_ALL", "C");
    if let Some(cwd) = cwd {
        command.current_dir(cwd);
    }

    let output = command.output().map_err(|source| AcquisitionError::Spawn {
        command: command_line.clone(),
        source,
    })?;

    if !output.status.success() {
        return Err(AcquisitionError::Command {
            command: command_line,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Whether `location` holds a usable git checkout
///
/// Fails if the checkout is broken or the directory holds something else.
fn existing_checkout(location: &Path) -> AcquisitionResult<bool> {
    if location.join(".git").is_dir() {
        run_command("git", &["status"], Some(location)).map_err(|_| {
            AcquisitionError::Corrupt {
                location: location.to_path_buf(),
            }
        })?;
        Ok(true)
    } else if location.is_dir() {
        Err(AcquisitionError::DirectoryInUse {
            location: location.to_path_buf(),
        })
    } else {
        Ok(false)
    }
}

fn prepare_parent(location: &Path) -> AcquisitionResult<()> {
    if let Some(parent) = location.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Whether `git pull` reported new commits
pub(crate) fn pull_changed(output: &str) -> bool {
    !(output.contains("Already up to date") || output.contains("Already up-to-date"))
}

/// Whether `git svn rebase` reported new revisions
pub(crate) fn rebase_changed(output: &str) -> bool {
    !SVN_UP_TO_DATE.is_match(output)
}

/// Git repositories, cloned and pulled with the git command line
#[derive(Debug, Clone)]
pub struct GitManager {
    url: String,
    location: PathBuf,
}

impl GitManager {
    pub fn new(url: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            location: location.into(),
        }
    }

    fn clone_repository(&self) -> AcquisitionResult<()> {
        prepare_parent(&self.location)?;
        let location = self.location.to_string_lossy();
        run_command("git", &["clone", &self.url, &location], None)?;
        Ok(())
    }
}

impl RepositoryManager for GitManager {
    fn init(&self) -> AcquisitionResult<bool> {
        if existing_checkout(&self.location)? {
            return Ok(false);
        }
        self.clone_repository()?;
        Ok(true)
    }

    fn update(&self) -> AcquisitionResult<bool> {
        if !existing_checkout(&self.location)? {
            self.clone_repository()?;
            return Ok(true);
        }
        let output = run_command("git", &["pull"], Some(&self.location))?;
        Ok(pull_changed(&output))
    }
}

/// Subversion repositories, mirrored into git with git-svn
#[derive(Debug, Clone)]
pub struct SvnManager {
    url: String,
    location: PathBuf,
}

impl SvnManager {
    pub fn new(url: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            location: location.into(),
        }
    }

    fn clone_repository(&self) -> AcquisitionResult<()> {
        prepare_parent(&self.location)?;
        let location = self.location.to_string_lossy();
        run_command("git", &["svn", "clone", &self.url, &location], None)?;
        Ok(())
    }
}

impl RepositoryManager for SvnManager {
    fn init(&self) -> AcquisitionResult<bool> {
        if existing_checkout(&self.location)? {
            return Ok(false);
        }
        self.clone_repository()?;
        Ok(true)
    }

    fn update(&self) -> AcquisitionResult<bool> {
        if !existing_checkout(&self.location)? {
            self.clone_repository()?;
            return Ok(true);
        }
        let output = run_command("git", &["svn", "rebase"], Some(&self.location))?;
        Ok(rebase_changed(&output))
    }
}

/// Archives that were downloaded and extracted into the data directory
#[derive(Debug, Clone)]
pub struct ArchiveManager {
    location: PathBuf,
}

impl ArchiveManager {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    fn check_extracted(&self) -> AcquisitionResult<()> {
        if self.location.is_dir() {
            Ok(())
        } else {
            Err(AcquisitionError::MissingArchive {
                location: self.location.clone(),
            })
        }
    }
}

impl RepositoryManager for ArchiveManager {
    fn init(&self) -> AcquisitionResult<bool> {
        self.check_extracted()?;
        Ok(false)
    }

    fn update(&self) -> AcquisitionResult<bool> {
        self.check_extracted()?;
        Ok(false)
    }
}
