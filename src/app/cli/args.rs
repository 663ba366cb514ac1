//! Core CLI arguments structure
//!
//! Validation and configuration file loading are handled by separate modules.

use crate::core::logging::LOG_FORMATS;
use crate::core::version;
use crate::task::api::GlobalArgs;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command line arguments
///
/// Every option except `--config-file` and `--list-tasks` can also be set in
/// the configuration file; values given on the command line win.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "reposcrab")]
#[command(about = "Inventory source repositories with versioned, cached analysis tasks")]
#[command(version = version::version_string())]
pub struct Args {
    /// Task file listing the tasks and repositories (TOML or JSON)
    #[arg(short = 't', long = "tasks", value_name = "FILE")]
    pub tasks: Option<PathBuf>,

    /// Report of a previous run whose results may be reused
    #[arg(short = 'r', long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Where the new report is written
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory where repositories and archives are stored [default: .]
    #[arg(short = 'd', long = "data", value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Update the sources of every repository before analysing it
    #[arg(short = 'u', long = "update")]
    pub update: bool,

    /// Print the report to stdout
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Overwrite the previous report with the new one
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Access token handed to tasks that query the GitHub API
    #[arg(long = "github-token", value_name = "TOKEN")]
    pub github_token: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// List all registered tasks and exit
    #[arg(long = "list-tasks")]
    pub list_tasks: bool,

    /// Log level
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error", "off"]
    )]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = LOG_FORMATS)]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data directory, the working directory unless configured
    pub fn data_dir(&self) -> PathBuf {
        self.data.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Arguments handed to every task constructor
    pub fn global_args(&self) -> GlobalArgs {
        GlobalArgs {
            github_token: self.github_token.clone(),
            data_dir: self.data_dir(),
        }
    }

    /// Log file, unless file logging was disabled with `none` or `-`
    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file
            .as_deref()
            .filter(|path| !path.to_str().is_some_and(disables_file_logging))
    }

    /// Whether log output is colored; colored unless disabled
    pub fn use_color(&self) -> bool {
        self.color || !self.no_color
    }
}

/// `none` and `-` turn file logging off
pub(crate) fn disables_file_logging(value: &str) -> bool {
    value.eq_ignore_ascii_case("none") || value == "-"
}
