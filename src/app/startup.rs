//! Application startup and the run sequence

use crate::app::cli::api::{display_task_table, Args, ValidationError};
use crate::core::error_handling::{log_error_with_context, ContextualError};
use crate::core::logging::init_logging;
use crate::manifest::api::{Manifest, ManifestError};
use crate::report::api::{Report, ReportError};
use crate::repository::api::CommandAcquirer;
use crate::runner::api::{RunError, Scrabber};
use crate::task::api::{TaskError, TaskRegistry};
use clap::Parser;
use thiserror::Error;

/// Anything that ends a run before a report was produced
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Run(#[from] RunError),
}

impl StartupError {
    fn context(&self) -> &'static str {
        match self {
            StartupError::Validation(_) => "Invalid arguments",
            StartupError::Task(_) => "Loading tasks",
            StartupError::Manifest(_) => "Loading task file",
            StartupError::Report(_) => "Reading or writing the report",
            StartupError::Run(_) => "Running tasks",
        }
    }
}

impl ContextualError for StartupError {
    fn is_user_actionable(&self) -> bool {
        match self {
            StartupError::Validation(e) => e.is_user_actionable(),
            StartupError::Task(e) => e.is_user_actionable(),
            StartupError::Manifest(e) => e.is_user_actionable(),
            StartupError::Report(e) => e.is_user_actionable(),
            StartupError::Run(e) => e.is_user_actionable(),
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            StartupError::Validation(e) => e.user_message(),
            StartupError::Task(e) => e.user_message(),
            StartupError::Manifest(e) => e.user_message(),
            StartupError::Report(e) => e.user_message(),
            StartupError::Run(e) => e.user_message(),
        }
    }
}

/// Parse arguments, run the inventory and return the process exit code
pub fn startup() -> i32 {
    let mut args = Args::parse();

    let config_result = args.load_config();

    let log_file = args
        .log_file_path()
        .map(|path| path.to_string_lossy().to_string());
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        log_file.as_deref(),
        args.use_color(),
    ) {
        eprintln!("Failed to initialise logging: {}", e);
        return 1;
    }

    match config_result {
        Ok(Some(path)) => log::debug!("Applied configuration file '{}'", path.display()),
        Ok(None) => log::trace!("No configuration file"),
        Err(e) => {
            log_error_with_context(&StartupError::from(e), "Invalid configuration");
            return 1;
        }
    }

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            log_error_with_context(&e, e.context());
            1
        }
    }
}

/// Run one inventory pass as configured by the arguments
pub fn run(args: &Args) -> Result<(), StartupError> {
    let registry = TaskRegistry::load()?;

    if args.list_tasks {
        display_task_table(&registry.descriptors(), args.use_color());
        return Ok(());
    }

    args.validate()?;
    log::info!("reposcrab {} starting", crate::core::version::version_string());

    let tasks = args.tasks.as_deref().ok_or_else(|| {
        ValidationError::new(
            "No task file given - use --tasks or set 'tasks' in the configuration file",
        )
    })?;
    let manifest = Manifest::load(tasks)?;

    let old_report = match &args.report {
        Some(path) => Some(Report::load(path)?),
        None => None,
    };

    let report = Scrabber::new(&registry, &manifest, args.global_args())
        .with_old_report(old_report)
        .with_acquirer(CommandAcquirer::new(args.update))
        .run()
        .map_err(log_partial_report)?;

    if let Some(output) = &args.output {
        report.save(output)?;
        log::info!("Report written to '{}'", output.display());
    }
    if args.print {
        println!("{}", report.to_pretty_json()?);
    }
    Ok(())
}

/// Log the report as it was when a report task failed
fn log_partial_report(error: RunError) -> RunError {
    if let RunError::ReportTask { report, .. } = &error {
        match report.to_pretty_json() {
            Ok(json) => log::error!("Report before the failing task:\n{}", json),
            Err(e) => log::debug!("Could not serialise the partial report: {}", e),
        }
    }
    error
}
