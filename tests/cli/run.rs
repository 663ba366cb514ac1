//! Complete runs driven by parsed arguments

use crate::common::fixtures::DataDir;
use reposcrab::app::cli::api::Args;
use reposcrab::app::startup::{run, StartupError};
use reposcrab::report::api::Report;
use reposcrab::runner::api::RunError;
use std::fs;

const TASKS: &str = r#"
[[repositories]]
kind = "archive"
url = "local/one"
location = "one"

[[repositories]]
kind = "archive"
url = "local/two"
location = "two"
"#;

fn data_dir() -> DataDir {
    let data = DataDir::new();
    data.repository("one", &[("a.txt", "a\n")]);
    data.repository("two", &[("b.txt", "b\n")]);
    data.write("tasks.toml", TASKS);
    data
}

fn args(data: &DataDir) -> Args {
    Args {
        tasks: Some(data.path().join("tasks.toml")),
        data: Some(data.path().to_path_buf()),
        ..Args::default()
    }
}

#[test]
fn test_run_writes_report() {
    let data = data_dir();
    let mut args = args(&data);
    args.output = Some(data.path().join("report.json"));

    run(&args).unwrap();

    let report = Report::load(&data.path().join("report.json")).unwrap();
    assert_eq!(
        report.projects.keys().collect::<Vec<_>>(),
        vec!["local/one", "local/two"]
    );
    assert!(report.tasks.is_empty());
}

#[test]
fn test_forced_run_replaces_old_report() {
    let data = data_dir();
    let old = data.write("report.json", r#"{"projects": {}, "note": "kept"}"#);
    let mut args = args(&data);
    args.report = Some(old.clone());
    args.output = Some(old.clone());

    assert!(matches!(run(&args), Err(StartupError::Validation(_))));
    assert!(fs::read_to_string(&old).unwrap().contains("kept"));

    args.force = true;
    run(&args).unwrap();
    let report = Report::load(&old).unwrap();
    assert!(report.extra.get("note").is_none());
    assert_eq!(report.projects.len(), 2);
}

#[test]
fn test_missing_archive_fails_the_run() {
    let data = data_dir();
    fs::remove_dir_all(data.path().join("two")).unwrap();
    let mut args = args(&data);
    args.output = Some(data.path().join("report.json"));

    let error = run(&args).unwrap_err();
    assert!(matches!(
        error,
        StartupError::Run(RunError::Acquisition { ref repository, .. }) if repository == "local/two"
    ));
    assert!(!data.path().join("report.json").exists());
}

#[test]
fn test_unknown_task_is_reported() {
    let data = data_dir();
    data.write(
        "tasks.toml",
        &format!("[[report_tasks]]\nname = \"NoSuchTask\"\n{}", TASKS),
    );

    let error = run(&args(&data)).unwrap_err();
    assert!(matches!(error, StartupError::Run(RunError::Configuration(_))));
    assert!(error.to_string().contains("NoSuchTask"));
}

#[test]
fn test_list_tasks_skips_validation() {
    let args = Args {
        list_tasks: true,
        no_color: true,
        ..Args::default()
    };
    assert!(run(&args).is_ok());
}
