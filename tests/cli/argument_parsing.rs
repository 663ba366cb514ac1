//! Command lines parsed into arguments

use clap::Parser;
use reposcrab::app::cli::api::Args;
use std::path::PathBuf;

#[test]
fn test_long_options() {
    let args = Args::try_parse_from([
        "reposcrab",
        "--tasks",
        "tasks.toml",
        "--report",
        "report.json",
        "--output",
        "report.json",
        "--force",
        "--log-level",
        "debug",
        "--log-file",
        "run.log",
    ])
    .unwrap();

    assert_eq!(args.tasks, Some(PathBuf::from("tasks.toml")));
    assert_eq!(args.output, args.report);
    assert!(args.force);
    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(args.log_file, Some(PathBuf::from("run.log")));
}

#[test]
fn test_unknown_option_is_rejected() {
    assert!(Args::try_parse_from(["reposcrab", "--since", "yesterday"]).is_err());
}

#[test]
fn test_list_tasks_needs_no_task_file() {
    let args = Args::try_parse_from(["reposcrab", "--list-tasks"]).unwrap();
    assert!(args.list_tasks);
    assert_eq!(args.tasks, None);
}
