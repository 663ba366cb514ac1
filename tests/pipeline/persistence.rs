//! Reports written and read back

use crate::common::fixtures::{DataDir, StaticAcquirer};
use crate::common::tasks::{line_counter, Constructed};
use reposcrab::manifest::api::Manifest;
use reposcrab::report::api::{Report, ReportError};
use reposcrab::runner::api::Scrabber;
use reposcrab::task::api::{GlobalArgs, TaskRegistry};
use std::fs;

const TASKS: &str = r#"
[[repository_tasks]]
name = "Lines"

[[repositories]]
kind = "archive"
url = "local/one"
location = "one"
"#;

#[test]
fn test_saved_report_drives_the_next_run() {
    let data = DataDir::new();
    data.repository("one", &[("a.txt", "a\nb\n")]);
    let manifest = Manifest::load(&data.write("tasks.toml", TASKS)).unwrap();
    let global_args = GlobalArgs {
        github_token: None,
        data_dir: data.path().to_path_buf(),
    };

    let constructed = Constructed::default();
    let registry =
        TaskRegistry::from_descriptors([line_counter("Lines", "1.0.0", &constructed)]).unwrap();
    let report = Scrabber::new(&registry, &manifest, global_args.clone())
        .with_acquirer(StaticAcquirer::default())
        .run()
        .unwrap();

    let path = data.path().join("report.json");
    report.save(&path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["projects"]["local/one"]["Lines"]["lines"], 2);
    assert_eq!(json["tasks"]["Lines"]["version"], "1.0.0");

    let old = Report::load(&path).unwrap();
    assert_eq!(old, report);

    let again = Constructed::default();
    let registry =
        TaskRegistry::from_descriptors([line_counter("Lines", "1.0.0", &again)]).unwrap();
    let second = Scrabber::new(&registry, &manifest, global_args)
        .with_old_report(Some(old))
        .with_acquirer(StaticAcquirer::default())
        .run()
        .unwrap();
    assert_eq!(again.count(), 0);
    assert_eq!(second, report);
}

#[test]
fn test_unknown_top_level_keys_survive() {
    let data = DataDir::new();
    let path = data.write(
        "old.json",
        r#"{"generated_by": "someone", "projects": {}, "tasks": {}}"#,
    );
    let report = Report::load(&path).unwrap();
    assert_eq!(report.extra["generated_by"], "someone");

    let copy = data.path().join("copy.json");
    report.save(&copy).unwrap();
    assert_eq!(Report::load(&copy).unwrap(), report);
}

#[test]
fn test_malformed_report_is_rejected() {
    let data = DataDir::new();
    let path = data.write("old.json", "{ not json");
    assert!(matches!(Report::load(&path), Err(ReportError::Parse { .. })));
}
