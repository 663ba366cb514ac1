//! Reuse of previous results across runs

use crate::common::fixtures::{DataDir, StaticAcquirer};
use crate::common::tasks::{line_counter, Constructed};
use reposcrab::manifest::api::{Manifest, RepositoryConfig};
use reposcrab::report::api::Report;
use reposcrab::repository::api::RepositoryKind;
use reposcrab::runner::api::Scrabber;
use reposcrab::task::api::{GlobalArgs, MetaTask, TaskRegistry};
use serde_json::json;

fn manifest(parameter: serde_json::Value) -> Manifest {
    Manifest {
        repository_tasks: vec![MetaTask::new("Lines", parameter)],
        report_tasks: Vec::new(),
        repositories: ["one", "two"]
            .iter()
            .map(|name| RepositoryConfig {
                kind: RepositoryKind::Git,
                url: name.to_string(),
                location: Some(name.into()),
            })
            .collect(),
    }
}

fn data_dir() -> DataDir {
    let data = DataDir::new();
    data.repository("one", &[("a.txt", "x\ny\n")]);
    data.repository("two", &[("b.txt", "z\n")]);
    data
}

fn run(
    data: &DataDir,
    version: &str,
    manifest: &Manifest,
    old: Option<Report>,
    acquirer: StaticAcquirer,
) -> (Report, usize) {
    let constructed = Constructed::default();
    let registry =
        TaskRegistry::from_descriptors([line_counter("Lines", version, &constructed)]).unwrap();
    let report = Scrabber::new(&registry, manifest, GlobalArgs {
        github_token: None,
        data_dir: data.path().to_path_buf(),
    })
    .with_old_report(old)
    .with_acquirer(acquirer)
    .run()
    .unwrap();
    (report, constructed.count())
}

#[test]
fn test_unchanged_run_reuses_everything() {
    let data = data_dir();
    let manifest = manifest(json!(null));
    let (first, ran) = run(&data, "1.0.0", &manifest, None, StaticAcquirer::default());
    assert_eq!(ran, 2);

    data.repository("one", &[("c.txt", "ignored\n")]);
    let (second, ran) = run(
        &data,
        "1.0.0",
        &manifest,
        Some(first.clone()),
        StaticAcquirer::default(),
    );
    assert_eq!(ran, 0);
    assert_eq!(second, first);
}

#[test]
fn test_updated_repository_runs_again() {
    let data = data_dir();
    let manifest = manifest(json!(null));
    let (first, _) = run(&data, "1.0.0", &manifest, None, StaticAcquirer::default());

    data.repository("one", &[("c.txt", "new\n")]);
    let (second, ran) = run(
        &data,
        "1.0.0",
        &manifest,
        Some(first),
        StaticAcquirer::updating(&["one"]),
    );

    assert_eq!(ran, 1);
    assert_eq!(second.project("one").unwrap()["Lines"]["lines"], 3);
    assert_eq!(second.project("two").unwrap()["Lines"]["lines"], 1);
}

#[test]
fn test_new_version_or_parameter_runs_again() {
    let data = data_dir();
    let (first, _) = run(&data, "1.0.0", &manifest(json!(null)), None, StaticAcquirer::default());

    let (_, ran) = run(
        &data,
        "1.1.0",
        &manifest(json!(null)),
        Some(first.clone()),
        StaticAcquirer::default(),
    );
    assert_eq!(ran, 2);

    let (filtered, ran) = run(
        &data,
        "1.0.0",
        &manifest(json!("x")),
        Some(first),
        StaticAcquirer::default(),
    );
    assert_eq!(ran, 2);
    assert_eq!(filtered.project("one").unwrap()["Lines"]["lines"], 1);
}

#[test]
fn test_repository_missing_from_old_report_runs() {
    let data = data_dir();
    let manifest = manifest(json!(null));
    let (mut first, _) = run(&data, "1.0.0", &manifest, None, StaticAcquirer::default());
    first.projects.remove("two");

    let (second, ran) = run(&data, "1.0.0", &manifest, Some(first), StaticAcquirer::default());
    assert_eq!(ran, 1);
    assert_eq!(second.project("two").unwrap()["Lines"]["lines"], 1);
}
