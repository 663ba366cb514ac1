//! Task files on disk driving a run

use crate::common::fixtures::{DataDir, StaticAcquirer};
use crate::common::tasks::{line_counter, project_total, token_probe, Constructed};
use reposcrab::manifest::api::Manifest;
use reposcrab::runner::api::{RunError, Scrabber};
use reposcrab::task::api::{GlobalArgs, TaskError, TaskRegistry};

const TASKS: &str = r#"
[[repository_tasks]]
name = "Probe"

[[repository_tasks]]
name = "Todos"
parameter = "TODO"

[[report_tasks]]
name = "Total"

[[repositories]]
kind = "git"
url = "https://example.org/first.git"
location = "first"

[[repositories]]
kind = "archive"
url = "https://example.org/second.tar.gz"
location = "second"
"#;

fn registry(constructed: &Constructed) -> TaskRegistry {
    TaskRegistry::from_descriptors([
        token_probe("Probe", constructed),
        line_counter("Todos", "1.0.0", constructed),
        project_total("Total"),
    ])
    .unwrap()
}

fn data_dir() -> DataDir {
    let data = DataDir::new();
    data.repository("first", &[("src/main.rs", "// TODO one\nfn main() {}\n// TODO two\n")]);
    data.repository("second", &[("README", "nothing to do\n"), ("notes/todo.txt", "TODO\n")]);
    data
}

#[test]
fn test_toml_task_file_runs_every_repository() {
    let data = data_dir();
    let manifest = Manifest::load(&data.write("tasks.toml", TASKS)).unwrap();
    let constructed = Constructed::default();
    let registry = registry(&constructed);
    let acquirer = StaticAcquirer::default();

    let global_args = GlobalArgs {
        github_token: Some("token".to_string()),
        data_dir: data.path().to_path_buf(),
    };
    let report = Scrabber::new(&registry, &manifest, global_args)
        .with_acquirer(acquirer.clone())
        .run()
        .unwrap();

    assert_eq!(
        acquirer.acquired(),
        vec!["https://example.org/first.git", "https://example.org/second.tar.gz"]
    );

    let first = report.project("https://example.org/first.git").unwrap();
    assert_eq!(first["Probe"]["token"], true);
    assert_eq!(first["Probe"]["location"], true);
    assert_eq!(first["Todos"]["lines"], 2);

    // archives carry no history, so git tasks are skipped
    let second = report.project("https://example.org/second.tar.gz").unwrap();
    assert!(second.get("Probe").is_none());
    assert_eq!(second["Todos"]["lines"], 1);

    assert_eq!(report.extra["project_total"], 2);
    assert_eq!(report.tasks.len(), 2);
    assert!(!report.tasks.contains_key("Total"));
}

#[test]
fn test_unknown_task_fails_before_acquisition() {
    let data = data_dir();
    let path = data.write(
        "tasks.toml",
        &TASKS.replace("name = \"Todos\"", "name = \"Missing\""),
    );
    let manifest = Manifest::load(&path).unwrap();
    let registry = registry(&Constructed::default());
    let acquirer = StaticAcquirer::default();

    let result = Scrabber::new(&registry, &manifest, GlobalArgs::default())
        .with_acquirer(acquirer.clone())
        .run();

    assert!(matches!(
        result,
        Err(RunError::Configuration(TaskError::NotFound { ref name })) if name == "Missing"
    ));
    assert!(acquirer.acquired().is_empty());
}

#[test]
fn test_report_task_in_repository_section_is_rejected() {
    let data = data_dir();
    let path = data.write(
        "tasks.json",
        r#"{"repository_tasks": [{"name": "Total"}],
            "repositories": [{"kind": "archive", "url": "local", "location": "first"}]}"#,
    );
    let manifest = Manifest::load(&path).unwrap();
    let registry = registry(&Constructed::default());

    let result = Scrabber::new(&registry, &manifest, GlobalArgs::default())
        .with_acquirer(StaticAcquirer::default())
        .run();

    assert!(matches!(
        result,
        Err(RunError::Configuration(TaskError::WrongSection { .. }))
    ));
}

#[test]
fn test_invalid_parameter_names_the_repository() {
    let data = data_dir();
    let path = data.write("tasks.toml", &TASKS.replace("\"TODO\"", "42"));
    let manifest = Manifest::load(&path).unwrap();
    let registry = registry(&Constructed::default());

    let error = Scrabber::new(&registry, &manifest, GlobalArgs {
        github_token: None,
        data_dir: data.path().to_path_buf(),
    })
    .with_acquirer(StaticAcquirer::default())
    .run()
    .unwrap_err();

    assert_eq!(error.repository(), Some("https://example.org/first.git"));
    assert!(error.to_string().contains("Todos"));
}
