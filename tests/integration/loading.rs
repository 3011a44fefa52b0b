// tests/integration/loading.rs

use std::io::Write;

use duedag::config::{ScheduleRequest, TaskEntry, load_from_path, load_from_reader, parse_request};
use duedag::schedule;
use duedag::types::InputFormat;
use duedag_test_utils::builders::{RequestBuilder, TaskEntryBuilder};
use duedag_test_utils::date;
use tempfile::Builder;

#[test]
fn json_request_uses_endpoint_field_names() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
  "tasks": [
    {{ "title": "A", "estimatedHours": 2, "dueDate": "2025-01-01T00:00:00Z" }},
    {{ "title": "B", "estimatedHours": 1, "dueDate": "2025-01-02", "dependencies": ["A"] }}
  ]
}}"#
    )
    .unwrap();

    let request = load_from_path(file.path(), None).unwrap();
    let expected = RequestBuilder::new()
        .with_task(TaskEntryBuilder::new("A").hours(2).due("2025-01-01T00:00:00Z").build())
        .with_task(TaskEntryBuilder::new("B").hours(1).due("2025-01-02").after("A").build())
        .build();
    assert_eq!(request, expected);
}

#[test]
fn toml_request_accepts_snake_case_and_after() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[tasks]]
title = "write"
due_date = "2025-01-05"
estimated_hours = 3

[[tasks]]
title = "review"
dueDate = "2025-01-04"
after = ["write"]
"#
    )
    .unwrap();

    let request = load_from_path(file.path(), None).unwrap();
    assert_eq!(request.tasks.len(), 2);
    assert_eq!(request.tasks[0].estimated_hours, 3);
    assert_eq!(request.tasks[1].dependencies, vec!["write".to_string()]);

    let tasks = request.into_descriptors(date("2025-01-01")).unwrap();
    assert_eq!(schedule(&tasks).unwrap(), vec!["write", "review"]);
}

#[test]
fn explicit_format_overrides_extension() {
    let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, r#"{{ "tasks": [ {{ "title": "only" }} ] }}"#).unwrap();

    let request = load_from_path(file.path(), Some(InputFormat::Json)).unwrap();
    assert_eq!(request.tasks, vec![TaskEntry::new("only")]);
}

#[test]
fn reader_input_is_supported() {
    let body = br#"{ "tasks": [ { "title": "A" }, { "title": "B", "dependencies": ["A"] } ] }"#;
    let request = load_from_reader(&body[..], InputFormat::Json).unwrap();
    assert_eq!(request.tasks.len(), 2);
}

#[test]
fn missing_fields_get_defaults() {
    let request: ScheduleRequest =
        parse_request(r#"{ "tasks": [ { "title": "A" } ] }"#, InputFormat::Json).unwrap();

    let now = date("2025-06-01T12:00:00Z");
    let tasks = request.into_descriptors(now).unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].estimated_hours, 0);
    assert_eq!(tasks[0].due_date, now);
    assert!(tasks[0].dependencies.is_empty());
}

#[test]
fn format_follows_extension() {
    assert_eq!(
        InputFormat::from_path(std::path::Path::new("tasks.JSON")),
        InputFormat::Json
    );
    assert_eq!(
        InputFormat::from_path(std::path::Path::new("Duedag.toml")),
        InputFormat::Toml
    );
    assert_eq!(
        InputFormat::from_path(std::path::Path::new("tasks")),
        InputFormat::Toml
    );
    assert_eq!(duedag::config::default_input_path(), std::path::PathBuf::from("Duedag.toml"));
}
