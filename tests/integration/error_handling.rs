// tests/integration/error_handling.rs

use std::io::Write;

use chrono::Utc;
use duedag::config::load_from_path;
use duedag::errors::{DuedagError, SchedulingError};
use duedag::schedule;
use tempfile::{Builder, NamedTempFile};

fn json_file(body: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{body}").unwrap();
    file
}

#[test]
fn test_cycle_in_file_returns_structured_error() {
    let file = json_file(
        r#"{
  "tasks": [
    { "title": "A", "dueDate": "2025-01-01", "dependencies": ["B"] },
    { "title": "B", "dueDate": "2025-01-02", "dependencies": ["A"] }
  ]
}"#,
    );

    let tasks = load_from_path(file.path(), None)
        .unwrap()
        .into_descriptors(Utc::now())
        .unwrap();

    match schedule(&tasks) {
        Err(SchedulingError::CyclicDependency { cycles, .. }) => {
            assert_eq!(cycles.len(), 1);
            assert!(cycles[0].contains(&"A".to_string()));
            assert!(cycles[0].contains(&"B".to_string()));
        }
        Err(e) => panic!("Expected CyclicDependency error, got: {:?}", e),
        Ok(order) => panic!("Expected error, got order {:?}", order),
    }
}

#[test]
fn test_empty_request_is_rejected_before_scheduling() {
    let file = json_file(r#"{ "tasks": [] }"#);

    let result = load_from_path(file.path(), None)
        .unwrap()
        .into_descriptors(Utc::now());

    match result {
        Err(DuedagError::Scheduling(SchedulingError::EmptyInput)) => {}
        Err(e) => panic!("Expected EmptyInput, got: {:?}", e),
        Ok(tasks) => panic!("Expected error, got {:?}", tasks),
    }
}

#[test]
fn test_missing_tasks_key_means_empty_request() {
    let file = json_file("{}");

    let request = load_from_path(file.path(), None).unwrap();
    assert!(request.tasks.is_empty());
}

#[test]
fn test_invalid_due_date_names_task_and_value() {
    let file = json_file(r#"{ "tasks": [ { "title": "A", "dueDate": "next tuesday" } ] }"#);

    let result = load_from_path(file.path(), None)
        .unwrap()
        .into_descriptors(Utc::now());

    match result {
        Err(DuedagError::InvalidDueDate { task, value, .. }) => {
            assert_eq!(task, "A");
            assert_eq!(value, "next tuesday");
        }
        Err(e) => panic!("Expected InvalidDueDate, got: {:?}", e),
        Ok(tasks) => panic!("Expected error, got {:?}", tasks),
    }
}

#[test]
fn test_negative_hours_is_a_json_error() {
    let file = json_file(r#"{ "tasks": [ { "title": "A", "estimatedHours": -1 } ] }"#);

    match load_from_path(file.path(), None) {
        Err(DuedagError::JsonError(_)) => {}
        Err(e) => panic!("Expected JsonError, got: {:?}", e),
        Ok(request) => panic!("Expected error, got {:?}", request),
    }
}

#[test]
fn test_malformed_toml_is_a_toml_error() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "[[tasks]\ntitle = ").unwrap();

    match load_from_path(file.path(), None) {
        Err(DuedagError::TomlError(_)) => {}
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(request) => panic!("Expected error, got {:?}", request),
    }
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(
        load_from_path(&path, None),
        Err(DuedagError::IoError(_))
    ));
}
