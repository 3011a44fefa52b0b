// src/config/mod.rs

//! Scheduling requests: data model, loading and caller-side validation.
//!
//! Responsibilities:
//! - Define the serde-backed request model (`model.rs`).
//! - Parse due dates (`due_date.rs`).
//! - Load a request from JSON or TOML (`loader.rs`).
//! - Apply defaults and turn entries into scheduler input (`validate.rs`).

pub mod due_date;
pub mod loader;
pub mod model;
pub mod validate;

pub use due_date::parse_due_date;
pub use loader::{default_input_path, load_from_path, load_from_reader, parse_request};
pub use model::{ScheduleRequest, TaskEntry};
