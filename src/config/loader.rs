// src/config/loader.rs

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::ScheduleRequest;
use crate::errors::Result;
use crate::types::InputFormat;

/// Load a scheduling request from a file.
///
/// The format comes from `format` if given, otherwise from the file
/// extension (see [`InputFormat::from_path`]).
///
/// This only deserializes; defaults and due dates are applied by
/// [`ScheduleRequest::into_descriptors`].
pub fn load_from_path(path: impl AsRef<Path>, format: Option<InputFormat>) -> Result<ScheduleRequest> {
    let path = path.as_ref();
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    debug!(?path, ?format, "loading scheduling request");

    let contents = fs::read_to_string(path)?;
    parse_request(&contents, format)
}

/// Load a scheduling request from any reader (e.g. stdin).
pub fn load_from_reader(mut reader: impl Read, format: InputFormat) -> Result<ScheduleRequest> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    debug!(?format, bytes = contents.len(), "loading scheduling request from reader");
    parse_request(&contents, format)
}

/// Deserialize a request from a string in the given format.
pub fn parse_request(contents: &str, format: InputFormat) -> Result<ScheduleRequest> {
    let request: ScheduleRequest = match format {
        InputFormat::Json => serde_json::from_str(contents)?,
        InputFormat::Toml => toml::from_str(contents)?,
    };
    Ok(request)
}

/// Default request file: `Duedag.toml` in the current working directory.
pub fn default_input_path() -> PathBuf {
    PathBuf::from("Duedag.toml")
}
