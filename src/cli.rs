// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::{InputFormat, OutputFormat};

/// Command-line arguments for `duedag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "duedag",
    version,
    about = "Order tasks by their dependencies, earliest due date first.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the request file (TOML or JSON), or `-` for stdin.
    ///
    /// Default: `Duedag.toml` in the current working directory.
    #[arg(long, short, value_name = "PATH", default_value = "Duedag.toml")]
    pub input: String,

    /// Request format (json, toml).
    ///
    /// If omitted, `.json` files are read as JSON, other files as TOML and
    /// stdin as JSON.
    #[arg(long, value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// How to print the order (text, json).
    #[arg(long, short, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Due date given to tasks that have none (RFC 3339 or YYYY-MM-DD).
    ///
    /// Defaults to the current time.
    #[arg(long, value_name = "DATE")]
    pub now: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DUEDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and validate the request, print the tasks, but don't order them.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
