// src/lib.rs

pub mod api;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod types;

use std::io::Write;
use std::path::Path;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::api::ScheduleEndpoint;
use crate::cli::CliArgs;
use crate::config::{ScheduleRequest, load_from_path, load_from_reader, parse_due_date};
use crate::dag::{DependencyGraph, DependencyScheduler, TaskDescriptor};
use crate::types::{InputFormat, OutputFormat};

pub use crate::dag::{TaskName, schedule};
pub use crate::errors::{DuedagError, SchedulingError};

/// High-level entry point used by `main.rs`; writes to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(&args, &mut out)
}

/// Same as [`run`], writing the result to `out`.
///
/// This wires together:
/// - request loading (file or stdin)
/// - defaulting of missing due dates
/// - the scheduler (or the endpoint adapter for JSON output)
/// - rendering of the order
pub fn run_to(args: &CliArgs, out: &mut impl Write) -> Result<()> {
    let now = resolve_now(args.now.as_deref())?;
    let request = load_request(&args.input, args.input_format)?;
    info!(tasks = request.tasks.len(), input = %args.input, "loaded scheduling request");

    if args.dry_run {
        let tasks = request.into_descriptors(now)?;
        return print_dry_run(&tasks, out);
    }

    match args.output {
        OutputFormat::Text => {
            let tasks = request.into_descriptors(now)?;
            let order = DependencyScheduler::new().schedule(&tasks)?;
            for (position, title) in order.iter().enumerate() {
                writeln!(out, "{}. {title}", position + 1)?;
            }
        }
        OutputFormat::Json => match ScheduleEndpoint::default().handle(request, now) {
            Ok(response) => {
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            Err(err) => {
                writeln!(out, "{}", serde_json::to_string_pretty(&err)?)?;
                return Err(err.into());
            }
        },
    }

    debug!("run complete");
    Ok(())
}

fn resolve_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(raw) => {
            parse_due_date(raw).map_err(|reason| anyhow!("invalid --now value '{raw}': {reason}"))
        }
        None => Ok(Utc::now()),
    }
}

/// `-` reads stdin (JSON unless told otherwise); anything else is a path.
fn load_request(input: &str, format: Option<InputFormat>) -> Result<ScheduleRequest> {
    let request = if input == "-" {
        load_from_reader(std::io::stdin().lock(), format.unwrap_or(InputFormat::Json))?
    } else {
        load_from_path(Path::new(input), format)?
    };
    Ok(request)
}

/// Dry-run output: tasks, due dates, hours and dependencies, in input order.
fn print_dry_run(tasks: &[TaskDescriptor], out: &mut impl Write) -> Result<()> {
    let graph = DependencyGraph::build(tasks)?;

    writeln!(out, "duedag dry-run")?;
    writeln!(out, "tasks ({}):", graph.len())?;
    for task in tasks {
        writeln!(out, "  - {}", task.title)?;
        writeln!(out, "      due: {}", task.due_date.to_rfc3339())?;
        writeln!(out, "      estimated_hours: {}", task.estimated_hours)?;
        let deps = graph.dependencies_of(&task.title);
        if !deps.is_empty() {
            writeln!(out, "      after: {:?}", deps)?;
        }
    }
    writeln!(out, "roots: {:?}", graph.roots())?;

    let cycles = graph.find_cycles();
    if !cycles.is_empty() {
        writeln!(out, "cycles: {:?}", cycles)?;
    }

    debug!("dry-run complete (no ordering)");
    Ok(())
}
