pub mod builders;

use std::sync::Once;

use chrono::{DateTime, Utc};
use duedag::config::parse_due_date;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Parse a due date for test fixtures, panicking on malformed input.
pub fn date(s: &str) -> DateTime<Utc> {
    parse_due_date(s).unwrap_or_else(|e| panic!("bad test date {s:?}: {e}"))
}

/// Position of `title` in `order`, panicking if it is missing.
pub fn position(order: &[String], title: &str) -> usize {
    order
        .iter()
        .position(|t| t == title)
        .unwrap_or_else(|| panic!("{title} missing from order {order:?}"))
}
