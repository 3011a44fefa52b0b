// tests/integration/main.rs

mod error_handling;
mod loading;
