//! Configuration module

pub mod cli;
pub mod run_config;

pub use cli::CliArgs;
pub use run_config::{resolve_iterations, RunConfig, ACCEPTED_ITERATIONS};
