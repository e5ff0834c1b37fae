//! Error types for counter-sync-bench

use std::io;
use thiserror::Error;

/// Top-level application error
///
/// The measurement path itself has no fallible operations; errors arise
/// only at configuration resolution and result export.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Worker error: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, BenchmarkError>;
