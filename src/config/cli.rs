//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Shared-counter synchronization benchmark
#[derive(Parser, Debug, Clone)]
#[command(name = "counter-sync-bench")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    // ===== Benchmark Parameters =====
    /// Increments each worker performs per phase (100, 1000, 10000 or
    /// 100000; any other value falls back to 1)
    #[arg(short = 'n', long = "iterations", default_value_t = 100)]
    pub iterations: u64,

    // ===== Output =====
    /// Write results as JSON to this file
    #[arg(long = "output")]
    pub output_path: Option<PathBuf>,

    /// Write results as CSV to this file
    #[arg(long = "csv")]
    pub csv_output: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.verbose {
            return Err("--quiet and --verbose are mutually exclusive".to_string());
        }
        Ok(())
    }
}
