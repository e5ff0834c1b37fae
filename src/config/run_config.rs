//! Run configuration derived from CLI arguments

use std::path::PathBuf;

use tracing::warn;

use super::cli::CliArgs;

/// Iteration counts accepted verbatim; anything else falls back to 1.
pub const ACCEPTED_ITERATIONS: [u64; 4] = [100, 1_000, 10_000, 100_000];

/// Configuration for one benchmark run
///
/// Immutable while a run is in flight; a new run may be started with a
/// fresh config.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Increments each of the three workers performs per phase
    pub iterations: u64,

    // Output
    pub output_path: Option<PathBuf>,
    pub csv_output: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        args.validate()?;

        Ok(Self {
            iterations: resolve_iterations(args.iterations),
            output_path: args.output_path.clone(),
            csv_output: args.csv_output.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Map a requested count onto the accepted set.
pub fn resolve_iterations(requested: u64) -> u64 {
    if ACCEPTED_ITERATIONS.contains(&requested) {
        requested
    } else {
        warn!(requested, "unsupported iteration count, falling back to 1");
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_accepted_counts_pass_through() {
        for count in ACCEPTED_ITERATIONS {
            assert_eq!(resolve_iterations(count), count);
        }
    }

    #[test]
    fn test_unrecognized_counts_fall_back_to_one() {
        assert_eq!(resolve_iterations(0), 1);
        assert_eq!(resolve_iterations(1), 1);
        assert_eq!(resolve_iterations(500), 1);
        assert_eq!(resolve_iterations(u64::MAX), 1);
    }

    #[test]
    fn test_from_cli_resolves_iterations() {
        let args = CliArgs::parse_from(["counter-sync-bench", "-n", "42"]);
        let config = RunConfig::from_cli(&args).unwrap();
        assert_eq!(config.iterations, 1);

        let args = CliArgs::parse_from(["counter-sync-bench", "-n", "10000"]);
        let config = RunConfig::from_cli(&args).unwrap();
        assert_eq!(config.iterations, 10_000);
    }
}
