//! counter-sync-bench - shared-counter synchronization benchmark
//!
//! Runs three concurrent workers against a shared counter, once per
//! synchronization policy, and reports elapsed time and speed factors
//! relative to the unsynchronized baseline.

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use counter_sync_bench::benchmark::{BenchmarkRunner, WORKERS_PER_PHASE};
use counter_sync_bench::config::{CliArgs, RunConfig};
use counter_sync_bench::counter::SyncPolicy;
use counter_sync_bench::report::{self, ConsoleSink};

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn print_banner(config: &RunConfig) {
    if config.quiet {
        return;
    }

    println!("counter-sync-bench v{}", env!("CARGO_PKG_VERSION"));
    println!("====================================");
    println!("Iterations per worker: {}", config.iterations);
    println!("Workers per phase: {}", WORKERS_PER_PHASE);
    println!(
        "Variants: {:?}",
        SyncPolicy::ALL.map(|p| p.as_str())
    );
    println!("====================================");
}

fn run() -> Result<()> {
    let args = CliArgs::parse_args();

    setup_logging(args.verbose, args.quiet);

    let config = RunConfig::from_cli(&args)
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    print_banner(&config);

    let sink = ConsoleSink::new(config.quiet);
    let runner = BenchmarkRunner::new(config.clone());
    let results = runner.run(&sink);

    if let Some(ref output_path) = config.output_path {
        info!("Writing results to: {:?}", output_path);
        report::write_json(&results, config.iterations, output_path)?;
    }

    if let Some(ref csv_path) = config.csv_output {
        info!("Writing CSV to: {:?}", csv_path);
        report::write_csv(&results, csv_path)?;
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
