//! Console sink
//!
//! Prints each phase's summary as it lands and shows a spinner while the
//! run is in flight.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;
use tracing::debug;

use super::sink::ResultsSink;
use crate::benchmark::{PhaseResult, WORKERS_PER_PHASE};

pub struct ConsoleSink {
    quiet: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleSink {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            spinner: Mutex::new(None),
        }
    }

    fn print_result(variant_index: usize, result: &PhaseResult) {
        println!("\n=== Variant {}: {} ===", variant_index, result.policy);
        println!(
            "Elapsed: {:.4}s | Factor: {:.1}x | Per-op: {:.10}s",
            result.elapsed.as_secs_f64(),
            result.factor,
            result.per_op.as_secs_f64()
        );
        println!(
            "Final value: {} ({} increments across {} workers{})",
            result.final_value,
            result.total_increments,
            WORKERS_PER_PHASE,
            if result.stopped_early {
                ", stopped early"
            } else {
                ""
            }
        );
    }
}

impl ResultsSink for ConsoleSink {
    fn on_cleared(&self) {
        debug!("results cleared");
    }

    fn on_busy_state_changed(&self, busy: bool) {
        if self.quiet {
            return;
        }

        let mut slot = self.spinner.lock();
        if busy {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("benchmark running...");
            pb.enable_steady_tick(Duration::from_millis(100));
            *slot = Some(pb);
        } else if let Some(pb) = slot.take() {
            pb.finish_and_clear();
        }
    }

    fn on_result(&self, variant_index: usize, result: &PhaseResult) {
        if self.quiet {
            return;
        }

        // Keep the spinner from mangling the summary lines.
        match &*self.spinner.lock() {
            Some(pb) => pb.suspend(|| Self::print_result(variant_index, result)),
            None => Self::print_result(variant_index, result),
        }
    }
}
