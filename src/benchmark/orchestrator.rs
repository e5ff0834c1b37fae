//! Benchmark runner
//!
//! Runs the four counter variants in fixed order, one phase per variant.
//! Each phase pits three concurrently scheduled workers against the
//! variant's shared counter, joins them, and reports wall-clock elapsed
//! time plus a speed factor relative to the unsynchronized baseline
//! phase. A stop request curtails the current phase's remaining
//! iterations; the runner still joins the workers, records the partial
//! elapsed time, and proceeds to the remaining phases.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use super::control::RunControl;
use super::worker::{run_workload, Priority, WorkerResult};
use crate::config::RunConfig;
use crate::counter::{SharedCounter, SyncPolicy};
use crate::report::ResultsSink;

/// Workers launched concurrently against each variant.
pub const WORKERS_PER_PHASE: usize = 3;

/// Per-variant record published after each phase
#[derive(Debug, Clone)]
pub struct PhaseResult {
    pub policy: SyncPolicy,
    /// Wall-clock time from first spawn to last join
    pub elapsed: Duration,
    /// elapsed / baseline elapsed; 1.0 by definition for the baseline
    pub factor: f64,
    /// elapsed / (iterations * workers), cancelled or not
    pub per_op: Duration,
    /// Counter value after all workers returned
    pub final_value: u64,
    /// Increments actually issued across the three workers
    pub total_increments: u64,
    /// True when a stop request curtailed this phase
    pub stopped_early: bool,
}

/// Benchmark runner
///
/// Owns the four counters and the run control flag. `run` executes one
/// complete pass synchronously; `spawn` starts a pass on a background
/// thread. Results are overwritten, not accumulated: every pass builds a
/// fresh result set.
pub struct BenchmarkRunner {
    config: RunConfig,
    control: Arc<RunControl>,
    counters: Vec<Arc<dyn SharedCounter>>,
}

impl BenchmarkRunner {
    pub fn new(config: RunConfig) -> Self {
        let counters = SyncPolicy::ALL.iter().map(|p| p.build()).collect();
        Self {
            config,
            control: Arc::new(RunControl::new()),
            counters,
        }
    }

    /// Handle for requesting cooperative cancellation from outside.
    pub fn control(&self) -> Arc<RunControl> {
        Arc::clone(&self.control)
    }

    /// Execute all four phases, publishing each result to the sink as it
    /// lands. Returns the collected results.
    pub fn run(&self, sink: &dyn ResultsSink) -> Vec<PhaseResult> {
        self.control.begin();
        sink.on_cleared();
        sink.on_busy_state_changed(true);

        let mut results = Vec::with_capacity(self.counters.len());
        let mut baseline: Option<Duration> = None;

        for (index, counter) in self.counters.iter().enumerate() {
            let (elapsed, workers) = self.run_phase(counter);

            let factor = match baseline {
                None => {
                    baseline = Some(elapsed);
                    1.0
                }
                Some(base) if base.as_secs_f64() > 0.0 => {
                    elapsed.as_secs_f64() / base.as_secs_f64()
                }
                Some(_) => 1.0,
            };

            let target = self.config.iterations * WORKERS_PER_PHASE as u64;
            let total_increments: u64 = workers.iter().map(|w| w.iterations_done).sum();
            let result = PhaseResult {
                policy: counter.policy(),
                elapsed,
                factor,
                per_op: elapsed / target.max(1) as u32,
                final_value: counter.read(),
                total_increments,
                stopped_early: total_increments < target,
            };

            info!(
                policy = %result.policy,
                elapsed_secs = result.elapsed.as_secs_f64(),
                factor = result.factor,
                final_value = result.final_value,
                "phase complete"
            );

            sink.on_result(index, &result);
            results.push(result);
        }

        sink.on_busy_state_changed(false);
        results
    }

    /// One phase: reset the counter, launch three workers with different
    /// scheduling hints, block until all of them return.
    fn run_phase(&self, counter: &Arc<dyn SharedCounter>) -> (Duration, Vec<WorkerResult>) {
        counter.write(0);
        let phase_name = counter.policy().as_str();

        let start = Instant::now();

        let mut handles: Vec<thread::JoinHandle<WorkerResult>> =
            Vec::with_capacity(WORKERS_PER_PHASE);

        for priority in Priority::ALL {
            let counter = Arc::clone(counter);
            let control = Arc::clone(&self.control);
            let iterations = self.config.iterations;

            let handle = thread::Builder::new()
                .name(format!("worker-{}-{}", phase_name, priority.label()))
                .spawn(move || run_workload(counter.as_ref(), iterations, priority, &control))
                .expect("Failed to spawn worker thread");

            handles.push(handle);
        }

        let workers: Vec<WorkerResult> = handles
            .into_iter()
            .map(|h| h.join().expect("Worker thread panicked"))
            .collect();

        (start.elapsed(), workers)
    }

    /// Start a complete pass on a background thread. Results are
    /// delivered through the sink; joining the handle yields them too.
    pub fn spawn<S>(self: Arc<Self>, sink: Arc<S>) -> thread::JoinHandle<Vec<PhaseResult>>
    where
        S: ResultsSink + 'static,
    {
        thread::Builder::new()
            .name("bench-runner".to_string())
            .spawn(move || self.run(sink.as_ref()))
            .expect("Failed to spawn runner thread")
    }
}
