//! Benchmark orchestration and workers
//!
//! - RunControl: cooperative cancellation flag shared by all workers
//! - run_workload: the per-worker increment loop
//! - BenchmarkRunner: runs the four variants and publishes results

pub mod control;
pub mod orchestrator;
pub mod worker;

pub use control::RunControl;
pub use orchestrator::{BenchmarkRunner, PhaseResult, WORKERS_PER_PHASE};
pub use worker::{run_workload, Priority, WorkerResult};
