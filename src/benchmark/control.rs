//! Cooperative run control
//!
//! One process-wide flag polled by every worker once per loop iteration.
//! False means stopped (the default); a run begins by storing true and a
//! stop request stores false. Stopping never blocks and is idempotent.
//! Visibility is eventual: a worker may complete one more increment after
//! the store lands.

use std::sync::atomic::{AtomicBool, Ordering};

pub struct RunControl {
    running: AtomicBool,
}

impl RunControl {
    pub fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
        }
    }

    /// Mark the run as started.
    pub fn begin(&self) {
        self.running.store(true, Ordering::SeqCst);
    }

    /// Request cooperative cancellation of the current run.
    pub fn request_stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Polled by workers before each iteration.
    #[inline]
    pub fn should_run(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}
