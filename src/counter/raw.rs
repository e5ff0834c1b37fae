//! Unsynchronized baseline counter

use std::sync::atomic::{AtomicU64, Ordering};

use super::{SharedCounter, SyncPolicy};

/// The baseline: relaxed load/store with no coordination across the
/// read/write pair of an increment.
///
/// Two workers can read the same value and both write back value+1,
/// losing one of the updates. The final value after concurrent increments
/// is unspecified beyond never exceeding the theoretical total. Every
/// other policy's cost is reported relative to this one.
pub struct RawCounter {
    value: AtomicU64,
}

impl RawCounter {
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }
}

impl Default for RawCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedCounter for RawCounter {
    fn policy(&self) -> SyncPolicy {
        SyncPolicy::Unsynchronized
    }

    #[inline]
    fn read(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    #[inline]
    fn write(&self, value: u64) {
        self.value.store(value, Ordering::Relaxed);
    }

    #[inline]
    fn increment(&self) -> u64 {
        // Nothing stops another thread from interleaving between these
        // two steps.
        let old = self.read();
        self.write(old + 1);
        old
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_single_thread_increments() {
        let counter = RawCounter::new();

        for _ in 0..100 {
            counter.increment();
        }

        assert_eq!(counter.read(), 100);
    }

    #[test]
    fn test_increment_returns_read_value() {
        let counter = RawCounter::new();
        counter.write(41);

        assert_eq!(counter.increment(), 41);
        assert_eq!(counter.read(), 42);
    }

    #[test]
    fn test_concurrent_increments_never_exceed_total() {
        let counter = Arc::new(RawCounter::new());
        let per_thread = 10_000u64;

        let handles: Vec<_> = (0..3)
            .map(|_| {
                let c = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        c.increment();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Lost updates are permitted; overshoot is not.
        assert!(counter.read() <= 3 * per_thread);
        assert!(counter.read() > 0);
    }
}
