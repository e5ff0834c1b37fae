//! Shared counter variants
//!
//! Four independently addressable integer counters, each guarded by a
//! different synchronization policy. All four expose the same surface:
//! `read`, `write`, and a derived `increment` that performs its read step
//! and write step as two separate accesses of the underlying storage,
//! never a single fetch-add. How (and whether) a policy keeps those two
//! steps safe under concurrency is exactly what the benchmark measures.

pub mod locked;
pub mod raw;

pub use locked::{LockedDirect, LockedExternalTemp, LockedInternalTemp};
pub use raw::RawCounter;

use std::fmt;
use std::sync::Arc;

/// Synchronization policy applied to a shared counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    /// No coordination at all; the performance baseline. Lost updates
    /// are expected under concurrent increments.
    Unsynchronized,
    /// Writer-exclusive lock; the guarded read copies the value into a
    /// function-local temporary before returning it.
    LockedInternalTemp,
    /// Same guarantee; the temporary carrying the value out of the
    /// guarded region is a persistent slot owned by the counter.
    LockedExternalTemp,
    /// Same guarantee; the guarded read returns its result directly with
    /// no intermediate assignment.
    LockedDirect,
}

impl SyncPolicy {
    /// All policies, in benchmark phase order. The unsynchronized
    /// baseline must come first: every factor is relative to it.
    pub const ALL: [SyncPolicy; 4] = [
        SyncPolicy::Unsynchronized,
        SyncPolicy::LockedInternalTemp,
        SyncPolicy::LockedExternalTemp,
        SyncPolicy::LockedDirect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncPolicy::Unsynchronized => "unsynchronized",
            SyncPolicy::LockedInternalTemp => "locked-internal-temp",
            SyncPolicy::LockedExternalTemp => "locked-external-temp",
            SyncPolicy::LockedDirect => "locked-direct",
        }
    }

    /// Construct a fresh counter governed by this policy.
    pub fn build(self) -> Arc<dyn SharedCounter> {
        match self {
            SyncPolicy::Unsynchronized => Arc::new(RawCounter::new()),
            SyncPolicy::LockedInternalTemp => Arc::new(LockedInternalTemp::new()),
            SyncPolicy::LockedExternalTemp => Arc::new(LockedExternalTemp::new()),
            SyncPolicy::LockedDirect => Arc::new(LockedDirect::new()),
        }
    }
}

impl fmt::Display for SyncPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shared mutable integer counter.
///
/// `increment` is the derived read-then-write(old+1) operation. Locked
/// policies hold the exclusive lock across both steps, so after N
/// completed increments from value V the counter holds exactly V+N. The
/// unsynchronized baseline is exempt from that invariant: its two steps
/// are uncoordinated and concurrent increments may be lost.
pub trait SharedCounter: Send + Sync {
    fn policy(&self) -> SyncPolicy;

    /// Current value.
    fn read(&self) -> u64;

    /// Replace the value.
    fn write(&self, value: u64);

    /// Read the value, then write back the read value plus one, as two
    /// separate storage accesses. Returns the value the read step
    /// observed so callers can consume it.
    fn increment(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_order_starts_with_baseline() {
        assert_eq!(SyncPolicy::ALL[0], SyncPolicy::Unsynchronized);
        assert_eq!(SyncPolicy::ALL.len(), 4);
    }

    #[test]
    fn test_build_matches_policy() {
        for policy in SyncPolicy::ALL {
            let counter = policy.build();
            assert_eq!(counter.policy(), policy);
            assert_eq!(counter.read(), 0);
        }
    }
}
