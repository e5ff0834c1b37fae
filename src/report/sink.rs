//! Results sink

use crate::benchmark::PhaseResult;

/// Receives run lifecycle notifications and per-phase results.
///
/// The runner drives one sink per pass, in a fixed order: `on_cleared`
/// as results reset to neutral, `on_busy_state_changed(true)` when the
/// run begins, one `on_result` per phase in variant order, then
/// `on_busy_state_changed(false)` after the final phase.
pub trait ResultsSink: Send + Sync {
    /// Results were reset to neutral values (time 0.0, factor 1.0).
    fn on_cleared(&self) {}

    /// The run's busy state flipped.
    fn on_busy_state_changed(&self, _busy: bool) {}

    /// A phase finished.
    fn on_result(&self, variant_index: usize, result: &PhaseResult);
}
