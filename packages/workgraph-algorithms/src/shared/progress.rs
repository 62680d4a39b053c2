//! Progress events for long-running invocations
//!
//! Algorithms report loop iterations through a `ProgressTracker`; at fixed
//! milestones (50k / 100k / 500k / 1M) the tracker emits a `tracing` event.
//! The host installs whatever subscriber it wants; the events are purely
//! informational and never affect results.

use tracing::info;

/// Iteration counts at which a progress event is emitted
const MILESTONES: [u64; 4] = [50_000, 100_000, 500_000, 1_000_000];

/// Per-invocation iteration counter
///
/// Dropped when the invocation returns; nothing is shared across calls.
#[derive(Debug)]
pub struct ProgressTracker {
    algorithm: &'static str,
    iterations: u64,
}

impl ProgressTracker {
    pub fn new(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            iterations: 0,
        }
    }

    /// Count one loop iteration, emitting an event on milestone boundaries
    pub fn tick(&mut self) {
        self.iterations += 1;
        if MILESTONES.contains(&self.iterations) {
            info!(
                algorithm = self.algorithm,
                iterations = self.iterations,
                "processing large graph"
            );
        }
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}
