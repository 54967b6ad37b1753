//! Run accounting
//!
//! Four monotone counters accumulated across one pass over the match set.
//! Skipping is normal behavior; only failed publish calls make the run a
//! failure.

use super::engine::EntryOutcome;

/// Per-run outcome counters, reset at run start
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Entries examined (every terminal state counts)
    pub processed: u32,
    /// Entries skipped: duplicate pending request, or failed open-request check
    pub skipped: u32,
    /// Pull requests opened
    pub created: u32,
    /// Publish calls that errored
    pub failed: u32,
}

impl RunCounters {
    /// Fold one entry outcome into the counters.
    ///
    /// Dry-run previews count as processed only; created/failed stay at 0.
    pub fn record(&mut self, outcome: &EntryOutcome) {
        self.processed += 1;
        match outcome {
            EntryOutcome::SkippedDuplicate { .. } | EntryOutcome::SkippedCheckFailed { .. } => {
                self.skipped += 1;
            }
            EntryOutcome::Created { .. } => self.created += 1,
            EntryOutcome::Failed { .. } => self.failed += 1,
            EntryOutcome::Preview { .. } => {}
        }
    }

    /// Whether the run as a whole failed
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.failed > 0
    }
}

impl std::fmt::Display for RunCounters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "processed: {} | skipped: {} | created: {} | failed: {}",
            self.processed, self.skipped, self.created, self.failed
        )
    }
}
