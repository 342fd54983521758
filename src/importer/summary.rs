//! Aggregate result of an import run

use crate::api::BatchOutcome;
use serde::Serialize;

/// Summary of a completed (or interrupted) import run
///
/// One Summary exists per run. The loop folds each batch outcome into it
/// sequentially; counters only ever grow.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Total records in the input, fixed at the start of the run
    pub total: usize,
    /// Records the server reported as newly created
    pub created: u64,
    /// Records the server reported as updated in place
    pub updated: u64,
    /// Records the server reported as skipped (e.g. unchanged)
    pub skipped: u64,
    /// Records belonging to batches that failed outright
    pub failed: u64,
    /// Batch-level failures and server-reported per-record errors, in
    /// processing order
    pub errors: Vec<String>,
    /// Whether the run was cut short by Ctrl+C
    pub interrupted: bool,
}

impl Summary {
    /// Create an empty summary for an input of `total` records
    pub fn new(total: usize) -> Self {
        Self {
            total,
            created: 0,
            updated: 0,
            skipped: 0,
            failed: 0,
            errors: Vec::new(),
            interrupted: false,
        }
    }

    /// Fold one successful batch outcome into the running totals
    pub fn record_outcome(&mut self, outcome: BatchOutcome) {
        self.created += outcome.created;
        self.updated += outcome.updated;
        self.skipped += outcome.skipped;
        self.errors.extend(outcome.errors);
    }

    /// Record a whole-batch failure: every record in the batch counts as
    /// failed, and one synthetic error string identifies the batch.
    pub fn record_batch_failure(&mut self, batch_num: usize, batch_len: usize, reason: &str) {
        self.failed += batch_len as u64;
        self.errors.push(format!("batch {batch_num} failed: {reason}"));
    }

    /// Mark the run as interrupted
    pub fn set_interrupted(&mut self) {
        self.interrupted = true;
    }

    /// Check if any error was recorded during the run
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
