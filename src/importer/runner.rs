//! Sequential batch import executor
//!
//! Partitions the input into fixed-size batches, sends them one at a time,
//! and folds each outcome into a running [`Summary`]. A batch failure never
//! aborts the run; only Ctrl+C does.

use crate::api::ApiClient;
use crate::importer::Summary;
use crate::output::{print_batch_failure, print_batch_ok, print_info};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default records per batch (server recommends a cap of 500)
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Default pause between batches, in seconds
pub const DEFAULT_DELAY_SECS: f64 = 2.0;

/// Executor for a bulk journal import
pub struct BatchImporter {
    client: ApiClient,
    interrupted: Arc<AtomicBool>,
}

impl BatchImporter {
    /// Create a new importer and install the Ctrl+C handler
    pub fn new(client: ApiClient) -> Self {
        let interrupted = Arc::new(AtomicBool::new(false));

        let interrupted_clone = interrupted.clone();
        let _ = ctrlc::set_handler(move || {
            interrupted_clone.store(true, Ordering::SeqCst);
        });

        Self::with_interrupt_flag(client, interrupted)
    }

    /// Create an importer driven by an externally owned interrupt flag
    ///
    /// No Ctrl+C handler is installed; the caller decides when the flag is
    /// set. Embedders (and tests) use this to stop the loop without
    /// signalling the whole process.
    pub fn with_interrupt_flag(client: ApiClient, interrupted: Arc<AtomicBool>) -> Self {
        Self {
            client,
            interrupted,
        }
    }

    /// Check if the run was interrupted
    fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Run the import: `records` split into batches of at most
    /// `batch_size`, in input order, with a `delay`-second pause between
    /// consecutive batches (none after the last).
    ///
    /// Strictly sequential: one request in flight at any time. Requires
    /// `batch_size >= 1`; the CLI boundary enforces this.
    pub async fn run(&self, records: &[Value], batch_size: usize, delay: f64) -> Summary {
        debug_assert!(batch_size >= 1);

        let mut summary = Summary::new(records.len());
        let total_batches = records.len().div_ceil(batch_size);

        for (i, batch) in records.chunks(batch_size).enumerate() {
            let batch_num = i + 1;

            if self.is_interrupted() {
                summary.set_interrupted();
                break;
            }

            print_info(&format!(
                "[{batch_num}/{total_batches}] importing {} journals...",
                batch.len()
            ));

            match self.client.import_batch(batch).await {
                Ok(outcome) => {
                    print_batch_ok(outcome.created, outcome.updated, outcome.skipped);
                    if !outcome.errors.is_empty() {
                        print_batch_failure(&format!("{} record error(s)", outcome.errors.len()));
                    }
                    summary.record_outcome(outcome);
                }
                Err(e) => {
                    print_batch_failure(&e.to_string());
                    summary.record_batch_failure(batch_num, batch.len(), &e.to_string());
                }
            }

            // Skip the pause once interrupted so a long delay does not
            // postpone shutdown; the next iteration marks the summary.
            if batch_num < total_batches && !self.is_interrupted() {
                tokio::time::sleep(Duration::from_secs_f64(delay)).await;
            }
        }

        summary
    }
}
