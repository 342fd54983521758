//! Batch import loop and result aggregation

mod runner;
mod summary;

pub use runner::{BatchImporter, DEFAULT_BATCH_SIZE, DEFAULT_DELAY_SECS};
pub use summary::Summary;
