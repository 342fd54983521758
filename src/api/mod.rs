//! API client for the discourse-journals admin endpoints

mod client;

pub use client::{ApiClient, BatchOutcome};
