//! journals-import library
//!
//! Exposes the internal modules for integration testing. The CLI binary
//! lives in main.rs.

pub mod api;
pub mod commands;
pub mod error;
pub mod importer;
pub mod output;
