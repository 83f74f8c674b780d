//! modshot common utilities
//!
//! Shared infrastructure for all modshot crates:
//! - Error types and result aliases
//! - The run configuration context and directory conventions
//! - Tracing/logging initialization

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
