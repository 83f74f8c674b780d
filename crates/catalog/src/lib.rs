//! modshot catalog
//!
//! Maps screenshot files to the mod they belong to and to that mod's
//! options:
//! - **Identifier:** extract the mod identifier from a file name
//! - **Options:** the immutable per-job `ModOptions` value
//! - **Store:** the case-insensitive per-run catalog loaded from YAML
//!
//! This crate does no image work.

pub mod identifier;
pub mod options;
pub mod store;

pub use identifier::resolve_identifier;
pub use options::{ModOptions, StoredOptions};
pub use store::ModCatalog;
