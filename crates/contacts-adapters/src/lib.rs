//! Infrastructure adapters for contacts.
//!
//! This crate implements the ports defined in `contacts-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod source;

// Re-export commonly used adapters
pub use source::{ContactEntry, ContactFile, FileFormat, FileSource, MemorySource};
