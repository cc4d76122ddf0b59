//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `contacts-adapters` crate provides implementations.

use crate::domain::Record;
use crate::error::ContactsResult;

/// Port for reading contact records.
///
/// Implemented by:
/// - `contacts_adapters::source::FileSource` (read-only TOML or JSON contacts file)
/// - `contacts_adapters::source::MemorySource` (testing)
///
/// ## Design Notes
///
/// - Read-only: the book lives in memory and is never written back
/// - Every record is validated before it is returned
pub trait ContactSource {
    /// Load all records, in source order.
    fn load(&self) -> ContactsResult<Vec<Record>>;

    /// Human-readable location, used in logs and errors.
    fn describe(&self) -> String;
}
