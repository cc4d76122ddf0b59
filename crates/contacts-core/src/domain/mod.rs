// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the contacts book.
//!
//! This module contains pure business logic. All I/O (reading contact
//! files, printing pages, prompting) is handled via ports defined in the
//! application layer or by the CLI.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or console calls
//! - **Few external crates**: std + thiserror, chrono for dates, indexmap for ordering
//! - **Validated on write**: Fields re-check their rule on every assignment
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    address_book::{AddressBook, DEFAULT_PAGE_SIZE, Pages},
    record::{BirthdayCountdown, MAX_PLAUSIBLE_AGE, NO_BIRTHDAY_MARKER, Record},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    Birthday, BirthdayRule, Field, FieldRule, Name, NameRule, Phone, PhoneRule,
};
