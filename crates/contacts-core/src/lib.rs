//! Contacts Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for a small
//! validated address book, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          contacts-cli (CLI)             │
//! │   (Pager, find, birthday commands)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ContactService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (ContactSource)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    contacts-adapters (Infrastructure)   │
//! │     (FileSource, MemorySource)          │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Name, Phone, Birthday, Record, Book)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use contacts_core::domain::{AddressBook, Birthday, Name, Phone, Record};
//!
//! let mut book = AddressBook::new();
//! book.add_record(Record::new(
//!     Name::new("Bob").unwrap(),
//!     Some(Phone::new("12345671258").unwrap()),
//!     Some(Birthday::new("1994-02-26").unwrap()),
//! ));
//!
//! assert_eq!(book.find_records("Bo").len(), 1);
//! for page in book.paginate(NonZeroUsize::new(2).unwrap()) {
//!     for record in page {
//!         println!("{record}");
//!     }
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ContactInfo, ContactService, ports::ContactSource};
    pub use crate::domain::{
        AddressBook, Birthday, BirthdayCountdown, Name, Pages, Phone, Record,
    };
    pub use crate::error::{ContactsError, ContactsResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
