//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "load a book and page through it".

pub mod contact_service;

pub use contact_service::{ContactInfo, ContactService};
