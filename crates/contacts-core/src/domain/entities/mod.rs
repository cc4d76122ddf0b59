pub mod address_book;
pub mod record;

pub use crate::domain::DomainError;
pub use address_book::{AddressBook, Pages};
pub use record::{BirthdayCountdown, Record};
