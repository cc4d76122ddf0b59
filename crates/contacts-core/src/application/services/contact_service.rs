//! Contact Service - main application orchestrator.
//!
//! This service coordinates the read-side workflow:
//! 1. Import records from a contact source into the in-memory book
//! 2. Look records up by prefix or exact name
//! 3. Hand out pages for a presentation layer to display
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::num::NonZeroUsize;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::ContactSource},
    domain::{AddressBook, BirthdayCountdown, DomainError, Pages, Record},
    error::ContactsResult,
};

/// A record flattened for display or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
    /// `None` when no birthday is recorded or the countdown failed.
    pub days_to_birthday: Option<BirthdayCountdown>,
    /// Why the countdown failed, when it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_birthday_error: Option<String>,
}

impl ContactInfo {
    /// Flatten `record`, computing the countdown as of `today`.
    pub fn from_record(record: &Record, today: NaiveDate) -> Self {
        Self::with_countdown(record, record.days_to_birthday_from(today))
    }

    fn with_countdown(record: &Record, countdown: Result<BirthdayCountdown, DomainError>) -> Self {
        let (days_to_birthday, days_to_birthday_error) = match countdown {
            Ok(countdown) => (Some(countdown), None),
            Err(DomainError::NoBirthdaySet { .. }) => (None, None),
            Err(e) => {
                warn!(name = %record.name(), error = %e, "Birthday countdown failed");
                (None, Some(e.to_string()))
            }
        };

        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(ToString::to_string).collect(),
            birthday: record.birthday().map(ToString::to_string),
            days_to_birthday,
            days_to_birthday_error,
        }
    }
}

/// Main contacts service.
///
/// Owns the in-memory [`AddressBook`] and a fixed "today" so every answer
/// within one run agrees on the date.
#[derive(Debug, Clone)]
pub struct ContactService {
    book: AddressBook,
    today: NaiveDate,
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactService {
    /// Create a service with an empty book, dated to the local calendar day.
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    /// Create a service with an empty book and an explicit date.
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            book: AddressBook::new(),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Load every record from `source` into the book.
    ///
    /// Records sharing a name overwrite earlier ones. Returns the number of
    /// records read from the source.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn import(&mut self, source: &dyn ContactSource) -> ContactsResult<usize> {
        let records = source.load()?;
        let count = records.len();

        for record in records {
            if let Some(previous) = self.book.add_record(record) {
                debug!(name = %previous.name(), "Replaced earlier record with the same name");
            }
        }

        info!(read = count, stored = self.book.len(), "Contacts imported");
        Ok(count)
    }

    /// Insert or overwrite a single record.
    pub fn add(&mut self, record: Record) -> Option<Record> {
        self.book.add_record(record)
    }

    /// Records whose name starts with `prefix`.
    #[instrument(skip(self))]
    pub fn find(&self, prefix: &str) -> Vec<ContactInfo> {
        let found: Vec<_> = self
            .book
            .find_records(prefix)
            .into_iter()
            .map(|r| ContactInfo::from_record(r, self.today))
            .collect();
        debug!(matches = found.len(), "Prefix search finished");
        found
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> ContactsResult<&Record> {
        self.book.get(name).ok_or_else(|| {
            ApplicationError::RecordNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Days until `name`'s next birthday.
    pub fn birthday(&self, name: &str) -> ContactsResult<BirthdayCountdown> {
        Ok(self.get(name)?.days_to_birthday_from(self.today)?)
    }

    /// Page through the book. `page_size` must be at least 1.
    pub fn pages(&self, page_size: usize) -> ContactsResult<Pages<'_>> {
        let size = NonZeroUsize::new(page_size).ok_or(DomainError::InvalidPageSize)?;
        Ok(self.book.paginate(size))
    }
}
