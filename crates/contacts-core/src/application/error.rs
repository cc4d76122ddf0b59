//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::DomainError;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A contact source could not be read.
    #[error("Cannot read contacts from {location}: {reason}")]
    SourceUnavailable { location: String, reason: String },

    /// A contact source was read but its contents are malformed.
    #[error("Malformed contacts in {location}: {reason}")]
    SourceFormat { location: String, reason: String },

    /// One entry of a contact source failed validation.
    #[error("Entry #{index} in {location} is invalid: {source}")]
    InvalidEntry {
        location: String,
        index: usize,
        #[source]
        source: DomainError,
    },

    /// No record is stored under the given name.
    #[error("No contact named '{name}'")]
    RecordNotFound { name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { location, .. } => vec![
                format!("Failed to access: {location}"),
                "Check that the file exists and is readable".into(),
                "Point to a file with --file or contacts.file in the config".into(),
            ],
            Self::SourceFormat { .. } => vec![
                "Each contact is a [[contacts]] table with name, phones and birthday".into(),
            ],
            Self::InvalidEntry { index, source, .. } => {
                let mut out = vec![format!("Fix entry #{index} and try again")];
                out.extend(source.suggestions());
                out
            }
            Self::RecordNotFound { .. } => vec![
                "Names match exactly and are case-sensitive".into(),
                "Try: contacts find <prefix>".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } | Self::SourceFormat { .. } => ErrorCategory::Source,
            Self::InvalidEntry { .. } => ErrorCategory::Validation,
            Self::RecordNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
