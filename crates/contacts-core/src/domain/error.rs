// ============================================================================
// domain/error.rs - CONTACT DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can hand copies to DTOs and logs)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid {field} '{value}': {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot build date for '{value}': {reason}")]
    DateConstruction { value: String, reason: String },

    #[error("page size must be at least 1")]
    InvalidPageSize,

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("phone '{phone}' is not listed for {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("no birthday set for {name}")]
    NoBirthdaySet { name: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("birthday for {name} is already set to {current}")]
    BirthdayAlreadySet { name: String, current: String },
}

impl DomainError {
    pub(crate) fn validation(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation { field, reason, .. } => vec![
                format!("The {field} was rejected: {reason}"),
                match *field {
                    "name" => "Names are limited to 10 characters".into(),
                    "phone" => "Phone numbers are limited to 12 characters".into(),
                    "birthday" => "Birthdays use the YYYY-MM-DD format, e.g. 1994-02-26".into(),
                    _ => "Check the value and try again".into(),
                },
            ],
            Self::DateConstruction { value, .. } => vec![
                format!("'{value}' does not map onto a calendar date"),
                "Check the stored birthday".into(),
            ],
            Self::InvalidPageSize => vec!["Use a page size of 1 or more".into()],
            Self::PhoneNotFound { name, .. } => vec![
                format!("Check the phones listed for {name}"),
                "Phone values must match exactly".into(),
            ],
            Self::NoBirthdaySet { name } => vec![format!("Add a birthday for {name} first")],
            Self::BirthdayAlreadySet { .. } => {
                vec!["A birthday can only be set once per record".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. }
            | Self::DateConstruction { .. }
            | Self::InvalidPageSize
            | Self::BirthdayAlreadySet { .. } => ErrorCategory::Validation,
            Self::PhoneNotFound { .. } | Self::NoBirthdaySet { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
