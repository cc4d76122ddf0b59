//! Domain value objects: Name, Phone, Birthday.
//!
//! # Design
//!
//! Every contact field is a [`Field`] parameterised by a [`FieldRule`]. The
//! rule owns the predicate; `Field` owns the value. Construction, mutation
//! and deserialization all go through [`FieldRule::check`], so a `Field`
//! never holds a value its rule rejects.
//!
//! # Adding New Fields
//!
//! 1. Add a unit struct implementing `FieldRule` here
//! 2. Add a type alias `pub type Foo = Field<FooRule>;`
//! 3. Done: construction, setters and serde come for free

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::DomainError;

/// Longest accepted name, in characters.
pub const NAME_MAX_CHARS: usize = 10;

/// Longest accepted phone number, in characters.
pub const PHONE_MAX_CHARS: usize = 12;

/// Calendar format accepted for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// ── FieldRule ────────────────────────────────────────────────────────────────

/// Validation hook for a labelled field.
pub trait FieldRule {
    /// Label used in error messages (`"name"`, `"phone"`, ...).
    const LABEL: &'static str;

    /// Accept or reject a raw value. The error string is the human-readable reason.
    fn check(raw: &str) -> Result<(), String>;
}

/// Rule for contact names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRule;

impl FieldRule for NameRule {
    const LABEL: &'static str = "name";

    fn check(raw: &str) -> Result<(), String> {
        let len = raw.chars().count();
        if len > NAME_MAX_CHARS {
            return Err(format!(
                "too long name ({len} characters, at most {NAME_MAX_CHARS} allowed)"
            ));
        }
        Ok(())
    }
}

/// Rule for phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    const LABEL: &'static str = "phone";

    fn check(raw: &str) -> Result<(), String> {
        let len = raw.chars().count();
        if len > PHONE_MAX_CHARS {
            return Err(format!(
                "too long number ({len} characters, at most {PHONE_MAX_CHARS} allowed)"
            ));
        }
        Ok(())
    }
}

/// Rule for birthdays: a real `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    const LABEL: &'static str = "birthday";

    fn check(raw: &str) -> Result<(), String> {
        parse_iso_date(raw).map(|_| ())
    }
}

/// Strict ISO-8601 calendar date parse.
///
/// chrono alone accepts unpadded fields such as `1994-2-6`, so the shape is
/// checked first.
fn parse_iso_date(raw: &str) -> Result<NaiveDate, String> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err("date must be in format yyyy-mm-dd".into());
    }

    NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
        .map_err(|e| format!("not a calendar date: {e}"))
}

// ── Field ────────────────────────────────────────────────────────────────────

/// A string value that always satisfies the rule `R`.
pub struct Field<R> {
    value: String,
    _rule: PhantomData<R>,
}

/// A contact name, at most 10 characters.
pub type Name = Field<NameRule>;

/// A phone number, at most 12 characters.
pub type Phone = Field<PhoneRule>;

/// A birthday in `YYYY-MM-DD` form.
pub type Birthday = Field<BirthdayRule>;

impl<R: FieldRule> Field<R> {
    /// Validate `value` and wrap it.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        Self::validate(&value)?;
        Ok(Self {
            value,
            _rule: PhantomData,
        })
    }

    /// Run the rule without constructing a field.
    pub fn validate(raw: &str) -> Result<(), DomainError> {
        R::check(raw).map_err(|reason| DomainError::validation(R::LABEL, raw, reason))
    }

    /// Replace the value. On error the previous value is kept.
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), DomainError> {
        let value = value.into();
        Self::validate(&value)?;
        self.value = value;
        Ok(())
    }

    pub fn label(&self) -> &'static str {
        R::LABEL
    }
}

impl<R> Field<R> {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

impl Field<BirthdayRule> {
    /// The birthday as a calendar date.
    pub fn date(&self) -> Result<NaiveDate, DomainError> {
        parse_iso_date(&self.value).map_err(|reason| DomainError::DateConstruction {
            value: self.value.clone(),
            reason,
        })
    }
}

// Manual impls: derives would demand the same traits of the rule marker.

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _rule: PhantomData,
        }
    }
}

impl<R> PartialEq for Field<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R> Eq for Field<R> {}

impl<R> Hash for Field<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R: FieldRule> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", R::LABEL, self.value)
    }
}

impl<R> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<R> AsRef<str> for Field<R> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<R: FieldRule> TryFrom<String> for Field<R> {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<R: FieldRule> TryFrom<&str> for Field<R> {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<R> Serialize for Field<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, R: FieldRule> Deserialize<'de> for Field<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
