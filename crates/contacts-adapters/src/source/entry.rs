//! Raw, unvalidated contact entries as they appear in a contacts file.

use serde::{Deserialize, Serialize};

use contacts_core::{
    application::ApplicationError,
    domain::{Birthday, Name, Phone, Record},
    error::ContactsResult,
};

/// Top-level shape of a contacts file.
///
/// ```toml
/// [[contacts]]
/// name = "Bill"
/// phones = ["12345671258"]
/// birthday = "1994-02-26"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFile {
    #[serde(default)]
    pub contacts: Vec<ContactEntry>,
}

/// One contact before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

impl ContactEntry {
    /// Validate every field and build a [`Record`].
    ///
    /// `index` is 1-based and only used for error reporting.
    pub fn into_record(self, location: &str, index: usize) -> ContactsResult<Record> {
        let invalid = |source| ApplicationError::InvalidEntry {
            location: location.to_string(),
            index,
            source,
        };

        let name = Name::new(self.name).map_err(invalid)?;
        let birthday = self
            .birthday
            .map(Birthday::new)
            .transpose()
            .map_err(invalid)?;

        let mut record = Record::new(name, None, birthday);
        for raw in self.phones {
            record.add_phone(Phone::new(raw).map_err(invalid)?);
        }
        Ok(record)
    }
}

impl ContactFile {
    /// Validate all entries, stopping at the first invalid one.
    pub fn into_records(self, location: &str) -> ContactsResult<Vec<Record>> {
        self.contacts
            .into_iter()
            .enumerate()
            .map(|(i, entry)| entry.into_record(location, i + 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_core::error::ContactsError;

    fn entry(name: &str, phones: &[&str], birthday: Option<&str>) -> ContactEntry {
        ContactEntry {
            name: name.into(),
            phones: phones.iter().map(|p| p.to_string()).collect(),
            birthday: birthday.map(Into::into),
        }
    }

    #[test]
    fn valid_entry_becomes_record() {
        let rec = entry("Bill", &["1", "1", "2"], Some("1994-02-26"))
            .into_record("test", 1)
            .unwrap();
        assert_eq!(rec.to_string(), "Bill [1, 2] 1994-02-26");
    }

    #[test]
    fn invalid_field_reports_entry_index() {
        let file = ContactFile {
            contacts: vec![
                entry("Bill", &[], None),
                entry("Bob", &[], Some("1994-02-30")),
            ],
        };
        let err = file.into_records("book.toml").unwrap_err();
        match err {
            ContactsError::Application(ApplicationError::InvalidEntry { index, location, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(location, "book.toml");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn overlong_phone_is_rejected() {
        assert!(
            entry("Bill", &["1234567890123"], None)
                .into_record("test", 1)
                .is_err()
        );
    }
}
