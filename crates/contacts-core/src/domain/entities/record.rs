//! Contact record: one name, a duplicate-free phone list, an optional birthday.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Birthday, Name, Phone},
};

/// Ages at or beyond this are treated as implausible.
pub const MAX_PLAUSIBLE_AGE: i32 = 100;

/// Shown in place of the birthday when a record has none.
pub const NO_BIRTHDAY_MARKER: &str = "-";

/// Outcome of a birthday countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "days")]
pub enum BirthdayCountdown {
    /// Days until the next occurrence; 0 means today.
    Days(i64),
    /// Age is 0 or below, or 100 and above; no count is given.
    LongLivedPerson,
}

impl BirthdayCountdown {
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Days(days) => Some(*days),
            Self::LongLivedPerson => None,
        }
    }
}

impl fmt::Display for BirthdayCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days}"),
            Self::LongLivedPerson => f.write_str("Long-lived person"),
        }
    }
}

/// A single contact.
///
/// Invariant: `phones` holds no two equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name, phone: Option<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append `phone` unless an equal one is already listed.
    ///
    /// Returns `true` if the phone was added.
    pub fn add_phone(&mut self, phone: Phone) -> bool {
        if self.phones.contains(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    /// Remove the first phone equal to `phone`.
    pub fn delete_phone(&mut self, phone: &Phone) -> Result<Phone, DomainError> {
        let index = self.position_of(phone)?;
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is not checked against the other listed phones.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> Result<(), DomainError> {
        let index = self.position_of(old)?;
        self.phones[index] = new;
        Ok(())
    }

    /// Set the birthday. Fails if one is already recorded.
    pub fn set_birthday(&mut self, birthday: Birthday) -> Result<(), DomainError> {
        if let Some(current) = &self.birthday {
            return Err(DomainError::BirthdayAlreadySet {
                name: self.name.to_string(),
                current: current.to_string(),
            });
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days until the next birthday, counted from the local calendar date.
    pub fn days_to_birthday(&self) -> Result<BirthdayCountdown, DomainError> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday as seen from `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Result<BirthdayCountdown, DomainError> {
        let birthday = self.birthday.as_ref().ok_or_else(|| DomainError::NoBirthdaySet {
            name: self.name.to_string(),
        })?;
        let born = birthday.date()?;

        let not_yet_this_year = (today.month(), today.day()) < (born.month(), born.day());
        let age = today.year() - born.year() - i32::from(not_yet_this_year);
        if age >= MAX_PLAUSIBLE_AGE || age <= 0 {
            return Ok(BirthdayCountdown::LongLivedPerson);
        }

        let mut next = anniversary(born, today.year())?;
        if next < today {
            next = anniversary(born, today.year() + 1)?;
        }

        Ok(BirthdayCountdown::Days((next - today).num_days()))
    }

    fn position_of(&self, phone: &Phone) -> Result<usize, DomainError> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| DomainError::PhoneNotFound {
                name: self.name.to_string(),
                phone: phone.to_string(),
            })
    }
}

/// `born`'s month and day in `year`. Feb 29 falls on Feb 28 in common years.
fn anniversary(born: NaiveDate, year: i32) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| {
            (born.month() == 2 && born.day() == 29)
                .then(|| NaiveDate::from_ymd_opt(year, 2, 28))
                .flatten()
        })
        .ok_or_else(|| DomainError::DateConstruction {
            value: born.to_string(),
            reason: format!("no such date in year {year}"),
        })
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{phone}")?;
        }
        f.write_str("] ")?;
        match &self.birthday {
            Some(birthday) => write!(f, "{birthday}"),
            None => f.write_str(NO_BIRTHDAY_MARKER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn phone(s: &str) -> Phone {
        Phone::new(s).unwrap()
    }

    fn record_born(birthday: &str) -> Record {
        Record::new(
            Name::new("Bill").unwrap(),
            None,
            Some(Birthday::new(birthday).unwrap()),
        )
    }

    #[test]
    fn new_with_phone_lists_it() {
        let rec = Record::new(Name::new("Bill").unwrap(), Some(phone("12345671258")), None);
        assert_eq!(rec.phones(), &[phone("12345671258")]);
        assert!(rec.birthday().is_none());
    }

    #[test]
    fn add_phone_is_idempotent() {
        let mut rec = Record::new(Name::new("Bill").unwrap(), None, None);
        assert!(rec.add_phone(phone("555")));
        assert!(!rec.add_phone(phone("555")));
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn delete_phone_removes_one_entry() {
        let mut rec = Record::new(Name::new("Bill").unwrap(), Some(phone("1")), None);
        rec.add_phone(phone("2"));

        assert_eq!(rec.delete_phone(&phone("1")).unwrap(), phone("1"));
        assert_eq!(rec.phones(), &[phone("2")]);
    }

    #[test]
    fn delete_missing_phone_is_not_found() {
        let mut rec = Record::new(Name::new("Bill").unwrap(), Some(phone("1")), None);
        let err = rec.delete_phone(&phone("9")).unwrap_err();
        assert!(matches!(err, DomainError::PhoneNotFound { .. }));
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut rec = Record::new(Name::new("Bill").unwrap(), Some(phone("1")), None);
        rec.add_phone(phone("2"));
        rec.edit_phone(&phone("1"), phone("3")).unwrap();
        assert_eq!(rec.phones(), &[phone("3"), phone("2")]);
    }

    #[test]
    fn edit_phone_does_not_dedupe_new_value() {
        let mut rec = Record::new(Name::new("Bill").unwrap(), Some(phone("1")), None);
        rec.add_phone(phone("2"));
        rec.edit_phone(&phone("1"), phone("2")).unwrap();
        assert_eq!(rec.phones(), &[phone("2"), phone("2")]);
    }

    #[test]
    fn edit_missing_phone_is_not_found() {
        let mut rec = Record::new(Name::new("Bill").unwrap(), None, None);
        assert!(matches!(
            rec.edit_phone(&phone("1"), phone("2")),
            Err(DomainError::PhoneNotFound { .. })
        ));
    }

    #[test]
    fn birthday_can_only_be_set_once() {
        let mut rec = Record::new(Name::new("Bill").unwrap(), None, None);
        rec.set_birthday(Birthday::new("1994-02-26").unwrap()).unwrap();
        let err = rec.set_birthday(Birthday::new("1995-01-01").unwrap()).unwrap_err();
        assert!(matches!(err, DomainError::BirthdayAlreadySet { .. }));
        assert_eq!(rec.birthday().unwrap().value(), "1994-02-26");
    }

    #[test]
    fn countdown_without_birthday_fails() {
        let rec = Record::new(Name::new("Bill").unwrap(), None, None);
        assert!(matches!(
            rec.days_to_birthday_from(date(2024, 3, 1)),
            Err(DomainError::NoBirthdaySet { .. })
        ));
    }

    #[test]
    fn countdown_is_zero_on_the_day() {
        let rec = record_born("1994-02-26");
        assert_eq!(
            rec.days_to_birthday_from(date(2024, 2, 26)).unwrap(),
            BirthdayCountdown::Days(0)
        );
    }

    #[test]
    fn countdown_later_this_year() {
        let rec = record_born("1994-02-26");
        assert_eq!(
            rec.days_to_birthday_from(date(2024, 2, 20)).unwrap(),
            BirthdayCountdown::Days(6)
        );
    }

    #[test]
    fn countdown_rolls_into_next_year() {
        let rec = record_born("1994-02-26");
        // 2024-03-01 -> 2025-02-26
        assert_eq!(
            rec.days_to_birthday_from(date(2024, 3, 1)).unwrap(),
            BirthdayCountdown::Days(362)
        );
    }

    #[test]
    fn countdown_crosses_leap_day() {
        let rec = record_born("1990-03-01");
        // 2024-02-27 -> 2024-03-01 passes through Feb 29
        assert_eq!(
            rec.days_to_birthday_from(date(2024, 2, 27)).unwrap(),
            BirthdayCountdown::Days(3)
        );
    }

    #[test]
    fn leap_day_birthday_falls_on_feb_28_in_common_years() {
        let rec = record_born("2000-02-29");
        assert_eq!(
            rec.days_to_birthday_from(date(2025, 2, 1)).unwrap(),
            BirthdayCountdown::Days(27)
        );
        assert_eq!(
            rec.days_to_birthday_from(date(2024, 2, 1)).unwrap(),
            BirthdayCountdown::Days(28)
        );
    }

    #[test]
    fn implausible_ages_get_sentinel() {
        // age 100
        assert_eq!(
            record_born("1924-01-01")
                .days_to_birthday_from(date(2024, 6, 1))
                .unwrap(),
            BirthdayCountdown::LongLivedPerson
        );
        // born this year, age 0
        assert_eq!(
            record_born("2024-01-01")
                .days_to_birthday_from(date(2024, 6, 1))
                .unwrap(),
            BirthdayCountdown::LongLivedPerson
        );
        // age 99 still counts
        assert_eq!(
            record_born("1925-01-01")
                .days_to_birthday_from(date(2024, 6, 1))
                .unwrap()
                .days(),
            Some(214)
        );
    }

    #[test]
    fn sentinel_renders_as_text() {
        assert_eq!(BirthdayCountdown::LongLivedPerson.to_string(), "Long-lived person");
        assert_eq!(BirthdayCountdown::Days(5).to_string(), "5");
    }

    #[test]
    fn display_lists_phones_and_birthday() {
        let mut rec = Record::new(
            Name::new("Bill").unwrap(),
            Some(phone("12345671258")),
            Some(Birthday::new("1994-02-26").unwrap()),
        );
        rec.add_phone(phone("555"));
        assert_eq!(rec.to_string(), "Bill [12345671258, 555] 1994-02-26");

        let bare = Record::new(Name::new("Tom").unwrap(), None, None);
        assert_eq!(bare.to_string(), "Tom [] -");
    }
}
