//! Integration tests for contacts-core.

use chrono::NaiveDate;
use mockall::mock;

use contacts_core::{
    application::{ApplicationError, ContactService, ports::ContactSource},
    domain::{Birthday, BirthdayCountdown, Name, Phone, Record},
    error::{ContactsError, ContactsResult, ErrorCategory},
};

mock! {
    pub Source {}

    impl ContactSource for Source {
        fn load(&self) -> ContactsResult<Vec<Record>>;
        fn describe(&self) -> String;
    }
}

fn record(name: &str, phone: &str, birthday: &str) -> Record {
    Record::new(
        Name::new(name).unwrap(),
        Some(Phone::new(phone).unwrap()),
        Some(Birthday::new(birthday).unwrap()),
    )
}

fn sample() -> Vec<Record> {
    vec![
        record("Bill", "12345671258", "1994-02-26"),
        record("Bob", "12345671258", "1994-02-26"),
        record("Tom", "12345671258", "1994-02-26"),
        record("Bard", "12345671258", "1994-02-26"),
    ]
}

fn mock_source(records: fn() -> Vec<Record>) -> MockSource {
    let mut source = MockSource::new();
    source.expect_describe().return_const("mock".to_string());
    source.expect_load().times(1).returning(move || Ok(records()));
    source
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn import_then_find_by_prefix() {
    let mut service = ContactService::with_today(day(2024, 3, 1));
    let read = service.import(&mock_source(sample)).unwrap();

    assert_eq!(read, 4);
    let found = service.find("Bo");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Bob");
}

#[test]
fn import_overwrites_duplicate_names() {
    let mut service = ContactService::with_today(day(2024, 3, 1));
    let read = service
        .import(&mock_source(|| {
            vec![
                record("Bob", "1", "1994-02-26"),
                record("Bob", "2", "1994-02-26"),
            ]
        }))
        .unwrap();

    assert_eq!(read, 2);
    assert_eq!(service.book().len(), 1);
    assert_eq!(service.get("Bob").unwrap().phones()[0].value(), "2");
}

#[test]
fn import_propagates_source_errors() {
    let mut source = MockSource::new();
    source.expect_describe().return_const("broken".to_string());
    source.expect_load().returning(|| {
        Err(ApplicationError::SourceUnavailable {
            location: "broken".into(),
            reason: "gone".into(),
        }
        .into())
    });

    let mut service = ContactService::new();
    let err = service.import(&source).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Source);
    assert!(service.book().is_empty());
}

#[test]
fn pages_follow_import_order() {
    let mut service = ContactService::with_today(day(2024, 3, 1));
    service.import(&mock_source(sample)).unwrap();

    let pages: Vec<Vec<&str>> = service
        .pages(3)
        .unwrap()
        .map(|page| page.iter().map(|r| r.name().value()).collect())
        .collect();
    assert_eq!(pages, vec![vec!["Bill", "Bob", "Tom"], vec!["Bard"]]);
}

#[test]
fn birthday_countdown_on_the_day() {
    let mut service = ContactService::with_today(day(2025, 2, 26));
    service.import(&mock_source(sample)).unwrap();

    assert_eq!(service.birthday("Tom").unwrap(), BirthdayCountdown::Days(0));
}

#[test]
fn unknown_name_is_not_found() {
    let service = ContactService::new();
    let err = service.birthday("Nobody").unwrap_err();
    assert!(matches!(
        err,
        ContactsError::Application(ApplicationError::RecordNotFound { .. })
    ));
}
