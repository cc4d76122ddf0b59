//! Integration tests for the contact sources.

use std::io::Write;

use contacts_adapters::{ContactEntry, ContactFile, FileFormat, FileSource, MemorySource};
use contacts_core::{
    application::{ContactService, ports::ContactSource},
    domain::{Name, Record},
    error::ErrorCategory,
};
use tempfile::NamedTempFile;

const BOOK: &str = r#"
[[contacts]]
name = "Bill"
phones = ["12345671258"]
birthday = "1994-02-26"

[[contacts]]
name = "Bob"
phones = ["12345671258", "555-0100"]
birthday = "1994-02-26"

[[contacts]]
name = "Tom"
"#;

fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn toml_file_loads_in_order() {
    let file = temp_file(".toml", BOOK);
    let records = FileSource::new(file.path()).load().unwrap();

    let names: Vec<_> = records.iter().map(|r| r.name().value().to_owned()).collect();
    assert_eq!(names, ["Bill", "Bob", "Tom"]);
    assert_eq!(records[1].phones().len(), 2);
    assert!(records[2].birthday().is_none());
}

#[test]
fn json_file_loads() {
    let file = temp_file(
        ".json",
        r#"{"contacts":[{"name":"Bob","phones":["1"],"birthday":"1994-02-26"}]}"#,
    );
    let records = FileSource::new(file.path()).load().unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn format_override_wins_over_extension() {
    let file = temp_file(".txt", r#"{"contacts":[{"name":"Bob"}]}"#);
    let records = FileSource::new(file.path())
        .with_format(FileFormat::Json)
        .load()
        .unwrap();
    assert_eq!(records[0].name().value(), "Bob");
}

#[test]
fn missing_file_is_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileSource::new(dir.path().join("absent.toml"))
        .load()
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Source);
}

#[test]
fn invalid_birthday_is_rejected_not_ignored() {
    let file = temp_file(
        ".toml",
        "[[contacts]]\nname = \"Bob\"\nbirthday = \"1994-02-30\"\n",
    );
    let err = FileSource::new(file.path()).load().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(err.to_string().contains("Entry #1"));
}

#[test]
fn file_feeds_the_service() {
    let file = temp_file(".toml", BOOK);
    let mut service = ContactService::new();
    service.import(&FileSource::new(file.path())).unwrap();

    assert_eq!(service.find("B").len(), 2);
    assert_eq!(service.pages(2).unwrap().count(), 2);
}

#[test]
fn memory_source_round_trips_records() {
    let source = MemorySource::new().with_record(Record::new(Name::new("Bob").unwrap(), None, None));
    assert_eq!(source.len(), 1);
    assert_eq!(source.load().unwrap()[0].name().value(), "Bob");

    let from_file = MemorySource::from_file(ContactFile {
        contacts: vec![ContactEntry {
            name: "Tom".into(),
            phones: vec![],
            birthday: None,
        }],
    })
    .unwrap();
    assert_eq!(from_file.describe(), "memory");
    assert!(!from_file.is_empty());
}
