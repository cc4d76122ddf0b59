//! In-memory contact source for testing and embedding.

use contacts_core::{application::ports::ContactSource, domain::Record, error::ContactsResult};

use super::entry::ContactFile;

/// Contact source backed by records already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<Record>,
}

impl MemorySource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw entries up front.
    pub fn from_file(file: ContactFile) -> ContactsResult<Self> {
        Ok(Self {
            records: file.into_records("memory")?,
        })
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for MemorySource {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl ContactSource for MemorySource {
    fn load(&self) -> ContactsResult<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
