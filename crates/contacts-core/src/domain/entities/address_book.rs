//! The address book: records keyed by name, in insertion order.

use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use indexmap::IndexMap;
use indexmap::map::Values;

use super::record::Record;

/// Page size used when a caller has no preference.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(n) => n,
    None => unreachable!(),
};

/// Contacts keyed by name.
///
/// Invariant: every key equals the name of the record stored under it.
/// Re-inserting a name replaces the record but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().value().to_owned();
        self.records.insert(key, record)
    }

    /// Records whose name starts with `prefix` (case-sensitive).
    pub fn find_records(&self, prefix: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(_, record)| record)
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to one record. Its name cannot change through this.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Group records into pages of up to `page_size`, in insertion order.
    ///
    /// Every call starts from the first record. An empty book yields a
    /// single empty page.
    pub fn paginate(&self, page_size: NonZeroUsize) -> Pages<'_> {
        Pages {
            records: self.records.values(),
            page_size: page_size.get(),
            yielded: false,
            finished: false,
        }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

/// Lazy page iterator returned by [`AddressBook::paginate`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: Values<'a, String, Record>,
    page_size: usize,
    yielded: bool,
    finished: bool,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let page: Vec<_> = self.records.by_ref().take(self.page_size).collect();
        if page.len() < self.page_size {
            self.finished = true;
        }

        // An empty page is only meaningful when nothing came before it.
        if page.is_empty() && self.yielded {
            return None;
        }

        self.yielded = true;
        Some(page)
    }
}

impl FusedIterator for Pages<'_> {}
