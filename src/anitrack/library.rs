//! # Library
//!
//! The in-memory, insertion-ordered collection of [`Record`]s for a session.
//! It is the single source of truth while the program runs; persistence is
//! layered on top by the command functions, never by the library itself.
//!
//! Order is insertion order. Display sorting works on snapshots
//! (see [`crate::commands::list`]) and never reorders the library.

use crate::model::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    records: Vec<Record>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.find(title).is_some()
    }

    pub fn find(&self, title: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.has_title(title))
    }

    /// Owned copy of every record, in library order.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes every record whose title matches case-insensitively and returns them.
    pub(crate) fn remove_title(&mut self, title: &str) -> Vec<Record> {
        let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|r| r.has_title(title));
        self.records = kept;
        removed
    }
}
