use super::DataStore;
use crate::error::{Result, TrackerError};
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Option<Vec<Record>>,
    corrupt: bool,
    read_only: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Some(records),
            ..Self::default()
        }
    }

    /// Reads fail as if the backing file could not be parsed.
    pub fn corrupted() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    /// Writes fail as if the backing file were not writable.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn persisted(&self) -> Option<&[Record]> {
        self.records.as_deref()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DataStore for InMemoryStore {
    fn read(&self) -> Result<Option<Vec<Record>>> {
        if self.corrupt {
            return Err(TrackerError::Store("stored data is corrupted".to_string()));
        }
        Ok(self.records.clone())
    }

    fn write(&mut self, records: &[Record]) -> Result<()> {
        if self.read_only {
            return Err(TrackerError::Store("store is read-only".to_string()));
        }
        self.records = Some(records.to_vec());
        self.corrupt = false;
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
