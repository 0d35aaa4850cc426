use crate::commands::helpers::persist;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrackerError};
use crate::library::Library;
use crate::model::Record;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(library: &mut Library, store: &mut S, record: Record) -> Result<CmdResult> {
    if record.title().is_empty() {
        return Err(TrackerError::EmptyTitle);
    }
    if library.contains_title(record.title()) {
        return Err(TrackerError::DuplicateTitle(record.title().to_string()));
    }

    debug!(title = record.title(), "adding record");
    library.push(record.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Anime added: {}",
        record.title()
    )));
    persist(store, library, &mut result);
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_and_persists() {
        let mut library = Library::new();
        let mut store = InMemoryStore::new();
        let record = Record::builder("Frieren").genres(["Fantasy"]).rating(5).build();

        let result = run(&mut library, &mut store, record.clone()).unwrap();

        assert_eq!(library.records(), &[record.clone()][..]);
        assert_eq!(store.persisted(), Some(&[record.clone()][..]));
        assert_eq!(result.affected_records, vec![record]);
    }

    #[test]
    fn rejects_case_insensitive_duplicate() {
        let mut library = Library::new();
        let mut store = InMemoryStore::new();
        run(&mut library, &mut store, Record::builder("K-ON").build()).unwrap();

        let err = run(&mut library, &mut store, Record::builder("k-on").build()).unwrap_err();

        assert!(matches!(err, TrackerError::DuplicateTitle(ref t) if t == "k-on"));
        assert_eq!(library.len(), 1);
        assert_eq!(library.records()[0].title(), "K-ON");
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn rejects_blank_title() {
        let mut library = Library::new();
        let mut store = InMemoryStore::new();
        let err = run(&mut library, &mut store, Record::builder("   ").build()).unwrap_err();

        assert!(matches!(err, TrackerError::EmptyTitle));
        assert!(library.is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn keeps_record_when_save_fails() {
        let mut library = Library::new();
        let mut store = InMemoryStore::new().read_only();

        let result = run(&mut library, &mut store, Record::builder("Horimiya").build()).unwrap();

        assert!(result.has_errors());
        assert_eq!(library.len(), 1);
    }
}
