use crate::commands::helpers::persist;
use crate::commands::{CmdMessage, CmdResult};
use crate::library::Library;
use crate::store::DataStore;
use tracing::{debug, warn};

/// Builds the session library from `store`.
///
/// - Nothing persisted yet: start empty and write the empty list, so the file exists.
/// - Unreadable or unparsable data: warn, start empty, and overwrite with the empty list.
/// - Otherwise every entry has already been normalized by [`crate::model::Record`]'s
///   deserializer and is taken as is, in file order.
///
/// Never fails: every outcome leaves a usable library, with problems reported
/// as messages on the result.
pub fn run<S: DataStore>(store: &mut S) -> (Library, CmdResult) {
    let mut result = CmdResult::default();

    let library = match store.read() {
        Ok(Some(records)) => {
            debug!(count = records.len(), location = %store.location(), "loaded library");
            return (Library::from_records(records), result);
        }
        Ok(None) => {
            debug!(location = %store.location(), "no data file, starting empty");
            Library::new()
        }
        Err(e) => {
            warn!(error = %e, location = %store.location(), "data file unreadable, resetting");
            result.add_message(CmdMessage::warning(
                "Data file corrupted, reset to empty.",
            ));
            Library::new()
        }
    };

    persist(store, &library, &mut result);
    (library, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Record;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn missing_data_is_initialized_empty() {
        let mut store = InMemoryStore::new();
        let (library, result) = run(&mut store);

        assert!(library.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(store.persisted(), Some(&[] as &[Record]));
    }

    #[test]
    fn existing_data_is_loaded_without_rewriting() {
        let records = vec![
            Record::builder("Horimiya").build(),
            Record::builder("K-ON").build(),
        ];
        let mut store = InMemoryStore::with_records(records.clone());
        let (library, result) = run(&mut store);

        assert_eq!(library.records(), &records[..]);
        assert!(result.messages.is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn corrupted_data_resets_with_warning() {
        let mut store = InMemoryStore::corrupted();
        let (library, result) = run(&mut store);

        assert!(library.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.persisted(), Some(&[] as &[Record]));
    }

    #[test]
    fn corrupted_and_unwritable_reports_both() {
        let mut store = InMemoryStore::corrupted().read_only();
        let (library, result) = run(&mut store);

        assert!(library.is_empty());
        let levels: Vec<_> = result.messages.iter().map(|m| m.level.clone()).collect();
        assert_eq!(levels, vec![MessageLevel::Warning, MessageLevel::Error]);
    }
}
