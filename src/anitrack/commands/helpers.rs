use crate::commands::{CmdMessage, CmdResult};
use crate::library::Library;
use crate::model::Record;
use crate::store::DataStore;
use std::collections::HashMap;
use tracing::warn;

/// Write-through save after a mutation. A failed write is reported on
/// `result` and the in-memory library is left as it is.
pub fn persist<S: DataStore>(store: &mut S, library: &Library, result: &mut CmdResult) {
    if let Err(e) = store.write(library.records()) {
        warn!(error = %e, location = %store.location(), "failed to save data file");
        result.add_message(CmdMessage::error(format!("Failed to save data file: {}", e)));
    }
}

/// Counts genre occurrences across `records`, most frequent first.
/// Ties keep the order in which genres were first encountered.
pub fn tally_genres<'a, I>(records: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for record in records {
        for genre in record.genres() {
            match positions.get(genre.as_str()) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(genre.as_str(), counts.len());
                    counts.push((genre.as_str(), 1));
                }
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(genre, count)| (genre.to_string(), count))
        .collect()
}
