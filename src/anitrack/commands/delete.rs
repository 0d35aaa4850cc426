use crate::commands::helpers::persist;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrackerError};
use crate::library::Library;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(library: &mut Library, store: &mut S, title: &str) -> Result<CmdResult> {
    let removed = library.remove_title(title);
    if removed.is_empty() {
        return Err(TrackerError::TitleNotFound(title.to_string()));
    }

    debug!(title, removed = removed.len(), "deleted records");
    let mut result = CmdResult::default();
    for record in &removed {
        result.add_message(CmdMessage::success(format!(
            "Anime deleted: {}",
            record.title()
        )));
    }
    persist(store, library, &mut result);
    Ok(result.with_affected_records(removed))
}
