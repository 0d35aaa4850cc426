//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every front end. It owns the session's [`Library`] and the
//! [`DataStore`] it is persisted to, and hands both to the command functions.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (default recommendation limit from config)
//! - **Returns structured types** (`CmdResult`), never strings for display
//!
//! ## Generic Over DataStore
//!
//! `TrackerApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TrackerApi<FileStore>`
//! - Testing: `TrackerApi<InMemoryStore>`
//!
//! API tests only check dispatch and wiring; behaviour is tested in `commands/`.

use crate::commands;
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::library::Library;
use crate::model::Record;
use crate::store::DataStore;
use std::path::PathBuf;

pub struct TrackerApi<S: DataStore> {
    store: S,
    library: Library,
    config: TrackerConfig,
    home: PathBuf,
}

impl<S: DataStore> TrackerApi<S> {
    /// Creates the facade with an empty library. Call [`TrackerApi::load`]
    /// before anything else to pull in persisted records.
    pub fn new(store: S, config: TrackerConfig, home: PathBuf) -> Self {
        Self {
            store,
            library: Library::new(),
            config,
            home,
        }
    }

    pub fn load(&mut self) -> commands::CmdResult {
        let (library, result) = commands::load::run(&mut self.store);
        self.library = library;
        result
    }

    pub fn add(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.library, &mut self.store, record)
    }

    pub fn delete_by_title(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.library, &mut self.store, title)
    }

    pub fn search(&self, keyword: &str) -> commands::CmdResult {
        commands::search::run(&self.library, keyword)
    }

    pub fn list(&self, order: SortOrder) -> commands::CmdResult {
        commands::list::run(&self.library, order)
    }

    pub fn stats(&self) -> commands::CmdResult {
        commands::stats::run(&self.library)
    }

    /// Recommends up to `limit` titles, or the configured limit when `None`.
    pub fn recommend(&self, limit: Option<usize>) -> commands::CmdResult {
        let limit = limit.unwrap_or(self.config.recommend_limit);
        commands::recommend::run(&self.library, &self.config.catalog, limit)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.home, action)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn data_location(&self) -> String {
        self.store.location()
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, GenreCount, MessageLevel, Recommendation, SortKey, SortOrder, Stats,
};
