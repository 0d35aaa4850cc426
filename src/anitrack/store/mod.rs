//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence adapter behind the library. A
//! store only moves the *whole* record list in and out; deciding what to do
//! about a missing or corrupt file is the job of [`crate::commands::load`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON array
//!   - Writes go to a temp file in the same directory and are renamed into place
//!   - The file path is passed in explicitly; there is no default location here
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail reads or writes, to exercise the recovery paths
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "title": "Frieren: Beyond Journey's End",
//!     "year": 2023,
//!     "genres": ["Fantasy", "Adventure"],
//!     "status": "watching",
//!     "rating": 5
//!   }
//! ]
//! ```
//!
//! Entries are decoded through [`Record`]'s normalizing deserializer, so
//! out-of-domain field values load as absent/default rather than failing.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record persistence.
pub trait DataStore {
    /// Read every persisted record, or `None` when nothing has been persisted yet.
    fn read(&self) -> Result<Option<Vec<Record>>>;

    /// Replace the persisted contents with `records`.
    fn write(&mut self, records: &[Record]) -> Result<()>;

    /// Human readable location of the persisted data (a path for file stores).
    fn location(&self) -> String;
}
