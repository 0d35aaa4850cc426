//! # Anitrack Architecture
//!
//! Anitrack is a **UI-agnostic watch-list library**: it records the anime a
//! user is following, searches and sorts them, and reports simple statistics
//! and catalog-based recommendations. The bundled binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, validates form input, renders tables   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session Library and its DataStore               │
//! │  - Thin dispatch to commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load, add, delete, search, list, stats, recommend        │
//! │  - Operates on Rust types, no I/O assumptions               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: whole-list read/write                   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fails-Soft Records
//!
//! A [`model::Record`] is built from untrusted values and never fails to
//! construct: bad years, ratings and statuses collapse to absent/default
//! values (see [`normalize`]). Errors are reserved for rejected operations
//! (duplicate title, unknown title) and for I/O, and even I/O problems are
//! reported as messages while the in-memory library stays usable.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Persistence abstraction and implementations
//! - [`model`]: `Record`, `RawRecord` and `Status`
//! - [`normalize`]: Per-field fails-soft normalization
//! - [`library`]: The in-memory, insertion-ordered record collection
//! - [`catalog`]: The recommendation catalog
//! - [`config`]: Configuration management
//! - [`init`]: Home directory resolution and API wiring
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod library;
pub mod model;
pub mod normalize;
pub mod store;
