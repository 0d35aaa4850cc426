//! # CLI Behavior
//!
//! This is **one possible front end** for anitrack, standing in for a
//! form-and-table GUI. It is the only place that knows about terminal I/O,
//! exit codes and output formatting.
//!
//! ## Form Validation
//!
//! `anitrack add` validates its input the way an entry form would before
//! anything reaches the library:
//!
//! - the title must not be blank
//! - `--status` must be one of planned, watching, completed, dropped
//! - `--year` must be an integer (or omitted)
//!
//! `--rating` is passed through untouched; the record itself drops values
//! outside 0-5.
//!
//! ## Naked Execution
//!
//! Running `anitrack` with no subcommand lists every title in insertion order.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Output formatting (table, stats, recommendations, messages)
//! - `setup`: Argument parsing via clap, logging setup

mod commands;
mod render;
pub mod setup;

pub use commands::run;
