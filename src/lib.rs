//! # roster - A console record manager
//!
//! roster keeps a small collection of structured records, either game
//! inventory items or racing drivers, in a JSON file. It offers an
//! interactive menu and one-shot commands to add, find, update, delete and
//! list them, and writes every outcome to an activity log.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use roster::storage::RecordStore;
//! use roster::types::{Record, RecordId, RecordKind, RecordPatch};
//!
//! let (mut store, _) = RecordStore::open("drivers.json", RecordKind::Driver);
//!
//! store.add(Record::new(RecordId::new(16), "Charles Leclerc").with_attribute("team", "Ferrari"))?;
//! store.update(RecordId::new(16), &RecordPatch::new().attribute("nationality", "Monegasque"))?;
//!
//! for record in store.list() {
//!     println!("{} {}", record.id, record.name);
//! }
//! # Ok::<(), roster::RecordError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Record model, ids and the per-kind field schema
//! - [`storage`] - The record store and its JSON persistence
//! - [`cli`] - Interactive menu and subcommands
//! - [`config`] - Settings and XDG paths
//! - [`logging`] - Activity log setup
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, RecordError, StorageError};
pub use storage::RecordStore;
pub use types::{Record, RecordId, RecordKind, RecordPatch};
