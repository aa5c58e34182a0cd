//! Record persistence.
//!
//! Provides the in-memory record store and its JSON file round-trip.

mod json_store;

pub use json_store::RecordStore;
