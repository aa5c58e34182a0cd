//! Core type definitions.
//!
//! Newtypes and a shared record schema keep the two collections on one code
//! path while rejecting ids and fields that do not belong.

mod kind;
mod record;
mod record_id;
pub mod validate;

pub use kind::{Field, RecordKind};
pub use record::{Record, RecordPatch};
pub use record_id::{RecordId, RecordIdError};
