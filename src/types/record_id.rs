//! Record identifiers.
//!
//! `RecordId` is the unique integer key of a record. Wrapping it keeps ids
//! from being confused with counts or indexes into the record list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unique identifier of a record within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RecordIdError::Empty);
        }

        s.parse::<i64>()
            .map(Self)
            .map_err(|_| RecordIdError::InvalidFormat(s.to_string()))
    }
}

/// Error type for RecordId parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdError {
    #[error("the id must be a number, got '{0}'")]
    InvalidFormat(String),
    #[error("the id cannot be empty")]
    Empty,
}
