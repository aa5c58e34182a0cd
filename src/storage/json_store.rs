//! JSON-backed record store.
//!
//! Keeps the whole collection in memory as an ordered list and rewrites the
//! backing file, a JSON array of flat objects, after every mutation. Lookups
//! are linear scans.

use crate::error::{RecordError, RecordResult, StorageError, StorageResult};
use crate::types::{Record, RecordId, RecordKind, RecordPatch};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// An ordered collection of records persisted to one JSON file.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    kind: RecordKind,
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store bound to `path`. Performs no I/O.
    pub fn new(path: impl Into<PathBuf>, kind: RecordKind) -> Self {
        Self {
            path: path.into(),
            kind,
            records: Vec::new(),
        }
    }

    /// Create a store and load it from disk.
    ///
    /// The store is returned even when loading fails, so the caller can
    /// report the error and carry on with an empty collection.
    pub fn open(path: impl Into<PathBuf>, kind: RecordKind) -> (Self, StorageResult<usize>) {
        let mut store = Self::new(path, kind);
        let loaded = store.load();
        (store, loaded)
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Whether a record with this id exists.
    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    /// Find a record by id.
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Find a record by id, failing with `NotFound`.
    pub fn get(&self, id: RecordId) -> RecordResult<&Record> {
        self.find(id).ok_or(RecordError::NotFound(id))
    }

    /// Append a new record and persist.
    pub fn add(&mut self, record: Record) -> RecordResult<&Record> {
        if self.contains(record.id) {
            warn!("rejected duplicate id {}", record.id);
            return Err(RecordError::DuplicateIdentifier(record.id));
        }

        let record = record.normalized(self.kind).map_err(|reason| {
            warn!("rejected {}: {}", self.kind, reason);
            RecordError::InvalidInput(reason)
        })?;

        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e.into());
        }

        let added = &self.records[self.records.len() - 1];
        info!("{} added: {}", self.kind, added.summary());
        Ok(added)
    }

    /// Overwrite the supplied, non-blank fields of a record and persist.
    pub fn update(&mut self, id: RecordId, patch: &RecordPatch) -> RecordResult<&Record> {
        let Some(index) = self.position(id) else {
            warn!("attempted to update missing id {}", id);
            return Err(RecordError::NotFound(id));
        };

        if let Some(key) = patch.unknown_field(self.kind) {
            warn!("rejected update of id {}: unknown field '{}'", id, key);
            return Err(RecordError::InvalidInput(format!(
                "unknown {} field '{}'",
                self.kind, key
            )));
        }

        let previous = self.records[index].clone();
        if self.records[index].apply(patch) {
            if let Err(e) = self.save() {
                self.records[index] = previous;
                return Err(e.into());
            }
        }

        let updated = &self.records[index];
        info!("{} updated: {}", self.kind, updated.summary());
        Ok(updated)
    }

    /// Remove a record and persist. Returns the removed record.
    pub fn delete(&mut self, id: RecordId) -> RecordResult<Record> {
        let Some(index) = self.position(id) else {
            warn!("attempted to delete missing id {}", id);
            return Err(RecordError::NotFound(id));
        };

        let removed = self.records.remove(index);
        if let Err(e) = self.save() {
            self.records.insert(index, removed);
            return Err(e.into());
        }

        info!("{} deleted: {}", self.kind, removed.summary());
        Ok(removed)
    }

    /// Replace the in-memory records with the contents of the backing file.
    ///
    /// A missing file yields an empty store. On any error the current
    /// records are left untouched.
    pub fn load(&mut self) -> StorageResult<usize> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "no record file at {}, starting with an empty store",
                    self.path.display()
                );
                self.records.clear();
                return Ok(0);
            }
            Err(source) => {
                error!("failed to read {}: {}", self.path.display(), source);
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let records = parse_records(&content, self.kind).inspect_err(|e| {
            error!("failed to load {}: {}", self.path.display(), e);
        })?;

        self.records = records;
        info!(
            "loaded {} {} from {}",
            self.records.len(),
            self.kind.plural(),
            self.path.display()
        );
        Ok(self.records.len())
    }

    /// Write every record to the backing file.
    pub fn save(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content =
            serde_json::to_string_pretty(&self.records).map_err(StorageError::Serialize)?;

        fs::write(&self.path, content).map_err(|source| {
            error!("failed to save {}: {}", self.path.display(), source);
            StorageError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!("saved {} records to {}", self.records.len(), self.path.display());
        Ok(())
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

/// Parse and check the contents of a record file.
fn parse_records(content: &str, kind: RecordKind) -> StorageResult<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(content).map_err(StorageError::Parse)?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        record.conforms_to(kind).map_err(StorageError::Malformed)?;

        if !seen.insert(record.id) {
            return Err(StorageError::Malformed(format!(
                "id {} appears more than once",
                record.id
            )));
        }
    }

    Ok(records)
}
