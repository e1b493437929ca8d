//! Customer directory.
//!
//! An ordered, in-memory sequence of [`Record`]s. Ids are assigned from the
//! current length at append time, so `records[i].id == i` holds for as long
//! as the directory only grows. The directory is an ordinary value owned by
//! the caller; tests create one per case instead of sharing process state.

use std::fmt;

use crate::error::{ClassifiedError, ErrorKind, Result};

/// Record identifier (0-based insertion position).
pub type RecordId = u64;

/// A stored customer entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    name: String,
    address: String,
}

impl Record {
    /// Identifier assigned at insertion.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Customer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Customer address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id:{} name:{} address:{}}}", self.id, self.name, self.address)
    }
}

/// Ordered collection of customer records.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return it. The id is the directory's length before
    /// the append.
    pub fn append(&mut self, name: impl Into<String>, address: impl Into<String>) -> &Record {
        let id = self.records.len() as RecordId;
        let record = Record { id, name: name.into(), address: address.into() };
        tracing::debug!("Appending record {}", record);

        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Find the record with the given id.
    ///
    /// Ids are signed so callers can forward untrusted input as-is; negative
    /// ids never match.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotFound`] when no record has this id.
    pub fn find_by_id(&self, id: i64) -> Result<&Record> {
        let found = RecordId::try_from(id)
            .ok()
            .and_then(|wanted| self.records.iter().find(|record| record.id == wanted));

        found.ok_or_else(|| {
            tracing::debug!("No record with id {}", id);
            ClassifiedError::new(ErrorKind::NotFound)
                .with_message(format!("no record with id {id}"))
                .with_context("id", id.to_string())
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record. Ids restart at 0.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
