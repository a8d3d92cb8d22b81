use chrono::Utc;
use uuid::Uuid;

use crate::transaction::{Transaction, TransactionKind};

/// In-memory append-only audit log.
///
/// Entries are never removed or reordered; insertion order equals the
/// chronological order of the operations that produced them. History is
/// permanent for the life of the process; formatting of entries is left to
/// callers.
#[derive(Debug, Clone)]
pub struct AuditLog<S> {
    entries: Vec<Transaction<S>>,
}

impl<S> AuditLog<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record one mutation. Stamps a time-ordered UUID and the current time.
    pub fn append(&mut self, kind: TransactionKind, snapshot: S) -> &Transaction<S> {
        self.entries
            .push(Transaction::new(Uuid::now_v7(), Utc::now(), kind, snapshot));
        // Just pushed, so the log cannot be empty.
        &self.entries[self.entries.len() - 1]
    }

    /// Snapshot copy of the whole history, in insertion order.
    pub fn all(&self) -> Vec<Transaction<S>>
    where
        S: Clone,
    {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S> Default for AuditLog<S> {
    fn default() -> Self {
        Self::new()
    }
}
