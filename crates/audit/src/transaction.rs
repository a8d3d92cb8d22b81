use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of mutation an audit entry records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Add,
    Update,
    Delete,
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Add => "ADD",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// Immutable record of one mutation.
///
/// Notes:
/// - `snapshot` is the payload state *after* the operation; for a delete it is
///   the state just removed.
/// - Each record owns its snapshot independently; later mutations of the same
///   logical entity never reach back into earlier records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction<S> {
    id: Uuid,
    recorded_at: DateTime<Utc>,
    kind: TransactionKind,
    snapshot: S,
}

impl<S> Transaction<S> {
    pub fn new(id: Uuid, recorded_at: DateTime<Utc>, kind: TransactionKind, snapshot: S) -> Self {
        Self {
            id,
            recorded_at,
            kind,
            snapshot,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn snapshot(&self) -> &S {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> S {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_renders_uppercase() {
        assert_eq!(TransactionKind::Add.to_string(), "ADD");
        assert_eq!(TransactionKind::Update.to_string(), "UPDATE");
        assert_eq!(TransactionKind::Delete.to_string(), "DELETE");
    }

    #[test]
    fn kind_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Delete).unwrap(),
            "\"DELETE\""
        );
    }

    #[test]
    fn transaction_exposes_its_parts() {
        let id = Uuid::now_v7();
        let at = Utc::now();
        let tx = Transaction::new(id, at, TransactionKind::Add, "snapshot".to_string());
        assert_eq!(tx.id(), id);
        assert_eq!(tx.recorded_at(), at);
        assert_eq!(tx.kind(), TransactionKind::Add);
        assert_eq!(tx.snapshot(), "snapshot");
        assert_eq!(tx.into_snapshot(), "snapshot");
    }
}
