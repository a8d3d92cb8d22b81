//! `stockbook-audit` — append-only transaction log.
//!
//! The log is generic over the snapshot payload so this crate stays
//! domain-agnostic; the catalog layer instantiates it with its product type.

pub mod log;
pub mod transaction;

pub use log::AuditLog;
pub use transaction::{Transaction, TransactionKind};
