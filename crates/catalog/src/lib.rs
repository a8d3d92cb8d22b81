//! `stockbook-catalog` — the product catalog.
//!
//! Owns current product state and id allocation, and records every successful
//! mutation in an append-only [`stockbook_audit::AuditLog`].

pub mod product;
pub mod store;

pub use product::{NewProduct, Product};
pub use store::CatalogStore;
