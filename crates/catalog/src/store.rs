use std::collections::BTreeMap;

use stockbook_audit::{AuditLog, Transaction, TransactionKind};
use stockbook_core::{DomainError, DomainResult, ProductId};

use crate::product::{NewProduct, Product};

/// The in-memory catalog: current products, id allocation, audit trail.
///
/// Invariants:
/// - ids are unique among currently-stored products;
/// - the id counter only ever moves forward, deleted ids are never reused;
/// - every successful mutation appends exactly one audit entry, failed
///   operations append none.
///
/// Single-threaded by construction (`&mut self` on mutations). Callers that
/// ever need shared access wrap the whole store in one lock so id allocation
/// and the audit append stay atomic per operation.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: BTreeMap<ProductId, Product>,
    next_id: u32,
    log: AuditLog<Product>,
}

impl CatalogStore {
    /// An empty catalog. Seeding demo data is the bootstrap layer's job.
    pub fn new() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
            log: AuditLog::new(),
        }
    }

    /// Create a product under a freshly allocated id. Never fails.
    pub fn add(&mut self, new: NewProduct) -> Product {
        let id = ProductId::new(self.next_id);
        self.next_id += 1;

        let product = Product::new(id, new.name, new.price, new.quantity, new.category);
        self.products.insert(id, product.clone());
        self.log.append(TransactionKind::Add, product.clone());
        product
    }

    /// Replace the record under `id` wholesale.
    ///
    /// An unknown id is a no-op: no replacement, no audit entry.
    pub fn update(&mut self, id: ProductId, new: NewProduct) -> DomainResult<Product> {
        if !self.products.contains_key(&id) {
            return Err(DomainError::not_found(id));
        }

        let product = Product::new(id, new.name, new.price, new.quantity, new.category);
        self.products.insert(id, product.clone());
        self.log.append(TransactionKind::Update, product.clone());
        Ok(product)
    }

    /// Remove the record under `id`, auditing the removed snapshot.
    ///
    /// Returns whether a removal occurred; an absent id appends nothing.
    pub fn delete(&mut self, id: ProductId) -> bool {
        match self.products.remove(&id) {
            Some(product) => {
                self.log.append(TransactionKind::Delete, product);
                true
            }
            None => false,
        }
    }

    /// Pure lookup, no side effect.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Snapshot copy of all current products, in id order.
    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Case-insensitive substring match against name or category.
    ///
    /// The empty query matches everything (the empty substring is contained
    /// in every string). Linear scan; no index at this scale.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .values()
            .filter(|p| {
                p.name().to_lowercase().contains(&needle)
                    || p.category().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Snapshot copy of the audit trail, in operation order.
    pub fn history(&self) -> Vec<Transaction<Product>> {
        self.log.all()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
