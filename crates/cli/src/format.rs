//! Output rendering for the menu layer.

use stockbook_audit::Transaction;
use stockbook_catalog::Product;
use stockbook_core::ProductId;

/// How catalog and history output is rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// One history line: `[2026-08-25 12:30:00] ADD: P001 - Laptop (Qty: 10, Price: $999.99)`.
pub fn transaction_line(tx: &Transaction<Product>) -> String {
    let p = tx.snapshot();
    format!(
        "[{}] {}: {} - {} (Qty: {}, Price: ${:.2})",
        tx.recorded_at().format("%Y-%m-%d %H:%M:%S"),
        tx.kind(),
        p.id(),
        p.name(),
        p.quantity(),
        p.price()
    )
}

pub fn product_json(product: &Product) -> serde_json::Result<String> {
    serde_json::to_string_pretty(product)
}

pub fn products_json(products: &[Product]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(products)
}

pub fn transactions_json(transactions: &[Transaction<Product>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(transactions)
}

pub fn deletion_json(id: ProductId, deleted: bool) -> String {
    serde_json::json!({ "id": id.to_string(), "deleted": deleted }).to_string()
}
