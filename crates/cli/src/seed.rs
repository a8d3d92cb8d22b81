//! Demonstration data.

use stockbook_catalog::{CatalogStore, NewProduct};

/// Seed the five demo products. The store itself always starts empty; this is
/// a bootstrap convenience, five plain `add` calls like any other caller.
pub fn seed_demo_products(store: &mut CatalogStore) {
    let demo = [
        ("Laptop", 999.99, 10, "Electronics"),
        ("Notebook", 4.99, 100, "Stationery"),
        ("Coffee Mug", 12.99, 30, "Kitchenware"),
        ("Headphones", 89.99, 15, "Electronics"),
        ("Textbook", 59.99, 25, "Books"),
    ];
    for (name, price, quantity, category) in demo {
        store.add(NewProduct::new(name, price, quantity, category));
    }
}
