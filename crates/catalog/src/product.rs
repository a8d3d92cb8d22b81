use serde::{Deserialize, Serialize};

use stockbook_core::ProductId;

/// An inventory item record.
///
/// Immutable value: the store replaces the whole record under the same id on
/// update, nothing mutates a `Product` in place. Negative `price` and
/// `quantity` are accepted deliberately; rejecting them at this layer would
/// change observable behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    quantity: i64,
    category: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            category: category.into(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Copy with a different name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy with a different price.
    pub fn with_price(&self, price: f64) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    /// Copy with a different quantity.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Copy with a different category.
    pub fn with_category(&self, category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..self.clone()
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Price: ${:.2} | Quantity: {} | Category: {}",
            self.id, self.name, self.price, self.quantity, self.category
        )
    }
}

/// Field set for a create or full replace.
///
/// `add` and `update` both take the complete set, which keeps the
/// full-replace contract explicit: callers wanting a partial update read the
/// existing record first and pass the fields they keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub category: String,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new(ProductId::new(1), "Widget", 9.99, 5, "Tools")
    }

    #[test]
    fn accessors_expose_all_fields() {
        let p = widget();
        assert_eq!(p.id(), ProductId::new(1));
        assert_eq!(p.name(), "Widget");
        assert_eq!(p.price(), 9.99);
        assert_eq!(p.quantity(), 5);
        assert_eq!(p.category(), "Tools");
    }

    #[test]
    fn with_helpers_change_one_field_and_keep_the_rest() {
        let p = widget();

        let renamed = p.with_name("Gadget");
        assert_eq!(renamed.name(), "Gadget");
        assert_eq!(renamed.id(), p.id());
        assert_eq!(renamed.price(), p.price());

        let repriced = p.with_price(19.99);
        assert_eq!(repriced.price(), 19.99);
        assert_eq!(repriced.name(), "Widget");

        let restocked = p.with_quantity(0);
        assert_eq!(restocked.quantity(), 0);

        let recategorized = p.with_category("Hardware");
        assert_eq!(recategorized.category(), "Hardware");
        assert_eq!(recategorized.quantity(), 5);
    }

    #[test]
    fn with_helpers_do_not_touch_the_original() {
        let p = widget();
        let _ = p.with_quantity(100);
        assert_eq!(p.quantity(), 5);
    }

    #[test]
    fn display_renders_the_catalog_line() {
        assert_eq!(
            widget().to_string(),
            "ID: P001 | Name: Widget | Price: $9.99 | Quantity: 5 | Category: Tools"
        );
    }

    #[test]
    fn display_pads_price_to_two_decimals() {
        let p = Product::new(ProductId::new(2), "Bolt", 1.5, 1000, "Hardware");
        assert_eq!(
            p.to_string(),
            "ID: P002 | Name: Bolt | Price: $1.50 | Quantity: 1000 | Category: Hardware"
        );
    }

    #[test]
    fn serializes_id_as_string() {
        let json = serde_json::to_value(widget()).unwrap();
        assert_eq!(json["id"], "P001");
        assert_eq!(json["price"], 9.99);
        assert_eq!(json["quantity"], 5);
    }
}
