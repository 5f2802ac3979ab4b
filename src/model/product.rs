//! Represents a product in the catalog.
//!
//! A product is an assigned [`ProductId`] plus whatever fields the caller supplied
//! (title, price, code, stock, ...). The store never interprets those fields, it only
//! keeps them in the order they were given.
//!
//! On disk a product is a flat JSON object with `id` first:
//!
//! ```text
//! { "id": 1, "title": "Product 2", "price": 30, "code": "XYZ789", "stock": 5 }
//! ```
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use std::fmt::Display;

/// Caller-supplied product fields, kept in insertion order.
pub type ProductFields = Map<String, Value>;

/// Name of the reserved identifier field.
pub const ID_FIELD: &str = "id";

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// Any `id` key inside `fields` is discarded; the assigned `id` always wins.
    pub fn new(id: ProductId, mut fields: ProductFields) -> Self {
        fields.shift_remove(ID_FIELD);
        Self { id, fields }
    }

    /// Overlays `update` onto the existing fields.
    ///
    /// Existing keys keep their position, new keys are appended, and an `id` key in the
    /// update is ignored so the record keeps its original identifier.
    pub fn merge(&mut self, update: ProductFields) {
        for (key, value) in update {
            if key != ID_FIELD {
                self.fields.insert(key, value);
            }
        }
    }

    /// Returns the value of a caller-supplied field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> ProductFields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_new_discards_caller_id() {
        let product = Product::new(
            ProductId(7),
            fields(json!({"id": 999, "title": "Widget", "stock": 3})),
        );
        assert_eq!(product.id, ProductId(7));
        assert!(product.field("id").is_none());
        assert_eq!(product.field("title"), Some(&json!("Widget")));
    }

    #[test]
    fn test_serializes_flat_with_id_first() {
        let product = Product::new(
            ProductId(1),
            fields(json!({"title": "Product 2", "price": 30, "code": "XYZ789", "stock": 5})),
        );
        let text = serde_json::to_string(&product).unwrap();
        assert_eq!(
            text,
            r#"{"id":1,"title":"Product 2","price":30,"code":"XYZ789","stock":5}"#
        );
    }

    #[test]
    fn test_deserialize_keeps_field_order() {
        let product: Product =
            serde_json::from_str(r#"{"stock":2,"id":4,"title":"Lamp","price":12.5}"#).unwrap();
        assert_eq!(product.id, ProductId(4));
        let keys: Vec<&str> = product.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["stock", "title", "price"]);
    }

    #[test]
    fn test_merge_overlays_fields_and_ignores_id() {
        let mut product = Product::new(
            ProductId(1),
            fields(json!({"title": "Product 2", "stock": 5})),
        );
        product.merge(fields(json!({"id": 999, "stock": 20, "color": "red"})));

        assert_eq!(product.id, ProductId(1));
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"id": 1, "title": "Product 2", "stock": 20, "color": "red"})
        );
        let keys: Vec<&str> = product.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "stock", "color"]);
    }

    #[test]
    fn test_display_id() {
        assert_eq!(ProductId(3).to_string(), "product_3");
    }
}
