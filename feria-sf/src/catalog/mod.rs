//! Compiled catalog access
//!
//! The catalog is data compiled into the binary: feria-cc turns the
//! seller's spreadsheet into `generated.rs` ahead of time, so by the time
//! this module runs every record has already passed validation. Lookups
//! are infallible reads over that static data.

use std::collections::HashMap;

use feria_common::model::Product;
use once_cell::sync::Lazy;

mod generated;

static BY_ID: Lazy<HashMap<&'static str, &'static Product>> = Lazy::new(|| {
    generated::PRODUCTS
        .iter()
        .map(|p| (p.id.as_str(), p))
        .collect()
});

/// Every product, in spreadsheet order.
pub fn all() -> &'static [Product] {
    &generated::PRODUCTS
}

/// Look up one product by its URL-safe id.
pub fn by_id(id: &str) -> Option<&'static Product> {
    BY_ID.get(id).copied()
}
