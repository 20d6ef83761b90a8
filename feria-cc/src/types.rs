//! Pipeline data types
//!
//! `RowData` is a typed row between coercion and serialization;
//! `CompileReport` is what a successful run hands back to the caller.

use feria_common::model::{Currency, Product, PUBLIC_ASSET_ROUTE};

/// Typed row data that passed coercion.
///
/// Photos are still bare filenames here: the business rules check them
/// against the real asset directory, and the public path prefix is only
/// applied when records are finalized for serialization.
#[derive(Debug, Clone)]
pub struct RowData {
    pub row: usize,
    pub sku: String,
    pub id: String,
    pub title: String,
    pub category: String,
    /// Parsed but not yet range-checked; the rules stage owns the domain.
    pub price_ars: i64,
    pub stock: i64,
    pub height_cm: Option<u32>,
    pub width_cm: Option<u32>,
    pub depth_cm: Option<u32>,
    pub weight_g: Option<u32>,
    pub shipping_class: String,
    pub finish: String,
    pub food_safe: Option<bool>,
    pub microwave_safe: Option<bool>,
    pub dishwasher_safe: Option<bool>,
    pub description: String,
    pub care: String,
    pub tags: Vec<String>,
    pub photos: Vec<String>,
}

impl RowData {
    /// Finalize a validated row into a catalog record, rewriting photo
    /// filenames to their public asset paths.
    ///
    /// Callers must have run the business-rule checks first; the numeric
    /// narrowing here assumes the validated ranges.
    pub fn into_product(self) -> Product {
        Product {
            sku: self.sku,
            id: self.id,
            title: self.title,
            category: self.category,
            price_ars: self.price_ars as u32,
            currency: Currency::Ars,
            stock: self.stock as u8,
            height_cm: self.height_cm,
            width_cm: self.width_cm,
            depth_cm: self.depth_cm,
            weight_g: self.weight_g,
            shipping_class: self.shipping_class,
            finish: self.finish,
            food_safe: self.food_safe,
            microwave_safe: self.microwave_safe,
            dishwasher_safe: self.dishwasher_safe,
            description: self.description,
            care: self.care,
            tags: self.tags,
            photos: self
                .photos
                .into_iter()
                .map(|f| format!("{}/{}", PUBLIC_ASSET_ROUTE, f))
                .collect(),
        }
    }
}

/// Advisory finding. Logged and reported, never blocks compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub row: usize,
    pub message: String,
}

/// Result of a successful compilation run.
#[derive(Debug, Clone)]
pub struct CompileReport {
    /// Compiled records in source order.
    pub products: Vec<Product>,
    /// Advisory findings, in row order.
    pub warnings: Vec<Warning>,
}
