//! Row schema validation
//!
//! Shape only: required fields must be present and non-empty after
//! trimming, optional fields default to the empty string. No type
//! interpretation happens here.

use crate::error::{CompileError, Result};
use crate::source::RawRow;

/// Row number of the first data row; the header row counts as row 1.
pub const FIRST_DATA_ROW: usize = 2;

/// A row that passed the shape check.
///
/// All values are trimmed. Optional fields hold the empty string when the
/// column was absent or the cell left blank, and "empty" keeps meaning
/// "unspecified" through the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct CheckedRow {
    /// 1-indexed source row (header counted), used in every diagnostic.
    pub row: usize,
    pub sku: String,
    pub id: String,
    pub title: String,
    pub category: String,
    pub price_ars: String,
    pub stock: String,
    pub shipping_class: String,
    pub description: String,
    pub care: String,
    pub photos: String,
    pub height_cm: String,
    pub width_cm: String,
    pub depth_cm: String,
    pub weight_g: String,
    pub finish: String,
    pub food_safe: String,
    pub microwave_safe: String,
    pub dishwasher_safe: String,
    pub tags: String,
}

/// Validate the shape of one raw row.
///
/// `index` is the 0-based position of the row among the data rows; it is
/// converted to the spreadsheet-style row number here and carried through
/// all later stages.
pub fn check_row(index: usize, raw: &RawRow) -> Result<CheckedRow> {
    let row = index + FIRST_DATA_ROW;

    Ok(CheckedRow {
        row,
        sku: required(row, "sku", &raw.sku)?,
        id: required(row, "id", &raw.id)?,
        title: required(row, "title", &raw.title)?,
        category: required(row, "category", &raw.category)?,
        price_ars: required(row, "price_ars", &raw.price_ars)?,
        stock: required(row, "stock", &raw.stock)?,
        shipping_class: required(row, "shipping_class", &raw.shipping_class)?,
        description: required(row, "description", &raw.description)?,
        care: required(row, "care", &raw.care)?,
        photos: required(row, "photos", &raw.photos)?,
        height_cm: optional(&raw.height_cm),
        width_cm: optional(&raw.width_cm),
        depth_cm: optional(&raw.depth_cm),
        weight_g: optional(&raw.weight_g),
        finish: optional(&raw.finish),
        food_safe: optional(&raw.food_safe),
        microwave_safe: optional(&raw.microwave_safe),
        dishwasher_safe: optional(&raw.dishwasher_safe),
        tags: optional(&raw.tags),
    })
}

fn required(row: usize, field: &'static str, value: &Option<String>) -> Result<String> {
    let trimmed = value.as_deref().unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(CompileError::MissingField { row, field });
    }
    Ok(trimmed.to_string())
}

fn optional(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").trim().to_string()
}
