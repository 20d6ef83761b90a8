//! CSV source ingestion
//!
//! Reads the product source of truth into raw rows. Every cell stays a
//! string at this stage; shape checking and typing happen later in the
//! pipeline.

use crate::error::{CompileError, Result};
use serde::Deserialize;
use std::path::Path;

/// One CSV row as read, column name to raw cell.
///
/// Every field is optional here: a column may be absent from the file
/// entirely. The schema stage decides what is actually required.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawRow {
    pub sku: Option<String>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub price_ars: Option<String>,
    pub stock: Option<String>,
    pub shipping_class: Option<String>,
    pub description: Option<String>,
    pub care: Option<String>,
    pub photos: Option<String>,
    pub height_cm: Option<String>,
    pub width_cm: Option<String>,
    pub depth_cm: Option<String>,
    pub weight_g: Option<String>,
    pub finish: Option<String>,
    pub food_safe: Option<String>,
    pub microwave_safe: Option<String>,
    pub dishwasher_safe: Option<String>,
    pub tags: Option<String>,
}

/// Read all data rows from the source CSV, in file order.
///
/// The header row is consumed by the reader; callers number data rows from
/// 2 so diagnostics match what a spreadsheet shows.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.is_file() {
        return Err(CompileError::SourceMissing(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }

    tracing::debug!("Deserialized {} raw rows from {}", rows.len(), path.display());
    Ok(rows)
}
