//! Compilation pipeline
//!
//! Orchestrates the stages in order: read the source, then per row (in
//! source order) shape check, duplicate check, coercion and business rules;
//! then the batch-level advisory pass; then serialization. The first fatal
//! error aborts the run with nothing written.

use crate::dedup::DuplicateTracker;
use crate::error::Result;
use crate::rules::{self, AssetDir};
use crate::types::{CompileReport, RowData};
use crate::{coerce, emit, schema, source};
use std::path::Path;
use tracing::info;

/// Run the full pipeline: CSV source in, generated catalog module out.
///
/// The artifact at `out_path` is only written after every row has passed
/// every check; on error the previous artifact, if any, is left untouched.
pub fn compile(source_path: &Path, assets_path: &Path, out_path: &Path) -> Result<CompileReport> {
    let assets = AssetDir::open(assets_path)?;
    let raw_rows = source::read_rows(source_path)?;
    info!(
        "Read {} data rows from {}",
        raw_rows.len(),
        source_path.display()
    );

    let mut tracker = DuplicateTracker::new();
    let mut validated: Vec<RowData> = Vec::with_capacity(raw_rows.len());
    for (index, raw) in raw_rows.iter().enumerate() {
        let checked = schema::check_row(index, raw)?;
        tracker.observe(checked.row, &checked.sku, &checked.id)?;
        let data = coerce::coerce_row(&checked)?;
        rules::check_row(&data, &assets)?;
        validated.push(data);
    }

    let warnings = rules::shipping_class_advisories(&validated);

    let products: Vec<_> = validated.into_iter().map(RowData::into_product).collect();
    emit::write_module(out_path, &products, &source_path.display().to_string())?;
    info!("Wrote {} records to {}", products.len(), out_path.display());

    Ok(CompileReport { products, warnings })
}
