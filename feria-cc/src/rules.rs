//! Business rules and asset cross-reference
//!
//! Domain checks that run after coercion: the price and stock domains,
//! photo presence, and the existence of every referenced photo file inside
//! the designated asset directory. The shipping-class check is advisory and
//! runs once over the whole batch.

use crate::error::{CompileError, Result};
use crate::types::{RowData, Warning};
use std::path::{Path, PathBuf};

/// Shipping classes the storefront's shipping copy is written around.
/// Out-of-set values are allowed, with a warning.
pub const RECOMMENDED_SHIPPING_CLASSES: [&str; 4] = ["small", "medium", "large", "fragile"];

/// The designated photo asset directory, validated upfront.
#[derive(Debug)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    /// Open the asset directory, failing before any row is processed if it
    /// does not exist.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.exists() {
            return Err(CompileError::AssetDirMissing(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(CompileError::AssetDirNotADirectory(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Whether `file` exists as a regular file inside the directory.
    pub fn contains(&self, file: &str) -> bool {
        self.root.join(file).is_file()
    }
}

/// Check one row against the domain rules.
pub fn check_row(data: &RowData, assets: &AssetDir) -> Result<()> {
    // Whole pesos, never negative, and must fit the catalog's price type.
    if !(0..=i64::from(u32::MAX)).contains(&data.price_ars) {
        return Err(CompileError::PriceOutOfRange {
            row: data.row,
            value: data.price_ars,
        });
    }

    // One-of-a-kind pieces: stock is a flag, not a count.
    if data.stock != 0 && data.stock != 1 {
        return Err(CompileError::StockOutOfRange {
            row: data.row,
            value: data.stock,
        });
    }

    if data.photos.is_empty() {
        return Err(CompileError::NoPhotos { row: data.row });
    }
    for file in &data.photos {
        if !assets.contains(file) {
            return Err(CompileError::MissingPhoto {
                row: data.row,
                file: file.clone(),
            });
        }
    }

    Ok(())
}

/// Advisory pass over the whole batch: flag shipping classes outside the
/// recommended set. Runs after every row has validated; never fails.
pub fn shipping_class_advisories(rows: &[RowData]) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for data in rows {
        if !RECOMMENDED_SHIPPING_CLASSES.contains(&data.shipping_class.as_str()) {
            let message = format!(
                "shipping_class '{}' not in the recommended set ({}); allowed anyway",
                data.shipping_class,
                RECOMMENDED_SHIPPING_CLASSES.join(", ")
            );
            tracing::warn!("Row {}: {}", data.row, message);
            warnings.push(Warning {
                row: data.row,
                message,
            });
        }
    }
    warnings
}
