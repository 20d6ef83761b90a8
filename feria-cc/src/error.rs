//! Error types for the catalog compiler
//!
//! Every variant here is fatal: the first one raised aborts the run before
//! the artifact is written. Advisory findings are not errors; they travel
//! in the compile report as warnings.
//!
//! Row numbers are 1-indexed counting the header row, so the first data row
//! reports as row 2. That matches what a spreadsheet shows the person
//! editing the CSV.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;

/// Fatal catalog compilation errors
#[derive(Debug, Error)]
pub enum CompileError {
    /// Source CSV file does not exist
    #[error("Source file not found: {0}")]
    SourceMissing(PathBuf),

    /// Asset directory does not exist
    #[error("Asset directory not found: {0}")]
    AssetDirMissing(PathBuf),

    /// Asset path exists but is not a directory
    #[error("Asset path is not a directory: {0}")]
    AssetDirNotADirectory(PathBuf),

    /// Required field missing from the row or empty after trimming
    #[error("Row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    /// Field value is not a valid base-10 integer
    #[error("Row {row}: field '{field}' is not a valid integer: '{value}'")]
    InvalidInt {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// Field value is not 'true', 'false' or empty
    #[error("Row {row}: field '{field}' is not a valid boolean: '{value}' (expected 'true', 'false' or empty)")]
    InvalidBool {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// price_ars outside the whole-peso domain
    #[error("Row {row}: price_ars out of range: {value} (expected a non-negative whole-peso amount)")]
    PriceOutOfRange { row: usize, value: i64 },

    /// stock must be 0 or 1; every piece is one physical item
    #[error("Row {row}: stock must be 0 or 1, got {value}")]
    StockOutOfRange { row: usize, value: i64 },

    /// photos must name at least one file
    #[error("Row {row}: photos must list at least one file")]
    NoPhotos { row: usize },

    /// Referenced photo file is absent from the asset directory
    #[error("Row {row}: photo not found in asset directory: {file}")]
    MissingPhoto { row: usize, file: String },

    /// sku already used by an earlier row
    #[error("Row {row}: duplicate sku '{value}'")]
    DuplicateSku { row: usize, value: String },

    /// id already used by an earlier row
    #[error("Row {row}: duplicate id '{value}'")]
    DuplicateId { row: usize, value: String },

    /// CSV syntax or shape error from the reader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
