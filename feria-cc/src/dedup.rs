//! Duplicate identifier detection
//!
//! `sku` and `id` are separate uniqueness namespaces, each tracked by a
//! per-run seen set. Rows are observed in source order, so the row named in
//! the diagnostic is always the second occurrence.

use crate::error::{CompileError, Result};
use std::collections::HashSet;

/// Tracks identifiers seen so far in one compilation run.
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    seen_skus: HashSet<String>,
    seen_ids: HashSet<String>,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one row's identifiers, failing on the first repeat.
    ///
    /// The sku namespace is checked before the id namespace, so a row that
    /// collides in both reports the sku.
    pub fn observe(&mut self, row: usize, sku: &str, id: &str) -> Result<()> {
        if !self.seen_skus.insert(sku.to_string()) {
            return Err(CompileError::DuplicateSku {
                row,
                value: sku.to_string(),
            });
        }
        if !self.seen_ids.insert(id.to_string()) {
            return Err(CompileError::DuplicateId {
                row,
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
