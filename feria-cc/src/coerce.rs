//! Field coercion and normalization
//!
//! Turns trimmed cell strings into typed values. Parsing is strict: an
//! empty cell means "unspecified", and anything else must parse exactly.
//! A bad value is always an error, never silently replaced by a default.

use crate::error::{CompileError, Result};
use crate::schema::CheckedRow;
use crate::types::RowData;

/// Strict base-10 integer parse for optional fields. Empty input is
/// "unspecified", which is distinct from zero.
pub fn int_opt(row: usize, field: &'static str, raw: &str) -> Result<Option<i64>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>().map(Some).map_err(|_| CompileError::InvalidInt {
        row,
        field,
        value: raw.to_string(),
    })
}

/// Strict base-10 integer parse for required fields.
fn int_required(row: usize, field: &'static str, raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| CompileError::InvalidInt {
        row,
        field,
        value: raw.to_string(),
    })
}

/// Integer parse for the u32-typed dimension and weight fields.
pub fn dimension_opt(row: usize, field: &'static str, raw: &str) -> Result<Option<u32>> {
    match int_opt(row, field, raw)? {
        None => Ok(None),
        Some(v) => u32::try_from(v).map(Some).map_err(|_| CompileError::InvalidInt {
            row,
            field,
            value: raw.to_string(),
        }),
    }
}

/// Tri-state boolean: "true"/"false" case-insensitive, empty is
/// "unspecified".
pub fn tristate(row: usize, field: &'static str, raw: &str) -> Result<Option<bool>> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(Some(true)),
        "false" => Ok(Some(false)),
        _ => Err(CompileError::InvalidBool {
            row,
            field,
            value: raw.to_string(),
        }),
    }
}

/// Split a pipe-delimited cell into trimmed, non-empty elements, order
/// preserved. An empty cell yields an empty list.
pub fn split_pipe(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Coerce one shape-checked row into typed row data.
///
/// `price_ars` and `stock` stay `i64` here: their domains are business
/// rules, checked separately so that a negative price reads as a rule
/// violation rather than a parse failure.
pub fn coerce_row(checked: &CheckedRow) -> Result<RowData> {
    let row = checked.row;

    Ok(RowData {
        row,
        sku: checked.sku.clone(),
        id: checked.id.clone(),
        title: checked.title.clone(),
        category: checked.category.clone(),
        price_ars: int_required(row, "price_ars", &checked.price_ars)?,
        stock: int_required(row, "stock", &checked.stock)?,
        height_cm: dimension_opt(row, "height_cm", &checked.height_cm)?,
        width_cm: dimension_opt(row, "width_cm", &checked.width_cm)?,
        depth_cm: dimension_opt(row, "depth_cm", &checked.depth_cm)?,
        weight_g: dimension_opt(row, "weight_g", &checked.weight_g)?,
        shipping_class: checked.shipping_class.clone(),
        finish: checked.finish.clone(),
        food_safe: tristate(row, "food_safe", &checked.food_safe)?,
        microwave_safe: tristate(row, "microwave_safe", &checked.microwave_safe)?,
        dishwasher_safe: tristate(row, "dishwasher_safe", &checked.dishwasher_safe)?,
        description: checked.description.clone(),
        care: checked.care.clone(),
        tags: split_pipe(&checked.tags),
        photos: split_pipe(&checked.photos),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_opt_empty_is_unspecified() {
        assert_eq!(int_opt(2, "weight_g", "").expect("empty is ok"), None);
    }

    #[test]
    fn test_int_opt_zero_is_specified() {
        assert_eq!(int_opt(2, "weight_g", "0").expect("zero is ok"), Some(0));
    }

    #[test]
    fn test_int_opt_rejects_non_integers() {
        for bad in ["12abc", "3.5", "1_000", "dos", "0x10"] {
            let err = int_opt(2, "weight_g", bad).expect_err("should fail");
            match err {
                CompileError::InvalidInt { row: 2, field: "weight_g", value } => {
                    assert_eq!(value, bad);
                }
                other => panic!("Expected InvalidInt, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_dimension_opt_rejects_negative() {
        let err = dimension_opt(3, "height_cm", "-5").expect_err("should fail");
        match err {
            CompileError::InvalidInt { row: 3, field: "height_cm", value } => {
                assert_eq!(value, "-5");
            }
            other => panic!("Expected InvalidInt, got {:?}", other),
        }
    }

    #[test]
    fn test_tristate_values() {
        assert_eq!(tristate(2, "food_safe", "true").expect("ok"), Some(true));
        assert_eq!(tristate(2, "food_safe", "false").expect("ok"), Some(false));
        assert_eq!(tristate(2, "food_safe", "TRUE").expect("ok"), Some(true));
        assert_eq!(tristate(2, "food_safe", "False").expect("ok"), Some(false));
        assert_eq!(tristate(2, "food_safe", "").expect("ok"), None);
    }

    #[test]
    fn test_tristate_rejects_other_words() {
        for bad in ["yes", "no", "1", "0", "si"] {
            let err = tristate(4, "microwave_safe", bad).expect_err("should fail");
            match err {
                CompileError::InvalidBool { row: 4, field: "microwave_safe", value } => {
                    assert_eq!(value, bad);
                }
                other => panic!("Expected InvalidBool, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_split_pipe() {
        assert_eq!(split_pipe("a|b|c"), vec!["a", "b", "c"]);
        assert_eq!(split_pipe(" a | b "), vec!["a", "b"]);
        assert_eq!(split_pipe("a||b"), vec!["a", "b"]);
        assert_eq!(split_pipe("solo"), vec!["solo"]);
        assert!(split_pipe("").is_empty());
        assert!(split_pipe(" | | ").is_empty());
    }

    #[test]
    fn test_split_pipe_preserves_order() {
        assert_eq!(split_pipe("z|a|m"), vec!["z", "a", "m"]);
    }
}
