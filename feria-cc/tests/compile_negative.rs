//! Failure-path integration tests for the catalog compiler
//!
//! Every fatal class must abort the run with a diagnostic naming the
//! offending row, field and value, and must leave no artifact behind.

use feria_cc::compile::compile;
use feria_cc::CompileError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "sku,id,title,category,price_ars,stock,shipping_class,description,care,photos,height_cm,width_cm,depth_cm,weight_g,finish,food_safe,microwave_safe,dishwasher_safe,tags";

/// A row that passes every check, parameterized on the identifier pair.
fn valid_row(sku: &str, id: &str) -> String {
    format!("{sku},{id},Taza Nube,tazas,18500,1,small,Taza esmaltada a mano.,Lavar a mano.,IMG_0001.jpg,9,8,8,320,brillante,true,true,false,taza")
}

fn fixture(rows: &[String], photos: &[&str]) -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("create tempdir");
    let source = dir.path().join("products.csv");
    let assets = dir.path().join("assets");
    fs::create_dir(&assets).expect("create asset dir");
    for file in photos {
        fs::write(assets.join(file), b"\xFF\xD8\xFF\xD9").expect("write photo");
    }

    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    fs::write(&source, csv).expect("write csv");

    let out = dir.path().join("generated.rs");
    (dir, source, assets, out)
}

fn expect_failure(rows: &[String], photos: &[&str]) -> CompileError {
    let (dir, source, assets, out) = fixture(rows, photos);
    let err = compile(&source, &assets, &out).expect_err("compilation should fail");
    assert!(!out.exists(), "failed run must not write an artifact");
    drop(dir);
    err
}

#[test]
fn test_empty_required_field_aborts() {
    let row = valid_row("", "taza-nube");
    let err = expect_failure(&[row], &["IMG_0001.jpg"]);
    match err {
        CompileError::MissingField { row: 2, field: "sku" } => {}
        other => panic!("Expected MissingField for sku, got {:?}", other),
    }
}

#[test]
fn test_missing_column_aborts() {
    // No care column at all: the schema treats it as missing on every row.
    let dir = TempDir::new().expect("create tempdir");
    let source = dir.path().join("products.csv");
    let assets = dir.path().join("assets");
    fs::create_dir(&assets).expect("create asset dir");
    fs::write(assets.join("IMG_0001.jpg"), b"\xFF\xD8\xFF\xD9").expect("write photo");
    fs::write(
        &source,
        "sku,id,title,category,price_ars,stock,shipping_class,description,photos\n\
         BR-0001,taza-nube,Taza Nube,tazas,18500,1,small,Taza esmaltada.,IMG_0001.jpg\n",
    )
    .expect("write csv");
    let out = dir.path().join("generated.rs");

    let err = compile(&source, &assets, &out).expect_err("compilation should fail");
    match err {
        CompileError::MissingField { row: 2, field: "care" } => {}
        other => panic!("Expected MissingField for care, got {:?}", other),
    }
    assert!(!out.exists());
}

#[test]
fn test_unparseable_integer_names_field_and_value() {
    let row = "BR-0001,taza-nube,Taza Nube,tazas,12abc,1,small,Taza.,Lavar a mano.,IMG_0001.jpg,,,,,,,,,".to_string();
    let err = expect_failure(&[row], &["IMG_0001.jpg"]);
    let message = err.to_string();
    assert!(matches!(err, CompileError::InvalidInt { row: 2, .. }));
    assert!(message.contains("price_ars"));
    assert!(message.contains("12abc"));
}

#[test]
fn test_unparseable_boolean_names_field_and_value() {
    let row = "BR-0001,taza-nube,Taza Nube,tazas,18500,1,small,Taza.,Lavar a mano.,IMG_0001.jpg,,,,,,yes,,,".to_string();
    let err = expect_failure(&[row], &["IMG_0001.jpg"]);
    let message = err.to_string();
    assert!(matches!(err, CompileError::InvalidBool { row: 2, .. }));
    assert!(message.contains("food_safe"));
    assert!(message.contains("yes"));
}

#[test]
fn test_negative_price_aborts() {
    let row = "BR-0001,taza-nube,Taza Nube,tazas,-50,1,small,Taza.,Lavar a mano.,IMG_0001.jpg,,,,,,,,,".to_string();
    let err = expect_failure(&[row], &["IMG_0001.jpg"]);
    match err {
        CompileError::PriceOutOfRange { row: 2, value: -50 } => {}
        other => panic!("Expected PriceOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_stock_two_aborts() {
    let row = "BR-0001,taza-nube,Taza Nube,tazas,18500,2,small,Taza.,Lavar a mano.,IMG_0001.jpg,,,,,,,,,".to_string();
    let err = expect_failure(&[row], &["IMG_0001.jpg"]);
    match err {
        CompileError::StockOutOfRange { row: 2, value: 2 } => {}
        other => panic!("Expected StockOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_photos_with_no_entries_aborts() {
    // "|" survives the required-field check but splits to nothing.
    let row = "BR-0001,taza-nube,Taza Nube,tazas,18500,1,small,Taza.,Lavar a mano.,|,,,,,,,,,".to_string();
    let err = expect_failure(&[row], &["IMG_0001.jpg"]);
    assert!(matches!(err, CompileError::NoPhotos { row: 2 }));
}

#[test]
fn test_missing_photo_file_aborts() {
    let row = "BR-0001,taza-nube,Taza Nube,tazas,18500,1,small,Taza.,Lavar a mano.,IMG_99.jpg,,,,,,,,,".to_string();
    let err = expect_failure(&[row], &["IMG_0001.jpg"]);
    match err {
        CompileError::MissingPhoto { row: 2, ref file } => assert_eq!(file, "IMG_99.jpg"),
        other => panic!("Expected MissingPhoto, got {:?}", other),
    }
    assert!(err.to_string().contains("IMG_99.jpg"));
}

#[test]
fn test_duplicate_sku_aborts_on_second_row() {
    let rows = vec![
        valid_row("BR-0001", "taza-nube"),
        valid_row("BR-0001", "bowl-arena"),
    ];
    let err = expect_failure(&rows, &["IMG_0001.jpg"]);
    match err {
        CompileError::DuplicateSku { row: 3, ref value } => assert_eq!(value, "BR-0001"),
        other => panic!("Expected DuplicateSku, got {:?}", other),
    }
}

#[test]
fn test_duplicate_id_aborts_naming_row_and_value() {
    let rows = vec![
        valid_row("BR-0001", "ak-0001"),
        valid_row("BR-0002", "ak-0001"),
    ];
    let err = expect_failure(&rows, &["IMG_0001.jpg"]);
    match err {
        CompileError::DuplicateId { row: 3, ref value } => assert_eq!(value, "ak-0001"),
        other => panic!("Expected DuplicateId, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("Row 3"));
    assert!(message.contains("ak-0001"));
}

#[test]
fn test_missing_source_aborts() {
    let dir = TempDir::new().expect("create tempdir");
    let assets = dir.path().join("assets");
    fs::create_dir(&assets).expect("create asset dir");
    let out = dir.path().join("generated.rs");

    let err = compile(Path::new("/nonexistent/products.csv"), &assets, &out)
        .expect_err("missing source should fail");
    assert!(matches!(err, CompileError::SourceMissing(_)));
    assert!(!out.exists());
}

#[test]
fn test_missing_asset_dir_aborts_before_any_row() {
    let (dir, source, _assets, out) = fixture(&[valid_row("BR-0001", "taza-nube")], &[]);
    let missing = dir.path().join("no-such-assets");

    let err = compile(&source, &missing, &out).expect_err("missing asset dir should fail");
    assert!(matches!(err, CompileError::AssetDirMissing(_)));
    assert!(!out.exists());
}

#[test]
fn test_first_error_in_row_order_wins() {
    // Row 2 has a bad boolean, row 3 a bad integer; row 2 must be reported.
    let bad_bool = "BR-0001,taza-nube,Taza Nube,tazas,18500,1,small,Taza.,Lavar a mano.,IMG_0001.jpg,,,,,,quizás,,,".to_string();
    let bad_int = "BR-0002,bowl-arena,Bowl Arena,bowls,no-es-numero,1,small,Bowl.,Lavar a mano.,IMG_0001.jpg,,,,,,,,,".to_string();
    let err = expect_failure(&[bad_bool, bad_int], &["IMG_0001.jpg"]);
    assert!(matches!(err, CompileError::InvalidBool { row: 2, .. }));
}

#[test]
fn test_duplicate_reported_before_later_field_errors_in_same_row() {
    // Row 3 repeats the sku and also carries a bad price; the duplicate is
    // detected right after the shape check, so it wins.
    let first = valid_row("BR-0001", "taza-nube");
    let second = "BR-0001,bowl-arena,Bowl Arena,bowls,12abc,1,small,Bowl.,Lavar a mano.,IMG_0001.jpg,,,,,,,,,".to_string();
    let err = expect_failure(&[first, second], &["IMG_0001.jpg"]);
    assert!(matches!(err, CompileError::DuplicateSku { row: 3, .. }));
}

#[test]
fn test_failure_leaves_previous_artifact_untouched() {
    let (dir, source, assets, out) = fixture(
        &[valid_row("BR-0001", "taza-nube")],
        &["IMG_0001.jpg"],
    );

    // A catalog from an earlier, good run.
    compile(&source, &assets, &out).expect("seed compile should succeed");
    let previous = fs::read_to_string(&out).expect("read seed artifact");

    // Break the source and recompile.
    let mut csv = String::from(HEADER);
    csv.push('\n');
    csv.push_str(&valid_row("BR-0001", "taza-nube"));
    csv.push('\n');
    csv.push_str(&valid_row("BR-0001", "otra-pieza"));
    csv.push('\n');
    fs::write(&source, csv).expect("rewrite csv");

    compile(&source, &assets, &out).expect_err("duplicate sku should fail");
    let after = fs::read_to_string(&out).expect("artifact should still exist");
    assert_eq!(previous, after, "failed run must not touch the artifact");
    drop(dir);
}
