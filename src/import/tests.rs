#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;

use super::*;

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_basic() {
    assert_eq!(parse_amount("100.50").unwrap(), dec!(100.50));
    assert_eq!(parse_amount("42").unwrap(), dec!(42));
}

#[test]
fn test_parse_amount_with_currency() {
    assert_eq!(parse_amount("$1,234.56").unwrap(), dec!(1234.56));
    assert_eq!(parse_amount("$0.01").unwrap(), dec!(0.01));
}

#[test]
fn test_parse_amount_quoted_and_padded() {
    assert_eq!(parse_amount("\"100.00\"").unwrap(), dec!(100.00));
    assert_eq!(parse_amount("  99.99  ").unwrap(), dec!(99.99));
}

#[test]
fn test_parse_amount_empty_is_error() {
    assert!(parse_amount("").is_err());
    assert!(parse_amount("   ").is_err());
}

#[test]
fn test_parse_amount_garbage_is_error() {
    assert!(parse_amount("ten dollars").is_err());
}

#[test]
fn test_parse_amount_negative() {
    // Funds deltas may be negative; item files reject these later via validation
    assert_eq!(parse_amount("-42.99").unwrap(), dec!(-42.99));
}

// ── load_items ────────────────────────────────────────────────

#[test]
fn test_load_items_with_header() {
    let file = make_csv_file(
        "item_code,description,unit_price,quantity,category\n\
         01_001,Occupational therapy,$193.99,10,Core\n\
         15_056,Speech assessment,86.79,4,Capacity Building\n",
    );
    let items = load_items(file.path(), 5).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].plan_id, 5);
    assert_eq!(items[0].item_code, "01_001");
    assert_eq!(items[0].unit_price, dec!(193.99));
    assert_eq!(items[0].quantity, 10);
    assert_eq!(items[0].category.as_deref(), Some("Core"));
    assert_eq!(items[1].line_total(), dec!(347.16));
}

#[test]
fn test_load_items_without_header() {
    let file = make_csv_file("01_001,Therapy,50.00,2\n");
    let items = load_items(file.path(), 1).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
    assert!(items[0].category.is_none());
}

#[test]
fn test_load_items_zero_quantity_rejected() {
    let file = make_csv_file("01_001,Therapy,50.00,0\n");
    let err = load_items(file.path(), 1).unwrap_err();
    assert!(format!("{err:#}").contains("Row 1"));
}

#[test]
fn test_load_items_zero_price_rejected() {
    let file = make_csv_file("01_001,Therapy,0.00,2\n");
    assert!(load_items(file.path(), 1).is_err());
}

#[test]
fn test_load_items_bad_quantity_has_row_context() {
    let file = make_csv_file(
        "01_001,Therapy,50.00,2\n\
         01_002,Assessment,80.00,two\n",
    );
    let err = load_items(file.path(), 1).unwrap_err();
    assert!(format!("{err:#}").contains("Row 2"));
}

#[test]
fn test_load_items_empty_file_is_error() {
    let file = make_csv_file("");
    assert!(load_items(file.path(), 1).is_err());
}

#[test]
fn test_load_items_header_only_yields_no_items() {
    let file = make_csv_file("item_code,description,unit_price,quantity\n");
    let items = load_items(file.path(), 1).unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_load_items_total_is_exact() {
    let file = make_csv_file(
        "a,One,33.33,3\n\
         b,Two,0.01,1\n",
    );
    let items = load_items(file.path(), 1).unwrap();
    let total: Decimal = items.iter().map(|i| i.line_total()).sum();
    assert_eq!(total, dec!(100.00));
}

// ── load_catalog ──────────────────────────────────────────────

#[test]
fn test_load_catalog_with_header() {
    let file = make_csv_file(
        "item_code,description,category,unit_price\n\
         01_001,Occupational therapy,Core,$193.99\n\
         15_056,Speech assessment,,86.79\n",
    );
    let entries = load_catalog(file.path()).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].category.as_deref(), Some("Core"));
    assert_eq!(entries[0].unit_price, dec!(193.99));
    assert!(entries[1].category.is_none());
}

#[test]
fn test_load_catalog_bad_price_has_row_context() {
    let file = make_csv_file(
        "01_001,Therapy,Core,193.99\n\
         01_002,Assessment,Core,free\n",
    );
    let err = load_catalog(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Row 2"));
}
