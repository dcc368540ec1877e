#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

#[test]
fn test_format_basic() {
    assert_eq!(format_amount(dec!(10)), "$10.00");
    assert_eq!(format_amount(dec!(10.5)), "$10.50");
    assert_eq!(format_amount(dec!(0.01)), "$0.01");
}

#[test]
fn test_format_zero() {
    assert_eq!(format_amount(Decimal::ZERO), "$0.00");
}

#[test]
fn test_format_negative() {
    assert_eq!(format_amount(dec!(-12.5)), "-$12.50");
    assert_eq!(format_amount(dec!(-0.01)), "-$0.01");
}

#[test]
fn test_format_thousands_grouping() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
    assert_eq!(format_amount(dec!(-1000000)), "-$1,000,000.00");
}

#[test]
fn test_format_rounds_to_cents() {
    assert_eq!(format_amount(dec!(1.004)), "$1.00");
    assert_eq!(format_amount(dec!(99.999)), "$100.00");
}

#[test]
fn test_format_half_cent_rounds_away_from_zero() {
    assert_eq!(format_amount(dec!(1.005)), "$1.01");
    assert_eq!(format_amount(dec!(-1.005)), "-$1.01");
    assert_eq!(format_amount(dec!(2.675)), "$2.68");
}

#[test]
fn test_format_three_digit_no_grouping() {
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}
