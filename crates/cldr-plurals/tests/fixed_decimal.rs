//! Tests for written-form decimal sample values.

use cldr_plurals::{DataError, FixedDecimalValue};

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn parse_integer_token() {
    let value = FixedDecimalValue::parse("10").unwrap();
    assert_eq!(value.integer_part(), 10);
    assert_eq!(value.fraction_digits(), 0);
    assert!(value.is_integer());
}

#[test]
fn parse_decimal_token_keeps_written_fraction() {
    let value = FixedDecimalValue::parse("1.121").unwrap();
    assert_eq!(value.integer_part(), 1);
    assert_eq!(value.fraction_digits(), 3);
    assert_eq!(value.fraction_value(), 121);
}

#[test]
fn parse_trims_whitespace() {
    let value = FixedDecimalValue::parse(" 2.0 ").unwrap();
    assert_eq!(value.to_string(), "2.0");
}

#[test]
fn parse_rejects_malformed_tokens() {
    for token in ["", "1.", ".5", "1.2.3", "abc", "1,5", "-1", "1e3"] {
        let err = FixedDecimalValue::parse(token).unwrap_err();
        assert!(
            matches!(err, DataError::NumericLiteral { .. }),
            "token {token:?} should fail as a numeric literal, got {err:?}"
        );
    }
}

#[test]
fn parse_error_names_the_token() {
    let err = FixedDecimalValue::parse("1.2.3").unwrap_err();
    assert!(err.to_string().contains("1.2.3"));
}

// =========================================================================
// Identity
// =========================================================================

#[test]
fn written_fraction_digits_distinguish_values() {
    let plain = FixedDecimalValue::parse("1").unwrap();
    let one_digit = FixedDecimalValue::parse("1.0").unwrap();
    let tenth = FixedDecimalValue::parse("1.1").unwrap();
    let two_digits = FixedDecimalValue::parse("1.10").unwrap();

    assert_ne!(plain, one_digit);
    assert_ne!(one_digit, tenth);
    assert_ne!(tenth, two_digits);
}

#[test]
fn equal_written_forms_are_equal() {
    assert_eq!(
        FixedDecimalValue::parse("1.50").unwrap(),
        FixedDecimalValue::parse("1.50").unwrap()
    );
    assert_eq!(
        FixedDecimalValue::parse("7").unwrap(),
        FixedDecimalValue::from(7u64)
    );
}

// =========================================================================
// Display
// =========================================================================

#[test]
fn display_round_trips_the_written_form() {
    for token in ["0", "0.0", "1.10", "2.1", "10", "1.121"] {
        let value = FixedDecimalValue::parse(token).unwrap();
        assert_eq!(value.to_string(), token);
    }
}

#[test]
fn display_pads_leading_fraction_zeros() {
    let value = FixedDecimalValue::parse("3.04").unwrap();
    assert_eq!(value.to_string(), "3.04");
}
