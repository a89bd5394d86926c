//! Numeric samples that remember how they were written.
//!
//! Plural rule grammars can test the number of visible fraction digits (the
//! "v", "f" and "t" operands), so "1" and "1.0" are different samples even
//! though they have the same magnitude. `FixedDecimalValue` preserves the
//! written form exactly as it appeared in a source table.

use std::fmt;
use std::str::FromStr;

use icu_plurals::PluralOperands;
use serde::Serialize;
use winnow::combinator::{eof, opt, preceded};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::error::DataError;

/// An immutable numeric sample with its written fraction preserved.
///
/// Equality and ordering include the written fraction digits, so `1`,
/// `1.0`, `1.1` and `1.10` are four distinct values.
///
/// # Example
///
/// ```
/// use cldr_plurals::FixedDecimalValue;
///
/// let written = FixedDecimalValue::parse("1.0").unwrap();
/// let plain = FixedDecimalValue::parse("1").unwrap();
///
/// assert_ne!(written, plain);
/// assert_eq!(written.to_string(), "1.0");
/// assert_eq!(written.fraction_digits(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FixedDecimalValue {
    integer_part: u64,
    fraction_digits: u32,
    fraction_value: u64,
}

impl FixedDecimalValue {
    /// Parse a decimal literal token such as `"10"` or `"1.121"`.
    ///
    /// Leading and trailing whitespace is trimmed; anything that is not a
    /// plain non-negative decimal literal fails with
    /// [`DataError::NumericLiteral`].
    pub fn parse(token: &str) -> Result<Self, DataError> {
        let bad_literal = |message: &str| DataError::NumericLiteral {
            token: token.to_string(),
            message: message.to_string(),
        };

        let mut input = token.trim();
        let (integer, fraction) = literal(&mut input)
            .map_err(|_| bad_literal("expected a decimal literal such as 1 or 1.5"))?;

        let integer_part: u64 = integer
            .parse()
            .map_err(|_| bad_literal("integer part out of range"))?;

        match fraction {
            None => Ok(Self {
                integer_part,
                fraction_digits: 0,
                fraction_value: 0,
            }),
            Some(digits) => Ok(Self {
                integer_part,
                fraction_digits: digits.len() as u32,
                fraction_value: digits
                    .parse()
                    .map_err(|_| bad_literal("fraction part out of range"))?,
            }),
        }
    }

    /// The magnitude to the left of the decimal point.
    pub fn integer_part(&self) -> u64 {
        self.integer_part
    }

    /// How many fraction digits were written, including trailing zeros.
    pub fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }

    /// The written fraction digits as an integer (`"1.10"` gives 10).
    pub fn fraction_value(&self) -> u64 {
        self.fraction_value
    }

    /// Whether the sample was written without a decimal point.
    pub fn is_integer(&self) -> bool {
        self.fraction_digits == 0
    }

    /// The rule engine's operand form of this sample.
    ///
    /// Goes through the written string form so that visible-fraction
    /// operands survive the conversion.
    pub fn operands(&self) -> PluralOperands {
        PluralOperands::from_str(&self.to_string())
            .expect("rendered literal is a valid operand string")
    }
}

/// `take_while` the integer digits, optionally a dot and fraction digits,
/// then require end of input.
fn literal<'s>(input: &mut &'s str) -> ModalResult<(&'s str, Option<&'s str>)> {
    let integer = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let fraction =
        opt(preceded('.', take_while(1.., |c: char| c.is_ascii_digit()))).parse_next(input)?;
    eof.parse_next(input)?;
    Ok((integer, fraction))
}

impl fmt::Display for FixedDecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction_digits == 0 {
            write!(f, "{}", self.integer_part)
        } else {
            write!(
                f,
                "{}.{:0width$}",
                self.integer_part,
                self.fraction_value,
                width = self.fraction_digits as usize
            )
        }
    }
}

impl From<u64> for FixedDecimalValue {
    fn from(value: u64) -> Self {
        Self {
            integer_part: value,
            fraction_digits: 0,
            fraction_value: 0,
        }
    }
}

impl From<u32> for FixedDecimalValue {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<&FixedDecimalValue> for PluralOperands {
    fn from(value: &FixedDecimalValue) -> Self {
        value.operands()
    }
}
