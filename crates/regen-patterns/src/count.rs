//! Digit-count fields.
//!
//! Counts such as "maximum digits" arrive as the text the user typed. Blank
//! text means no limit; anything else must be an optionally signed decimal
//! number, with any fractional part truncated.

use serde::{Deserialize, Deserializer};
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{opt, preceded, terminated};
use winnow::prelude::*;
use winnow::token::one_of;

/// Largest count accepted. Regex engines cap bounded repetition well below
/// `u32::MAX`.
pub const MAX_DIGIT_COUNT: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CountError {
    NonNumeric,
    OutOfRange,
    TooLarge,
}

/// Parses a digit-count field. `Ok(None)` means the field was left blank.
pub(crate) fn parse_count(text: Option<&str>) -> Result<Option<u32>, CountError> {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let mut input = text;
    let (sign, digits) = number
        .parse_next(&mut input)
        .map_err(|_| CountError::NonNumeric)?;
    if !input.is_empty() {
        return Err(CountError::NonNumeric);
    }
    if sign == Some('-') {
        return Err(CountError::OutOfRange);
    }

    // Digits only, so a parse failure means the value overflowed.
    let value: u32 = digits.parse().map_err(|_| CountError::TooLarge)?;
    if value < 1 {
        return Err(CountError::OutOfRange);
    }
    if value > MAX_DIGIT_COUNT {
        return Err(CountError::TooLarge);
    }
    Ok(Some(value))
}

/// Returns true if the field is blank or holds numeric text, regardless of range.
pub(crate) fn is_numeric_or_blank(text: Option<&str>) -> bool {
    !matches!(parse_count(text), Err(CountError::NonNumeric))
}

fn number<'a>(input: &mut &'a str) -> ModalResult<(Option<char>, &'a str)> {
    terminated(
        (opt(one_of(['+', '-'])), digit1),
        opt(preceded('.', digit0)),
    )
    .parse_next(input)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountField {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Accepts a count given either as a JSON number or as a string.
pub(crate) fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<CountField>::deserialize(deserializer)?;
    Ok(field.map(|field| match field {
        CountField::Integer(n) => n.to_string(),
        CountField::Float(n) => n.to_string(),
        CountField::Text(text) => text,
    }))
}
