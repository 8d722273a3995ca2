//! Decimal-number patterns: a whole-number part, a point, and a fraction.

use crate::count::{deserialize_count, is_numeric_or_blank, parse_count, CountError};
use crate::error::{PatternError, PatternResult};
use crate::fragment::{alternation, digits_upto, DIGIT};
use crate::integer::{integer_pattern, IntegerOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimalOptions {
    /// Rules for the digits before the point.
    #[serde(flatten)]
    pub whole: IntegerOptions,
    /// Maximum number of digits after the point; blank or absent means unbounded.
    #[serde(deserialize_with = "deserialize_count")]
    pub max_fraction_digits: Option<String>,
    pub allow_trailing_zeroes: bool,
}

impl DecimalOptions {
    pub fn new(whole: IntegerOptions) -> Self {
        Self {
            whole,
            ..Self::default()
        }
    }

    pub fn max_fraction_digits(mut self, max: impl Into<String>) -> Self {
        self.max_fraction_digits = Some(max.into());
        self
    }

    pub fn trailing_zeroes(mut self, allow: bool) -> Self {
        self.allow_trailing_zeroes = allow;
        self
    }
}

pub fn decimal_pattern(options: &DecimalOptions) -> PatternResult {
    if !is_numeric_or_blank(options.whole.max_digits.as_deref())
        || !is_numeric_or_blank(options.max_fraction_digits.as_deref())
    {
        debug!(
            max_digits = ?options.whole.max_digits,
            max_fraction_digits = ?options.max_fraction_digits,
            "rejected decimal digit counts"
        );
        return Err(PatternError::NonNumericDecimalDigits);
    }

    let whole = integer_pattern(&options.whole)?;
    let max_fraction =
        parse_count(options.max_fraction_digits.as_deref()).map_err(|e| match e {
            CountError::TooLarge => PatternError::DigitsTooLarge,
            _ => PatternError::DigitsOutOfRange,
        })?;

    let pattern = format!(
        "{whole}[.]{}",
        fraction(max_fraction, options.allow_trailing_zeroes)
    );
    debug!(%pattern, "built decimal pattern");
    Ok(pattern)
}

/// A lone `0`, or digits whose last one may only be zero when trailing
/// zeroes are allowed.
fn fraction(max_digits: Option<u32>, trailing_zeroes: bool) -> String {
    let last = if trailing_zeroes { "[0-9]" } else { "[1-9]" };
    let body = match max_digits {
        None => format!("{DIGIT}*"),
        Some(max) => digits_upto(max - 1),
    };
    alternation(["0".to_string(), format!("{body}{last}")])
}
