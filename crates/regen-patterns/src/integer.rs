//! Whole-number patterns.

use crate::count::{deserialize_count, parse_count, CountError};
use crate::error::{PatternError, PatternResult};
use crate::fragment::{alternation, digits_upto, repeat_exactly, repeat_upto, DIGIT};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One thousands group, separator included.
const THOUSANDS_GROUP: &str = "(,[0-9]{3})";

/// Optional minus sign that only matches when a nonzero digit follows,
/// skipping any zeroes and group separators in between. The lookahead is not
/// bounded by the rest of the match, so this only holds for anchored patterns.
const NONZERO_NEGATIVE: &str = "(-(?=[0,]*[1-9]))?";

/// Whether digits may be grouped in threes with a comma.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommaMode {
    #[default]
    Never,
    Optional,
    Required,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegerOptions {
    /// Maximum number of digits as typed; blank or absent means unbounded.
    #[serde(deserialize_with = "deserialize_count")]
    pub max_digits: Option<String>,
    pub allow_negative: bool,
    pub negative_zero_allowed: bool,
    pub allow_leading_zeroes: bool,
    pub comma_mode: CommaMode,
}

impl IntegerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_digits(mut self, max_digits: impl Into<String>) -> Self {
        self.max_digits = Some(max_digits.into());
        self
    }

    pub fn negative(mut self, allow: bool, zero_allowed: bool) -> Self {
        self.allow_negative = allow;
        self.negative_zero_allowed = zero_allowed;
        self
    }

    pub fn leading_zeroes(mut self, allow: bool) -> Self {
        self.allow_leading_zeroes = allow;
        self
    }

    pub fn commas(mut self, mode: CommaMode) -> Self {
        self.comma_mode = mode;
        self
    }
}

/// Builds the pattern for whole numbers described by `options`.
pub fn integer_pattern(options: &IntegerOptions) -> PatternResult {
    let max_digits = parse_count(options.max_digits.as_deref()).map_err(|e| {
        debug!(max_digits = ?options.max_digits, "rejected integer digit count");
        match e {
            CountError::NonNumeric => PatternError::NonNumericDigits,
            CountError::OutOfRange => PatternError::DigitsOutOfRange,
            CountError::TooLarge => PatternError::DigitsTooLarge,
        }
    })?;

    let pattern = whole_number(options, max_digits);
    debug!(%pattern, "built integer pattern");
    Ok(pattern)
}

fn whole_number(options: &IntegerOptions, max_digits: Option<u32>) -> String {
    let (plain, grouped) = allowed_forms(options.comma_mode, max_digits);
    let sign = negative_prefix(options);

    let mut alternatives = Vec::new();
    if let Some(zero) = zero_literal(options) {
        alternatives.push(zero.to_string());
    }
    if plain {
        alternatives.push(format!(
            "{sign}{}",
            unformatted(options.allow_leading_zeroes, max_digits)
        ));
    }

    let mut exact = None;
    if grouped {
        let first = first_digit(options.allow_leading_zeroes);
        let forms = GroupedForms::new(first, max_digits);
        alternatives.push(format!("{sign}{}", forms.shorter));
        exact = forms.exact;
    }
    if let Some(exact) = exact {
        alternatives.push(format!("{sign}{exact}"));
    }

    alternation(alternatives)
}

/// Returns which forms are allowed as `(unformatted, grouped)`.
fn allowed_forms(mode: CommaMode, max_digits: Option<u32>) -> (bool, bool) {
    match max_digits {
        // Grouping needs at least four digits.
        Some(max) if max <= 3 => (true, false),
        _ => match mode {
            CommaMode::Never => (true, false),
            CommaMode::Optional => (true, true),
            CommaMode::Required => (false, true),
        },
    }
}

fn first_digit(leading_zeroes: bool) -> &'static str {
    if leading_zeroes {
        "[0-9]"
    } else {
        "[1-9]"
    }
}

/// Zero has to be spelled out when leading zeroes are banned, since the
/// other alternatives all start with a nonzero digit.
fn zero_literal(options: &IntegerOptions) -> Option<&'static str> {
    if options.allow_leading_zeroes {
        None
    } else if options.allow_negative && options.negative_zero_allowed {
        Some("-?0")
    } else {
        Some("0")
    }
}

fn negative_prefix(options: &IntegerOptions) -> &'static str {
    match (options.allow_negative, options.negative_zero_allowed) {
        (false, _) => "",
        (true, true) => "-?",
        (true, false) => NONZERO_NEGATIVE,
    }
}

fn unformatted(leading_zeroes: bool, max_digits: Option<u32>) -> String {
    match (leading_zeroes, max_digits) {
        (true, None) => format!("{DIGIT}+"),
        (true, Some(1)) => DIGIT.to_string(),
        (true, Some(max)) => format!("{DIGIT}{{1,{max}}}"),
        (false, None) => format!("[1-9]{DIGIT}*"),
        (false, Some(max)) => format!("[1-9]{}", digits_upto(max - 1)),
    }
}

/// Comma-grouped alternatives.
///
/// A bounded limit of `3n + r` digits can't be written as one leading group
/// followed by a range of full groups: a leading group of three digits is only
/// allowed with at most `n - 1` full groups behind it. `shorter` covers those
/// values and `exact` covers a leading group of at most `r` digits followed by
/// exactly `n` full groups.
struct GroupedForms {
    shorter: String,
    exact: Option<String>,
}

impl GroupedForms {
    fn new(first: &str, max_digits: Option<u32>) -> Self {
        let leading = |width: u32| format!("{first}{}", digits_upto(width - 1));

        let Some(max) = max_digits else {
            return Self {
                shorter: format!("{}{THOUSANDS_GROUP}*", leading(3)),
                exact: None,
            };
        };

        let full_groups = max / 3;
        let remainder = max % 3;
        let shorter = format!(
            "{}{}",
            leading(3),
            repeat_upto(THOUSANDS_GROUP, full_groups.saturating_sub(1))
        );
        let exact = (remainder > 0 && full_groups > 0).then(|| {
            format!(
                "{}{}",
                leading(remainder),
                repeat_exactly(THOUSANDS_GROUP, full_groups)
            )
        });

        Self { shorter, exact }
    }
}
