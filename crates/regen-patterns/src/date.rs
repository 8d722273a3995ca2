//! Calendar-date patterns.
//!
//! A date is three fields joined by one separator character. The second
//! separator is a backreference to the first, so "1/2/2024" matches while
//! "1/2.2024" does not even when both `/` and `.` are selected.

use crate::error::{PatternError, PatternResult};
use crate::fragment::group;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The separator is the second capture group in unlabelled patterns.
const SEPARATOR_BACKREFERENCE: &str = "\\2";
/// Engines that see named groups reject numbered backreferences, so labelled
/// patterns name the separator too.
const SEPARATOR_LABEL: &str = "sep";
const SEPARATOR_NAMED_BACKREFERENCE: &str = "\\k<sep>";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearDigits {
    Two,
    #[default]
    Four,
    Either,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOrder {
    #[default]
    #[serde(alias = "month_day_year")]
    Mdy,
    #[serde(alias = "day_month_year")]
    Dmy,
}

/// Characters allowed between the fields of a date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateSeparators {
    pub slash: bool,
    pub period: bool,
    /// Extra separator characters, each one allowed on its own.
    pub custom: Option<String>,
}

impl DateSeparators {
    /// Selected separators in selection order, without duplicates.
    pub fn chars(&self) -> Vec<char> {
        let mut chars = Vec::new();
        let builtin = [(self.slash, '/'), (self.period, '.')]
            .into_iter()
            .filter_map(|(selected, c)| selected.then_some(c));
        let custom = self.custom.iter().flat_map(|s| s.chars());
        for c in builtin.chain(custom) {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        chars
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOptions {
    pub separators: DateSeparators,
    pub enforce_leading_zero: bool,
    pub year_digits: YearDigits,
    pub field_order: FieldOrder,
    /// Emit `month`, `day` and `year` as named groups.
    pub label_groups: bool,
}

pub fn date_pattern(options: &DateOptions) -> PatternResult {
    let separators = options.separators.chars();
    if separators.is_empty() {
        debug!("rejected date options without a separator");
        return Err(PatternError::MissingSeparator);
    }

    let label = |name| options.label_groups.then_some(name);
    let month = group(label("month"), &month_body(options.enforce_leading_zero));
    let day = group(label("day"), &day_body(options.enforce_leading_zero));
    let year = group(label("year"), year_body(options.year_digits));
    let separator = group(label(SEPARATOR_LABEL), &separator_class(&separators));
    let backreference = if options.label_groups {
        SEPARATOR_NAMED_BACKREFERENCE
    } else {
        SEPARATOR_BACKREFERENCE
    };

    let (first, second) = match options.field_order {
        FieldOrder::Mdy => (month, day),
        FieldOrder::Dmy => (day, month),
    };
    let pattern = format!("{first}{separator}{second}{backreference}{year}");
    debug!(%pattern, "built date pattern");
    Ok(pattern)
}

fn single_digit(enforce_leading_zero: bool) -> &'static str {
    if enforce_leading_zero {
        "0[1-9]"
    } else {
        "0?[1-9]"
    }
}

fn month_body(enforce_leading_zero: bool) -> String {
    format!("1[0-2]|{}", single_digit(enforce_leading_zero))
}

fn day_body(enforce_leading_zero: bool) -> String {
    format!("3[0-1]|[1-2][0-9]|{}", single_digit(enforce_leading_zero))
}

fn year_body(digits: YearDigits) -> &'static str {
    match digits {
        YearDigits::Two => "[0-9]{2}",
        YearDigits::Four => "[0-9]{4}",
        YearDigits::Either => "[0-9]{4}|[0-9]{2}",
    }
}

/// A character class holding every separator, escaping class metacharacters.
fn separator_class(separators: &[char]) -> String {
    let mut class = String::from("[");
    for &c in separators {
        if matches!(c, '^' | '\\' | '-' | '[' | ']') {
            class.push('\\');
        }
        class.push(c);
    }
    class.push(']');
    class
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{capture, full_match};

    fn slash() -> DateSeparators {
        DateSeparators {
            slash: true,
            ..DateSeparators::default()
        }
    }

    fn build(options: DateOptions) -> String {
        date_pattern(&options).unwrap()
    }

    #[test]
    fn test_month_day_year() {
        let pattern = build(DateOptions {
            separators: slash(),
            ..DateOptions::default()
        });
        assert_eq!(
            pattern,
            r"(1[0-2]|0?[1-9])([/])(3[0-1]|[1-2][0-9]|0?[1-9])\2([0-9]{4})"
        );
        assert!(full_match(&pattern, "1/1/2024"));
        assert!(full_match(&pattern, "12/31/2024"));
        assert!(full_match(&pattern, "01/09/2024"));
        assert!(!full_match(&pattern, "1-1-2024"));
        assert!(!full_match(&pattern, "13/01/2024"));
        assert!(!full_match(&pattern, "1/32/2024"));
        assert!(!full_match(&pattern, "0/10/2024"));
        assert!(!full_match(&pattern, "1/1/24"));
    }

    #[test]
    fn test_day_month_year() {
        let pattern = build(DateOptions {
            separators: slash(),
            field_order: FieldOrder::Dmy,
            ..DateOptions::default()
        });
        assert!(full_match(&pattern, "31/12/2024"));
        assert!(!full_match(&pattern, "12/31/2024"));
    }

    #[test]
    fn test_enforced_leading_zero() {
        let pattern = build(DateOptions {
            separators: slash(),
            enforce_leading_zero: true,
            ..DateOptions::default()
        });
        assert_eq!(
            pattern,
            r"(1[0-2]|0[1-9])([/])(3[0-1]|[1-2][0-9]|0[1-9])\2([0-9]{4})"
        );
        assert!(full_match(&pattern, "01/05/2024"));
        assert!(!full_match(&pattern, "1/5/2024"));
    }

    #[test]
    fn test_year_digits() {
        let two = build(DateOptions {
            separators: slash(),
            year_digits: YearDigits::Two,
            ..DateOptions::default()
        });
        assert!(full_match(&two, "1/1/24"));
        assert!(!full_match(&two, "1/1/2024"));

        let either = build(DateOptions {
            separators: slash(),
            year_digits: YearDigits::Either,
            ..DateOptions::default()
        });
        assert!(full_match(&either, "1/1/24"));
        assert!(full_match(&either, "1/1/2024"));
        assert!(!full_match(&either, "1/1/202"));
    }

    #[test]
    fn test_separators_must_agree() {
        let pattern = build(DateOptions {
            separators: DateSeparators {
                slash: true,
                period: true,
                custom: None,
            },
            ..DateOptions::default()
        });
        assert!(pattern.contains("([/.])"));
        assert!(full_match(&pattern, "1/2/2024"));
        assert!(full_match(&pattern, "1.2.2024"));
        assert!(!full_match(&pattern, "1/2.2024"));
        assert!(!full_match(&pattern, "1.2/2024"));
    }

    #[test]
    fn test_custom_separators_are_escaped() {
        let pattern = build(DateOptions {
            separators: DateSeparators {
                slash: false,
                period: false,
                custom: Some(r"-^\ ".to_string()),
            },
            ..DateOptions::default()
        });
        assert!(pattern.contains(r"([\-\^\\ ])"));
        assert!(full_match(&pattern, "1-2-2024"));
        assert!(full_match(&pattern, "1^2^2024"));
        assert!(full_match(&pattern, r"1\2\2024"));
        assert!(full_match(&pattern, "1 2 2024"));
        assert!(!full_match(&pattern, "1/2/2024"));
    }

    #[test]
    fn test_duplicate_separators_collapse() {
        let separators = DateSeparators {
            slash: true,
            period: false,
            custom: Some("/.-.".to_string()),
        };
        assert_eq!(separators.chars(), vec!['/', '.', '-']);
    }

    #[test]
    fn test_labelled_groups() {
        let pattern = build(DateOptions {
            separators: slash(),
            label_groups: true,
            ..DateOptions::default()
        });
        assert_eq!(
            pattern,
            r"(?<month>1[0-2]|0?[1-9])(?<sep>[/])(?<day>3[0-1]|[1-2][0-9]|0?[1-9])\k<sep>(?<year>[0-9]{4})"
        );
        assert_eq!(capture(&pattern, "12/25/2024", "month").as_deref(), Some("12"));
        assert_eq!(capture(&pattern, "12/25/2024", "day").as_deref(), Some("25"));
        assert_eq!(capture(&pattern, "12/25/2024", "year").as_deref(), Some("2024"));
        assert!(!full_match(&pattern, "12/25.2024"));
    }

    #[test]
    fn test_labelled_groups_match_like_unlabelled() {
        let separators = DateSeparators {
            slash: true,
            period: true,
            custom: None,
        };
        let options = DateOptions {
            separators,
            field_order: FieldOrder::Dmy,
            year_digits: YearDigits::Either,
            ..DateOptions::default()
        };
        let plain = build(options.clone());
        let labelled = build(DateOptions {
            label_groups: true,
            ..options
        });
        assert!(labelled.contains(r"(?<sep>[/.])"));
        assert!(!labelled.contains(r"\2"));
        for input in ["25/12/2024", "25.12.24", "1.2.2024", "25/12.2024", "25.12/24", "32/1/2024"] {
            assert_eq!(
                full_match(&labelled, input),
                full_match(&plain, input),
                "input {input}"
            );
        }
        assert_eq!(capture(&labelled, "25.12.24", "sep").as_deref(), Some("."));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            date_pattern(&DateOptions::default()),
            Err(PatternError::MissingSeparator)
        );
        let empty_custom = DateOptions {
            separators: DateSeparators {
                custom: Some(String::new()),
                ..DateSeparators::default()
            },
            ..DateOptions::default()
        };
        assert_eq!(
            date_pattern(&empty_custom),
            Err(PatternError::MissingSeparator)
        );
    }

    #[test]
    fn test_idempotent() {
        let options = DateOptions {
            separators: slash(),
            year_digits: YearDigits::Either,
            label_groups: true,
            ..DateOptions::default()
        };
        assert_eq!(build(options.clone()), build(options));
    }

    #[test]
    fn test_deserialize_options() {
        let options: DateOptions = serde_json::from_str(
            r#"{"separators": {"period": true}, "year_digits": "either", "field_order": "dmy"}"#,
        )
        .unwrap();
        assert_eq!(options.separators.chars(), vec!['.']);
        assert_eq!(options.year_digits, YearDigits::Either);
        assert_eq!(options.field_order, FieldOrder::Dmy);
    }
}
