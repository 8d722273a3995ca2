//! Routing from a value class to its pattern builder.

use crate::date::{date_pattern, DateOptions};
use crate::decimal::{decimal_pattern, DecimalOptions};
use crate::error::{PatternError, PatternResult};
use crate::integer::{integer_pattern, IntegerOptions};
use crate::phone::{phone_pattern, PhoneOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The kind of value a pattern should match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueClass {
    Integer,
    Date,
    Decimal,
    Phone,
}

impl ValueClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueClass::Integer => "integer",
            ValueClass::Date => "date",
            ValueClass::Decimal => "decimal",
            ValueClass::Phone => "phone",
        }
    }
}

impl fmt::Display for ValueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueClass {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(ValueClass::Integer),
            "date" => Ok(ValueClass::Date),
            "decimal" | "float" => Ok(ValueClass::Decimal),
            "phone" => Ok(ValueClass::Phone),
            _ => Err(PatternError::UnsupportedValueClass {
                name: s.to_string(),
            }),
        }
    }
}

/// A value class together with the options for its builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "lowercase")]
pub enum PatternRequest {
    Integer(IntegerOptions),
    Date(DateOptions),
    Decimal(DecimalOptions),
    Phone(PhoneOptions),
}

impl PatternRequest {
    pub fn value_class(&self) -> ValueClass {
        match self {
            PatternRequest::Integer(_) => ValueClass::Integer,
            PatternRequest::Date(_) => ValueClass::Date,
            PatternRequest::Decimal(_) => ValueClass::Decimal,
            PatternRequest::Phone(_) => ValueClass::Phone,
        }
    }

    pub fn build(&self) -> PatternResult {
        build_pattern(self)
    }
}

/// Builds the pattern for `request` with the builder its class selects.
pub fn build_pattern(request: &PatternRequest) -> PatternResult {
    debug!(class = %request.value_class(), "dispatching pattern request");
    match request {
        PatternRequest::Integer(options) => integer_pattern(options),
        PatternRequest::Date(options) => date_pattern(options),
        PatternRequest::Decimal(options) => decimal_pattern(options),
        PatternRequest::Phone(options) => phone_pattern(options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateSeparators;
    use crate::phone::PhoneFormat;

    #[test]
    fn test_value_class_from_str() {
        assert_eq!("integer".parse::<ValueClass>(), Ok(ValueClass::Integer));
        assert_eq!("Float".parse::<ValueClass>(), Ok(ValueClass::Decimal));
        assert_eq!(" date ".parse::<ValueClass>(), Ok(ValueClass::Date));
        assert_eq!("phone".parse::<ValueClass>(), Ok(ValueClass::Phone));

        let err = "time".parse::<ValueClass>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported value class");
        assert_eq!(
            err,
            PatternError::UnsupportedValueClass {
                name: "time".to_string()
            }
        );
    }

    #[test]
    fn test_value_class_display_round_trips() {
        for class in [
            ValueClass::Integer,
            ValueClass::Date,
            ValueClass::Decimal,
            ValueClass::Phone,
        ] {
            assert_eq!(class.to_string().parse::<ValueClass>(), Ok(class));
        }
    }

    #[test]
    fn test_routes_to_each_builder() {
        let integer = PatternRequest::Integer(IntegerOptions::default());
        assert_eq!(integer.value_class(), ValueClass::Integer);
        assert_eq!(
            build_pattern(&integer),
            integer_pattern(&IntegerOptions::default())
        );

        let decimal = PatternRequest::Decimal(DecimalOptions::default());
        assert_eq!(
            build_pattern(&decimal),
            decimal_pattern(&DecimalOptions::default())
        );

        let date_options = DateOptions {
            separators: DateSeparators {
                period: true,
                ..DateSeparators::default()
            },
            ..DateOptions::default()
        };
        let date = PatternRequest::Date(date_options.clone());
        assert_eq!(date.build(), date_pattern(&date_options));

        let phone_options = PhoneOptions::new([PhoneFormat::Dashed]);
        let phone = PatternRequest::Phone(phone_options.clone());
        assert_eq!(phone.value_class(), ValueClass::Phone);
        assert_eq!(phone.build(), phone_pattern(&phone_options));
    }

    #[test]
    fn test_errors_pass_through() {
        let request = PatternRequest::Phone(PhoneOptions::default());
        assert_eq!(build_pattern(&request), Err(PatternError::MissingFormat));
    }

    #[test]
    fn test_deserialize_tagged_request() {
        let request: PatternRequest = serde_json::from_str(
            r#"{"class": "decimal", "max_digits": 3, "max_fraction_digits": "2"}"#,
        )
        .unwrap();
        assert_eq!(request.value_class(), ValueClass::Decimal);
        assert_eq!(
            request.build().unwrap(),
            "(0|[1-9][0-9]{0,2})[.](0|[0-9]?[1-9])"
        );
    }
}
