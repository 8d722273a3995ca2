//! Regular expression builders for common literal values.
//!
//! Each builder turns a set of options into a pattern matching one class of
//! values: integers, decimal numbers, calendar dates or phone numbers. Builders
//! are pure; the same options always produce the same pattern.
//!
//! Patterns are unanchored. Use [`anchor`] to require a whole-string match.
//!
//! # Example
//!
//! ```
//! use regen_patterns::{build_pattern, CommaMode, IntegerOptions, PatternRequest};
//!
//! let options = IntegerOptions::new()
//!     .max_digits("4")
//!     .commas(CommaMode::Optional);
//! let pattern = build_pattern(&PatternRequest::Integer(options)).unwrap();
//! assert_eq!(pattern, "(0|[1-9][0-9]{0,3}|[1-9][0-9]{0,2}|[1-9](,[0-9]{3}))");
//! ```
//!
//! Invalid options come back as an error whose message is meant for the user:
//!
//! ```
//! use regen_patterns::{date_pattern, DateOptions};
//!
//! let err = date_pattern(&DateOptions::default()).unwrap_err();
//! assert_eq!(err.to_string(), "Please select a separator.");
//! ```

mod count;
mod date;
mod decimal;
mod dispatch;
mod error;
mod fragment;
mod integer;
mod phone;

pub use date::{date_pattern, DateOptions, DateSeparators, FieldOrder, YearDigits};
pub use decimal::{decimal_pattern, DecimalOptions};
pub use dispatch::{build_pattern, PatternRequest, ValueClass};
pub use error::{ErrorKind, PatternError, PatternResult};
pub use integer::{integer_pattern, CommaMode, IntegerOptions};
pub use phone::{phone_pattern, PhoneFormat, PhoneOptions};

/// Wraps `pattern` so it only matches an entire string.
///
/// Integer patterns that ban negative zero check for a nonzero digit with a
/// lookahead, which can see past the end of an unanchored match. Searching
/// `-0,1` with leading zeroes and optional commas finds `-0`; anchor the
/// pattern when that matters.
pub fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}
