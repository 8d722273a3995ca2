use thiserror::Error;

/// Broad category of a [`PatternError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A digit-count field contains non-numeric text.
    NonNumericInput,
    /// A digit-count field is less than 1 or larger than a pattern can express.
    OutOfRangeInput,
    /// A required choice set (separators, phone formats) is empty.
    MissingSelection,
    /// The value class selector names no known builder.
    UnsupportedValueClass,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NonNumericInput => "non_numeric_input",
            ErrorKind::OutOfRangeInput => "out_of_range_input",
            ErrorKind::MissingSelection => "missing_selection",
            ErrorKind::UnsupportedValueClass => "unsupported_value_class",
        }
    }
}

/// Validation failure reported in place of a pattern.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Maximum Digits must be numerical.")]
    NonNumericDigits,
    #[error("Maximum Digits Before and After Decimal must be numerical.")]
    NonNumericDecimalDigits,
    #[error("Number of digits must be at least 1")]
    DigitsOutOfRange,
    #[error("Number of digits must be at most {}", crate::count::MAX_DIGIT_COUNT)]
    DigitsTooLarge,
    #[error("Please select a separator.")]
    MissingSeparator,
    #[error("You must select a format.")]
    MissingFormat,
    #[error("Unsupported value class")]
    UnsupportedValueClass { name: String },
}

impl PatternError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PatternError::NonNumericDigits | PatternError::NonNumericDecimalDigits => {
                ErrorKind::NonNumericInput
            }
            PatternError::DigitsOutOfRange | PatternError::DigitsTooLarge => {
                ErrorKind::OutOfRangeInput
            }
            PatternError::MissingSeparator | PatternError::MissingFormat => {
                ErrorKind::MissingSelection
            }
            PatternError::UnsupportedValueClass { .. } => ErrorKind::UnsupportedValueClass,
        }
    }
}

/// Either a pattern string or the reason none could be built.
pub type PatternResult = Result<String, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PatternError::DigitsOutOfRange.to_string(),
            "Number of digits must be at least 1"
        );
        assert_eq!(
            PatternError::DigitsTooLarge.to_string(),
            "Number of digits must be at most 1000"
        );
        assert_eq!(
            PatternError::MissingSeparator.to_string(),
            "Please select a separator."
        );
        assert_eq!(
            PatternError::UnsupportedValueClass {
                name: "time".to_string()
            }
            .to_string(),
            "Unsupported value class"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            PatternError::NonNumericDecimalDigits.kind(),
            ErrorKind::NonNumericInput
        );
        assert_eq!(PatternError::MissingFormat.kind(), ErrorKind::MissingSelection);
        assert_eq!(
            PatternError::DigitsOutOfRange.kind().as_str(),
            "out_of_range_input"
        );
    }
}
