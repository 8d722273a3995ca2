//! Turning command-line arguments or an options file into a pattern.

use crate::cli::{Command, DateArgs, DecimalArgs, IntegerArgs, PhoneArgs};
use crate::error::{Error, Result};
use regen_patterns::{
    anchor, build_pattern, DateOptions, DateSeparators, DecimalOptions, IntegerOptions,
    PatternError, PatternRequest, PatternResult, PhoneFormat, PhoneOptions, ValueClass,
};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// A request read from an options file, or the reason its class is unusable.
pub type LoadedRequest = std::result::Result<PatternRequest, PatternError>;

/// What a single invocation produced.
#[derive(Debug)]
pub struct Outcome {
    /// `None` when the options named no known value class.
    pub class: Option<ValueClass>,
    pub result: PatternResult,
}

/// Builds the pattern requested by `command`, anchoring it if asked.
///
/// Failures of the builders themselves are part of the [`Outcome`]; only
/// problems reading an options file are returned as errors.
pub fn generate(command: Command, anchored: bool) -> Result<Outcome> {
    let request = match command {
        Command::Integer(args) => PatternRequest::Integer(args.into()),
        Command::Decimal(args) => PatternRequest::Decimal(args.into()),
        Command::Date(args) => PatternRequest::Date(args.into()),
        Command::Phone(args) => PatternRequest::Phone(args.into()),
        Command::File { path } => match read_request(&path)? {
            Ok(request) => request,
            Err(e) => {
                return Ok(Outcome {
                    class: None,
                    result: Err(e),
                })
            }
        },
    };

    let class = request.value_class();
    info!(%class, "generating pattern");
    let result = build_pattern(&request).map(|pattern| {
        if anchored {
            anchor(&pattern)
        } else {
            pattern
        }
    });

    Ok(Outcome {
        class: Some(class),
        result,
    })
}

/// Reads a JSON options document from `path`, or stdin when `path` is `-`.
///
/// The outer error is an I/O or syntax problem; the inner one is an unknown
/// value class.
pub fn read_request(path: &Path) -> Result<LoadedRequest> {
    let content = if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        content
    } else {
        std::fs::read_to_string(path).map_err(|source| Error::ReadOptions {
            path: path.to_path_buf(),
            source,
        })?
    };
    debug!(path = %path.display(), bytes = content.len(), "read options file");
    parse_request(&content, path)
}

pub fn parse_request(content: &str, path: &Path) -> Result<LoadedRequest> {
    let parse_error = |source| Error::ParseOptions {
        path: path.to_path_buf(),
        source,
    };

    let mut document: Value = serde_json::from_str(content).map_err(parse_error)?;
    let Some(name) = document.get("class").and_then(Value::as_str) else {
        return Err(Error::MissingClass {
            path: path.to_path_buf(),
        });
    };

    let class = match name.parse::<ValueClass>() {
        Ok(class) => class,
        Err(e) => return Ok(Err(e)),
    };
    document["class"] = Value::String(class.to_string());

    let request = serde_json::from_value(document).map_err(parse_error)?;
    Ok(Ok(request))
}

impl From<IntegerArgs> for IntegerOptions {
    fn from(args: IntegerArgs) -> Self {
        IntegerOptions {
            max_digits: args.max_digits,
            allow_negative: args.negative,
            negative_zero_allowed: args.negative_zero,
            allow_leading_zeroes: args.leading_zeroes,
            comma_mode: args.commas.into(),
        }
    }
}

impl From<DecimalArgs> for DecimalOptions {
    fn from(args: DecimalArgs) -> Self {
        DecimalOptions {
            whole: args.whole.into(),
            max_fraction_digits: args.max_fraction_digits,
            allow_trailing_zeroes: args.trailing_zeroes,
        }
    }
}

impl From<DateArgs> for DateOptions {
    fn from(args: DateArgs) -> Self {
        DateOptions {
            separators: DateSeparators {
                slash: args.slash,
                period: args.period,
                custom: args.custom,
            },
            enforce_leading_zero: args.enforce_zero,
            year_digits: args.year.into(),
            field_order: args.order.into(),
            label_groups: args.labels,
        }
    }
}

impl From<PhoneArgs> for PhoneOptions {
    fn from(args: PhoneArgs) -> Self {
        let formats = [
            (args.parenthesized, PhoneFormat::Parenthesized),
            (args.dashed, PhoneFormat::Dashed),
            (args.unformatted, PhoneFormat::Unformatted),
        ]
        .into_iter()
        .filter_map(|(selected, format)| selected.then_some(format))
        .collect();

        PhoneOptions {
            area_code: args.area_code,
            formats,
        }
    }
}
