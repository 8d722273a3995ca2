//! North American phone-number patterns.

use crate::error::{PatternError, PatternResult};
use crate::fragment::alternation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

const ANY_AREA_CODE: &str = "[0-9]{3}";

/// Accepted phone layouts, ordered as they appear in the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneFormat {
    /// `(555) 123-4567`
    Parenthesized,
    /// `555-123-4567`
    Dashed,
    /// `5551234567`
    Unformatted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneOptions {
    /// Required area code; anything but three digits allows any area code.
    pub area_code: Option<String>,
    pub formats: BTreeSet<PhoneFormat>,
}

impl PhoneOptions {
    pub fn new<I>(formats: I) -> Self
    where
        I: IntoIterator<Item = PhoneFormat>,
    {
        Self {
            area_code: None,
            formats: formats.into_iter().collect(),
        }
    }

    pub fn area_code(mut self, area_code: impl Into<String>) -> Self {
        self.area_code = Some(area_code.into());
        self
    }
}

pub fn phone_pattern(options: &PhoneOptions) -> PatternResult {
    if options.formats.is_empty() {
        debug!("rejected phone options without a format");
        return Err(PatternError::MissingFormat);
    }

    let area = area_code(options.area_code.as_deref());
    let pattern = alternation(options.formats.iter().map(|format| match format {
        PhoneFormat::Parenthesized => format!("[(]{area}[)] [0-9]{{3}}-[0-9]{{4}}"),
        PhoneFormat::Dashed => format!("{area}-[0-9]{{3}}-[0-9]{{4}}"),
        PhoneFormat::Unformatted => format!("{area}[0-9]{{3}}[0-9]{{4}}"),
    }));
    debug!(%pattern, "built phone pattern");
    Ok(pattern)
}

fn area_code(code: Option<&str>) -> &str {
    match code {
        Some(code) if code.len() == 3 && code.bytes().all(|b| b.is_ascii_digit()) => code,
        _ => ANY_AREA_CODE,
    }
}
