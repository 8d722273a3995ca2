use crate::request::Outcome;
use regen_patterns::ValueClass;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
    stderr: StandardStream,
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    class: Option<ValueClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

impl<'a> Report<'a> {
    fn new(outcome: &'a Outcome) -> Self {
        match &outcome.result {
            Ok(pattern) => Self {
                class: outcome.class,
                pattern: Some(pattern.as_str()),
                error: None,
                kind: None,
            },
            Err(e) => Self {
                class: outcome.class,
                pattern: None,
                error: Some(e.to_string()),
                kind: Some(e.kind().as_str()),
            },
        }
    }
}

impl Output {
    pub fn new(color: bool, json: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
            stderr: StandardStream::stderr(color_choice),
            json,
        }
    }

    /// Prints the pattern on stdout, or the error on stderr.
    ///
    /// In JSON mode both go to stdout as a single object.
    pub fn print_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        if self.json {
            let report = serde_json::to_string(&Report::new(outcome))?;
            writeln!(self.stdout, "{}", report)?;
            return self.stdout.flush();
        }

        match &outcome.result {
            Ok(pattern) => {
                writeln!(self.stdout, "{}", pattern)?;
                self.stdout.flush()
            }
            Err(e) => {
                let _ = self
                    .stderr
                    .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
                write!(self.stderr, "error:")?;
                let _ = self.stderr.reset();
                writeln!(self.stderr, " {}", e)?;
                self.stderr.flush()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regen_patterns::PatternError;

    #[test]
    fn test_report_for_pattern() {
        let outcome = Outcome {
            class: Some(ValueClass::Integer),
            result: Ok("(0|[1-9][0-9]*)".to_string()),
        };
        let json = serde_json::to_string(&Report::new(&outcome)).unwrap();
        assert_eq!(json, r#"{"class":"integer","pattern":"(0|[1-9][0-9]*)"}"#);
    }

    #[test]
    fn test_report_for_error() {
        let outcome = Outcome {
            class: None,
            result: Err(PatternError::UnsupportedValueClass {
                name: "time".to_string(),
            }),
        };
        let json = serde_json::to_string(&Report::new(&outcome)).unwrap();
        assert_eq!(
            json,
            r#"{"class":null,"error":"Unsupported value class","kind":"unsupported_value_class"}"#
        );
    }
}
