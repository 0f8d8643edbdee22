//! Extracting `(message, line, column)` from the compiler's stderr.
//!
//! The compiler reports a failure as a bold red `error:` header followed by a
//! position line:
//!
//! ```text
//! \x1b[1m\x1b[91merror\x1b[39m:\x1b[0m disallowed token
//! 5:12
//! ```
//!
//! The position line is read as `column:line` from its last two `:`-separated
//! fields. Note that the compiler's `--> file:line:column` source pointer puts
//! the line first, so feeding that pointer here swaps line and column.

use std::fmt;

/// Bold, bright red `error`, default foreground, `:`, reset.
pub const ERROR_HEADER: &str = "\x1b[1m\x1b[91merror\x1b[39m:\x1b[0m";

/// A compiler error located in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.message, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Recognized(Diagnostic),
    /// The first line did not start with [`ERROR_HEADER`].
    NotRecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticError {
    #[error("malformed diagnostic: missing position line after `{message}`")]
    MissingPosition { message: String },
    #[error("malformed diagnostic: position line `{text}` needs `column:line`")]
    MissingField { text: String },
    #[error("malformed diagnostic: `{field}` in position line `{text}` is not a number")]
    NotANumber { field: String, text: String },
}

/// Splits a stderr blob into lines, dropping a trailing `\r` from each.
fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn parse_field(field: &str, text: &str) -> Result<usize, DiagnosticError> {
    field.trim().parse().map_err(|_| DiagnosticError::NotANumber {
        field: field.to_string(),
        text: text.to_string(),
    })
}

/// Pulls the message and position out of a compiler error.
///
/// Returns [`Extraction::NotRecognized`] when the header is absent. Once the
/// header matched, a missing or non-numeric position line is an error.
///
/// # Example
/// ```
/// use agal_tokens::t_diagnostic::{extract, Extraction, ERROR_HEADER};
///
/// let stderr = format!("{} disallowed token\n5:12\n", ERROR_HEADER);
/// match extract(&stderr).unwrap() {
///     Extraction::Recognized(d) => {
///         assert_eq!(d.message, "disallowed token");
///         assert_eq!((d.line, d.column), (12, 5));
///     }
///     Extraction::NotRecognized => unreachable!(),
/// }
/// ```
pub fn extract(raw: &str) -> Result<Extraction, DiagnosticError> {
    let mut lines = split_lines(raw);
    let header = lines.next().unwrap_or_default();
    let Some(rest) = header.strip_prefix(ERROR_HEADER) else {
        return Ok(Extraction::NotRecognized);
    };
    let message = rest.trim().to_string();

    let Some(position) = lines.next() else {
        return Err(DiagnosticError::MissingPosition { message });
    };

    // column:line, read from the end; earlier fields are ignored.
    let mut fields = position.rsplit(':');
    let (line, column) = match (fields.next(), fields.next()) {
        (Some(line), Some(column)) => (line, column),
        _ => {
            return Err(DiagnosticError::MissingField {
                text: position.to_string(),
            })
        }
    };

    let line = parse_field(line, position)?;
    let column = parse_field(column, position)?;
    Ok(Extraction::Recognized(Diagnostic {
        message,
        line,
        column,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognized(raw: &str) -> Diagnostic {
        match extract(raw) {
            Ok(Extraction::Recognized(d)) => d,
            other => panic!("expected a diagnostic, got {:?}", other),
        }
    }

    #[test]
    fn strips_header_and_trims_message() {
        let d = recognized(&format!("{}foo bar\n1:1", ERROR_HEADER));
        assert_eq!(d.message, "foo bar");
        let d = recognized(&format!("{}   foo bar  \t\n1:1", ERROR_HEADER));
        assert_eq!(d.message, "foo bar");
    }

    #[test]
    fn position_line_is_column_then_line() {
        let d = recognized(&format!("{} x\n5:12", ERROR_HEADER));
        assert_eq!(d.column, 5);
        assert_eq!(d.line, 12);
    }

    #[test]
    fn leading_fields_are_ignored() {
        let d = recognized(&format!("{} x\nprefix:with:7:30\n", ERROR_HEADER));
        assert_eq!(d.column, 7);
        assert_eq!(d.line, 30);
    }

    #[test]
    fn tolerates_crlf() {
        let d = recognized(&format!("{} boom\r\n3:4\r\n", ERROR_HEADER));
        assert_eq!(d.message, "boom");
        assert_eq!((d.line, d.column), (4, 3));
    }

    #[test]
    fn other_headers_are_not_recognized() {
        assert_eq!(extract("warning: x\n5:12"), Ok(Extraction::NotRecognized));
        assert_eq!(extract("error: x\n5:12"), Ok(Extraction::NotRecognized));
        assert_eq!(extract(""), Ok(Extraction::NotRecognized));
        // Header must start the first line.
        assert_eq!(
            extract(&format!("note\n{} x\n1:1", ERROR_HEADER)),
            Ok(Extraction::NotRecognized)
        );
    }

    #[test]
    fn unrecognized_second_line_is_never_inspected() {
        assert_eq!(extract("warning: x\nnotanumber"), Ok(Extraction::NotRecognized));
    }

    #[test]
    fn non_numeric_position_is_malformed() {
        let err = extract(&format!("{} x\nnotanumber", ERROR_HEADER)).unwrap_err();
        assert!(matches!(err, DiagnosticError::MissingField { .. }));

        let err = extract(&format!("{} x\nfive:12", ERROR_HEADER)).unwrap_err();
        assert_eq!(
            err,
            DiagnosticError::NotANumber {
                field: "five".to_string(),
                text: "five:12".to_string(),
            }
        );
    }

    #[test]
    fn missing_position_line_is_malformed() {
        let err = extract(&format!("{} lonely", ERROR_HEADER)).unwrap_err();
        assert_eq!(
            err,
            DiagnosticError::MissingPosition {
                message: "lonely".to_string()
            }
        );
    }

    #[test]
    fn display_is_message_line_column() {
        let d = recognized(&format!("{}disallowed token\n5:12\n...", ERROR_HEADER));
        assert_eq!(d.to_string(), "disallowed token 12 5");
    }
}
