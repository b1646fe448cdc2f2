use std::fmt::Display;

use thiserror::Error;

use crate::{get_line_at_row, Position};

/// How severe a diagnostic is. Warnings return control to the caller after
/// reporting; errors are fatal to the whole run, and the top-level driver is
/// responsible for turning one into a process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    internal_error: ErrorImpl,
    severity: Severity,
    position: Position,
}

impl Diagnostic {
    pub fn new(internal_error: ErrorImpl, severity: Severity, position: Position) -> Self {
        Diagnostic {
            internal_error,
            severity,
            position,
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_severity(&self) -> Severity {
        self.severity
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("Use of a single '&' is invalid")]
    LoneAmpersand,
    #[error("Use of a single '|' is invalid")]
    LoneBar,
    #[error("Could not open file \"{file}\"")]
    UnreadableFile { file: String },
}

/// Plain reporting path for diagnostics without a source position, such as
/// an unreadable input file.
pub fn report(severity: Severity, context: &str) {
    println!("{}: {}", severity, context);
}

/// Positioned reporting path: prints the header, the offending source line,
/// and a caret under the offending column.
pub fn report_at(diagnostic: &Diagnostic, source: &str) {
    println!("{}", render_at(diagnostic, source));
}

/// Renders a positioned diagnostic:
///
/// ```text
/// ERROR: LEXER: Line 1:11 Use of a single '&' is invalid
/// int x = 1 & 2;
///           ^
/// ```
pub fn render_at(diagnostic: &Diagnostic, source: &str) -> String {
    let Position { row, col } = diagnostic.get_position();
    let line = get_line_at_row(source, row);
    let padding = " ".repeat(col as usize - 1);

    format!(
        "{}: LEXER: Line {}:{} {}\n{}\n{}^",
        diagnostic.get_severity(),
        row,
        col,
        diagnostic.message(),
        line,
        padding
    )
}
