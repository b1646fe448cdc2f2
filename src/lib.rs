#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;

/// A 1-based (row, col) coordinate in the source buffer, matching what an
/// editor would display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { row: 1, col: 1 }
    }
}

/// Returns the full text of the given 1-based row, without its trailing
/// newline. Rows past the end of the buffer come back empty.
pub fn get_line_at_row(source: &str, row: u32) -> &str {
    source.split('\n').nth(row as usize - 1).unwrap_or("")
}
