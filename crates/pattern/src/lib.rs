//! Pattern codec - the flat text board encoding
//!
//! A pattern file is exactly `rows` lines of exactly `cols` letter codes,
//! one letter per gem (`R`, `V`, `B`), left to right, top to bottom. There
//! is no code for Empty: patterns describe fully-populated boards, the form
//! a board has right after it is generated or loaded.
//!
//! Import is all-or-nothing: a wrong line count, a wrong line width, or an
//! unrecognized character rejects the entire text and no layout is built.
//!
//! # Example
//!
//! ```
//! use same_game_pattern::{parse, render};
//!
//! let text = "RVB\nBVR\n";
//! let layout = parse(text, 2, 3).unwrap();
//! assert_eq!(render(&layout), text);
//! ```

use thiserror::Error;

use same_game_types::{GemKind, GemLayout};

/// Rejection reasons for a pattern import
///
/// Any one of these rejects the whole text; partial layouts are never
/// produced.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized gem code {ch:?} at row {row}, column {col}")]
    UnknownCode { row: usize, col: usize, ch: char },
}

/// Parse a pattern text into a layout with the expected dimensions
pub fn parse(text: &str, rows: usize, cols: usize) -> Result<GemLayout, PatternError> {
    let mut gems = Vec::with_capacity(rows * cols);
    let mut found_rows = 0;

    for (row, line) in text.lines().enumerate() {
        found_rows += 1;
        if found_rows > rows {
            // Count the rest so the error reports the real line count.
            continue;
        }

        let width = line.chars().count();
        if width != cols {
            return Err(PatternError::RowWidth {
                row,
                expected: cols,
                found: width,
            });
        }

        for (col, ch) in line.chars().enumerate() {
            match GemKind::from_letter(ch) {
                Some(kind) => gems.push(kind),
                None => return Err(PatternError::UnknownCode { row, col, ch }),
            }
        }
    }

    if found_rows != rows {
        return Err(PatternError::RowCount {
            expected: rows,
            found: found_rows,
        });
    }

    Ok(GemLayout::new(rows, cols, gems))
}

/// Render a layout as pattern text, one newline-terminated line per row
pub fn render(layout: &GemLayout) -> String {
    let mut text = String::with_capacity(layout.rows() * (layout.cols() + 1));
    for row in layout.iter_rows() {
        for gem in row {
            text.push(gem.letter());
        }
        text.push('\n');
    }
    text
}
