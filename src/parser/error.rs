//! Error types for reading layout markup.
use std::fmt;
use std::str::Utf8Error;
use thiserror::Error;

/// A position in the markup source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl From<(usize, usize)> for Location {
    fn from((line, col): (usize, usize)) -> Self {
        Self { line, col }
    }
}

impl From<roxmltree::TextPos> for Location {
    fn from(pos: roxmltree::TextPos) -> Self {
        Self {
            line: pos.row as usize,
            col: pos.col as usize,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("XML parsing error (roxmltree): {0}")]
    Roxmltree(#[from] roxmltree::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] Utf8Error),
}
