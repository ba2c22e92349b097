use serde::{Deserialize, Serialize};

/// How a text leaf breaks or truncates lines that do not fit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum LineBreakMode {
    #[default]
    WordWrapping,
    CharWrapping,
    Clipping,
    TruncatingHead,
    TruncatingTail,
    TruncatingMiddle,
}

impl LineBreakMode {
    /// Whether text in this mode may continue on a following line.
    pub fn wraps(self) -> bool {
        matches!(self, LineBreakMode::WordWrapping | LineBreakMode::CharWrapping)
    }
}
