//! Declared lengths: the sizing mode a box asks for before layout.
use crate::geometry::Axis;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// A fixed extent.
    Exact(f32),
    /// The parent's extent minus its padding and this box's margins.
    MatchParent,
    /// Shrink to the content (children or intrinsic content).
    WrapContent,
}

impl Default for Length {
    fn default() -> Self {
        Length::Exact(0.0)
    }
}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Length::Exact(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            Length::MatchParent => 1u8.hash(state),
            Length::WrapContent => 2u8.hash(state),
        }
    }
}

impl Eq for Length {}

impl Length {
    pub fn zero() -> Self {
        Length::Exact(0.0)
    }

    pub fn is_match_parent(&self) -> bool {
        matches!(self, Length::MatchParent)
    }

    pub fn is_wrap_content(&self) -> bool {
        matches!(self, Length::WrapContent)
    }

    /// The fixed value, or `None` for the two sentinel modes.
    pub fn exact(&self) -> Option<f32> {
        match self {
            Length::Exact(v) => Some(*v),
            _ => None,
        }
    }
}

/// The declared width and height of a box.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SizeInfo {
    pub width: Length,
    pub height: Length,
}

impl SizeInfo {
    pub fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }

    pub fn exact(width: f32, height: f32) -> Self {
        Self {
            width: Length::Exact(width),
            height: Length::Exact(height),
        }
    }

    pub fn along(&self, axis: Axis) -> Length {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact_zero() {
        assert_eq!(Length::default(), Length::Exact(0.0));
        assert_eq!(SizeInfo::default().along(Axis::Vertical), Length::zero());
    }

    #[test]
    fn test_sentinels_are_distinct_from_values() {
        assert!(Length::MatchParent.is_match_parent());
        assert!(!Length::Exact(-1.0).is_match_parent());
        assert_eq!(Length::WrapContent.exact(), None);
        assert_eq!(Length::Exact(12.5).exact(), Some(12.5));
    }
}
