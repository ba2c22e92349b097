//! Sibling anchors used by relative containers.
use crate::geometry::Axis;
use crate::gravity::AlignParent;
use crate::ids::LayoutId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnchorType {
    #[default]
    None,
    /// Sit next to the target: my leading edge follows its trailing edge
    /// (or my trailing edge precedes its leading edge).
    Position,
    /// Share the target's edge on the same side.
    Align,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Anchor {
    pub kind: AnchorType,
    pub target_id: i64,
}

impl Anchor {
    pub fn new(kind: AnchorType, target_id: i64) -> Self {
        Self { kind, target_id }
    }

    pub fn align(target: LayoutId) -> Self {
        Self::new(AnchorType::Align, i64::from(target.get()))
    }

    pub fn position(target: LayoutId) -> Self {
        Self::new(AnchorType::Position, i64::from(target.get()))
    }

    /// The anchored sibling, if this anchor is in effect.
    pub fn target(&self) -> Option<LayoutId> {
        if self.kind == AnchorType::None {
            return None;
        }
        LayoutId::from_target(self.target_id)
    }
}

/// Every relative-layout constraint a box declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dependency {
    pub top: Option<Anchor>,
    pub left: Option<Anchor>,
    pub bottom: Option<Anchor>,
    pub right: Option<Anchor>,
    pub align_parent: AlignParent,
}

impl Dependency {
    /// Anchor on the leading edge of `axis` (left or top), if in effect.
    pub fn start_anchor(&self, axis: Axis) -> Option<Anchor> {
        let anchor = match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        };
        anchor.filter(|a| a.target().is_some())
    }

    /// Anchor on the trailing edge of `axis` (right or bottom), if in effect.
    pub fn end_anchor(&self, axis: Axis) -> Option<Anchor> {
        let anchor = match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        };
        anchor.filter(|a| a.target().is_some())
    }

    pub fn has_anchors(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .flatten()
            .any(|a| a.target().is_some())
    }
}
