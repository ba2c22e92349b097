//! Visibility, orientation and the gravity / align-parent bitsets.
use crate::geometry::Axis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Drawn and takes part in layout.
    #[default]
    Visible,
    /// Hidden on the host but still occupies layout space.
    Invisible,
    /// Hidden and collapsed to a zero size.
    Gone,
}

impl Visibility {
    pub fn is_gone(self) -> bool {
        self == Visibility::Gone
    }

    /// Whether the host view should be hidden.
    pub fn is_hidden(self) -> bool {
        self != Visibility::Visible
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The axis along which a linear container stacks its children.
    pub fn main_axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Horizontal,
            Orientation::Vertical => Axis::Vertical,
        }
    }
}

bitflags::bitflags! {
    /// Placement of content inside a box, or of a box inside a linear container.
    ///
    /// `LEFT` and `TOP` are the start positions of their axis. They are kept as
    /// bits so that a parsed value remembers what was written, but they are
    /// excluded from the axis masks: a gravity whose masked value is empty is
    /// start-aligned on that axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Gravity: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const CENTER_HORIZONTAL = 1 << 2;
        const TOP = 1 << 3;
        const BOTTOM = 1 << 4;
        const CENTER_VERTICAL = 1 << 5;
        const CENTER = Self::CENTER_HORIZONTAL.bits() | Self::CENTER_VERTICAL.bits();
        const HORIZONTAL_MASK = Self::RIGHT.bits() | Self::CENTER_HORIZONTAL.bits();
        const VERTICAL_MASK = Self::BOTTOM.bits() | Self::CENTER_VERTICAL.bits();
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Gravity::empty()
    }
}

impl Gravity {
    /// Keeps only the bits that act on `axis`.
    pub fn masked(self, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => self & Gravity::HORIZONTAL_MASK,
            Axis::Vertical => self & Gravity::VERTICAL_MASK,
        }
    }

    pub fn is_active(self, gravity: Gravity) -> bool {
        if gravity == Gravity::LEFT {
            return self.masked(Axis::Horizontal).is_empty();
        }
        if gravity == Gravity::TOP {
            return self.masked(Axis::Vertical).is_empty();
        }
        self.contains(gravity)
    }

    /// Trailing edge flag of `axis` (`RIGHT` or `BOTTOM`).
    pub fn end_of(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Gravity::RIGHT,
            Axis::Vertical => Gravity::BOTTOM,
        }
    }

    /// Centering flag of `axis`.
    pub fn center_of(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Gravity::CENTER_HORIZONTAL,
            Axis::Vertical => Gravity::CENTER_VERTICAL,
        }
    }
}

bitflags::bitflags! {
    /// Positions a relative-container child against the container itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AlignParent: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const CENTER_HORIZONTAL = 1 << 2;
        const TOP = 1 << 3;
        const BOTTOM = 1 << 4;
        const CENTER_VERTICAL = 1 << 5;
        const CENTER = Self::CENTER_HORIZONTAL.bits() | Self::CENTER_VERTICAL.bits();
        const HORIZONTAL_MASK = Self::LEFT.bits() | Self::RIGHT.bits() | Self::CENTER_HORIZONTAL.bits();
        const VERTICAL_MASK = Self::TOP.bits() | Self::BOTTOM.bits() | Self::CENTER_VERTICAL.bits();
    }
}

impl Default for AlignParent {
    fn default() -> Self {
        AlignParent::empty()
    }
}

impl AlignParent {
    pub fn masked(self, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => self & AlignParent::HORIZONTAL_MASK,
            Axis::Vertical => self & AlignParent::VERTICAL_MASK,
        }
    }

    pub fn is_active(self, align: AlignParent) -> bool {
        self.contains(align)
    }

    pub fn end_of(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => AlignParent::RIGHT,
            Axis::Vertical => AlignParent::BOTTOM,
        }
    }

    pub fn center_of(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => AlignParent::CENTER_HORIZONTAL,
            Axis::Vertical => AlignParent::CENTER_VERTICAL,
        }
    }
}
