pub mod anchor;
pub mod color;
pub mod font;
pub mod geometry;
pub mod gravity;
pub mod ids;
pub mod length;

pub use anchor::{Anchor, AnchorType, Dependency};
pub use color::Color;
pub use font::FontSpec;
pub use geometry::{Axis, EdgeInsets, Point, Rect, Size};
pub use gravity::{AlignParent, Gravity, Orientation, Visibility};
pub use ids::LayoutId;
pub use length::{Length, SizeInfo};
