//! The mutable box that the engine measures and arranges.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use trellis_traits::{HostView, IntrinsicContent};
use trellis_types::{
    Color, Dependency, EdgeInsets, Gravity, LayoutId, Orientation, Point, Rect, Size, SizeInfo,
    Visibility,
};

/// Index of a node inside its [`LayoutTree`](crate::LayoutTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearProps {
    pub orientation: Orientation,
    /// Zero means "sum of the children's weights".
    pub weight_sum: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeafKind {
    #[default]
    Plain,
    Text,
    Button,
    Image,
}

/// Which measurement and arrangement strategy applies to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxKind {
    Absolute,
    Linear(LinearProps),
    Relative,
    Leaf(LeafKind),
}

impl Default for BoxKind {
    fn default() -> Self {
        BoxKind::Leaf(LeafKind::Plain)
    }
}

bitflags::bitflags! {
    /// What a box can do, fixed when the box is built.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        const CONTAINER = 1 << 0;
        const TEXT_CONTENT = 1 << 1;
        const BUTTON_CONTENT = 1 << 2;
        const IMAGE_CONTENT = 1 << 3;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::empty()
    }
}

impl BoxKind {
    pub fn capabilities(&self) -> Capabilities {
        match self {
            BoxKind::Absolute | BoxKind::Linear(_) | BoxKind::Relative => Capabilities::CONTAINER,
            BoxKind::Leaf(LeafKind::Plain) => Capabilities::empty(),
            BoxKind::Leaf(LeafKind::Text) => Capabilities::TEXT_CONTENT,
            BoxKind::Leaf(LeafKind::Button) => Capabilities::BUTTON_CONTENT,
            BoxKind::Leaf(LeafKind::Image) => Capabilities::IMAGE_CONTENT,
        }
    }

    pub fn is_container(&self) -> bool {
        self.capabilities().contains(Capabilities::CONTAINER)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoxKind::Absolute => "Absolute",
            BoxKind::Linear(_) => "Linear",
            BoxKind::Relative => "Relative",
            BoxKind::Leaf(_) => "Leaf",
        }
    }
}

/// Non-owning link to the host view mirroring a node.
#[derive(Clone, Default)]
pub struct HostLink(Option<Weak<RefCell<dyn HostView>>>);

impl HostLink {
    pub fn new(view: &Rc<RefCell<dyn HostView>>) -> Self {
        Self(Some(Rc::downgrade(view)))
    }

    /// The view, if it is still alive.
    pub fn upgrade(&self) -> Option<Rc<RefCell<dyn HostView>>> {
        self.0.as_ref().and_then(Weak::upgrade)
    }
}

impl fmt::Debug for HostLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(_) => f.write_str("HostLink(attached)"),
            None => f.write_str("HostLink(detached)"),
        }
    }
}

/// One box in the layout tree.
///
/// Declared fields are set when the box is built and never change
/// afterwards. `size`, `origin` and `frame` are scratch results overwritten
/// by every layout pass.
#[derive(Debug, Default)]
pub struct LayoutNode {
    pub layout_id: Option<LayoutId>,
    /// Markup tag the node was built from, for diagnostics.
    pub tag: String,
    pub kind: BoxKind,
    pub capabilities: Capabilities,
    pub size_info: SizeInfo,
    pub margin: EdgeInsets,
    pub padding: EdgeInsets,
    pub visibility: Visibility,
    pub weight: f32,
    pub gravity: Gravity,
    pub layout_gravity: Gravity,
    pub dependency: Dependency,
    pub background: Option<Color>,
    pub content: Option<Box<dyn IntrinsicContent>>,

    pub(crate) size: Size,
    pub(crate) origin: Point,
    pub(crate) frame: Rect,
    pub(crate) arranged: bool,
    /// Sum of the visible children's extents plus margins, per axis.
    /// Only maintained for linear containers.
    pub(crate) content_sum: Size,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) host: HostLink,
}

impl LayoutNode {
    pub fn new(kind: BoxKind) -> Self {
        Self {
            kind,
            capabilities: kind.capabilities(),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_id(mut self, id: LayoutId) -> Self {
        self.layout_id = Some(id);
        self
    }

    pub fn with_size_info(mut self, size_info: SizeInfo) -> Self {
        self.size_info = size_info;
        self
    }

    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_layout_gravity(mut self, gravity: Gravity) -> Self {
        self.layout_gravity = gravity;
        self
    }

    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependency = dependency;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_content(mut self, content: Box<dyn IntrinsicContent>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn is_container(&self) -> bool {
        self.capabilities.contains(Capabilities::CONTAINER)
    }

    pub fn is_gone(&self) -> bool {
        self.visibility.is_gone()
    }

    /// Measured size from the last pass.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Position within the parent from the last pass.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Frame committed by the last arrange pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn host(&self) -> Option<Rc<RefCell<dyn HostView>>> {
        self.host.upgrade()
    }
}
