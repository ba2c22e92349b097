use crate::{BoxKind, LayoutConfig, LayoutEngine, LayoutNode, LayoutTree, LeafKind, LinearProps, NodeId};
use trellis_traits::IntrinsicContent;
use trellis_types::{Length, Orientation, Rect, Size, SizeInfo};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Content that always reports the same natural size.
#[derive(Debug, Clone, Copy)]
pub struct FixedContent(pub Size);

impl IntrinsicContent for FixedContent {
    fn measure_intrinsic_content(&self, _max_width: f32) -> Size {
        self.0
    }
}

/// Content that reflows like text: `area` is spread over as many rows of
/// `line_height` as the available width requires.
#[derive(Debug, Clone, Copy)]
pub struct FlowContent {
    pub area: f32,
    pub line_height: f32,
}

impl IntrinsicContent for FlowContent {
    fn measure_intrinsic_content(&self, max_width: f32) -> Size {
        let natural = self.area / self.line_height;
        if max_width.is_finite() && max_width < natural && max_width > 0.0 {
            let rows = (natural / max_width).ceil();
            Size::new(max_width, rows * self.line_height)
        } else {
            Size::new(natural, self.line_height)
        }
    }
}

pub fn exact_leaf(width: f32, height: f32) -> LayoutNode {
    LayoutNode::new(BoxKind::Leaf(LeafKind::Plain))
        .with_tag("View")
        .with_size_info(SizeInfo::exact(width, height))
}

pub fn wrap_leaf(content: Size) -> LayoutNode {
    LayoutNode::new(BoxKind::Leaf(LeafKind::Text))
        .with_tag("Label")
        .with_size_info(SizeInfo::new(Length::WrapContent, Length::WrapContent))
        .with_content(Box::new(FixedContent(content)))
}

pub fn linear(orientation: Orientation) -> LayoutNode {
    LayoutNode::new(BoxKind::Linear(LinearProps {
        orientation,
        weight_sum: 0.0,
    }))
    .with_tag("LinearLayout")
}

pub fn relative() -> LayoutNode {
    LayoutNode::new(BoxKind::Relative).with_tag("RelativeLayout")
}

pub fn absolute() -> LayoutNode {
    LayoutNode::new(BoxKind::Absolute).with_tag("AbsoluteLayout")
}

/// A viewport of the given size plus `root` attached to it.
pub fn tree_with_root(width: f32, height: f32, root: LayoutNode) -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new();
    let viewport = tree.add_viewport(width, height).unwrap();
    let root = tree.add_node(root, Some(viewport)).unwrap();
    (tree, root)
}

/// Lays out the whole tree from its viewport with the given configuration.
pub fn layout_with(tree: &mut LayoutTree, config: LayoutConfig) {
    init_logger();
    LayoutEngine::new(config).refresh_layout(tree).unwrap();
}

pub fn layout(tree: &mut LayoutTree) {
    layout_with(tree, LayoutConfig::default());
}

pub fn frame(tree: &LayoutTree, id: NodeId) -> Rect {
    tree.get(id).unwrap().frame()
}
