//! Absolute containers: every child sits at the padded corner plus its own margin.

use crate::node::NodeId;
use crate::tree::LayoutTree;
use trellis_types::Point;

pub(crate) fn place_children(tree: &mut LayoutTree, id: NodeId) {
    let padding = tree.node(id).padding;
    for child in tree.children_of(id) {
        let node = tree.node_mut(child);
        node.origin = Point::new(padding.left + node.margin.left, padding.top + node.margin.top);
    }
}
