//! Relative containers: children positioned against siblings or the parent.

use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::engine::measure_axis;
use crate::graph::DependencyGraph;
use crate::node::NodeId;
use crate::tree::LayoutTree;
use trellis_types::{AlignParent, AnchorType, Axis};

/// Measures the children along `axis`, then resolves their positions and
/// any anchor-driven stretching in dependency order.
pub(crate) fn measure_children(
    tree: &mut LayoutTree,
    id: NodeId,
    axis: Axis,
    config: &LayoutConfig,
) -> Result<(), LayoutError> {
    let children = tree.children_of(id);
    for &child in &children {
        measure_axis(tree, child, axis);
    }

    let mut graph = DependencyGraph::build(tree, &children, axis);
    let order = graph.resolution_order(tree, config.strict_anchors)?;
    log::trace!(
        "Resolving {} {} anchors of {} in order {:?}",
        children.len(),
        axis.as_str(),
        id,
        order
    );

    for index in order {
        resolve_child(tree, id, &graph, index, axis);
    }
    Ok(())
}

fn resolve_child(tree: &mut LayoutTree, container: NodeId, graph: &DependencyGraph, index: usize, axis: Axis) {
    let parent = tree.node(container);
    let parent_extent = parent.size.along(axis);
    let parent_padding = parent.padding;

    let graph_node = &graph.nodes()[index];
    let child = tree.node(graph_node.child);
    let align = child.dependency.align_parent.masked(axis);
    let margin = child.margin;
    let mut extent = child.size.along(axis);

    // Leading edge.
    let position = match graph_node.start {
        Some(edge) => {
            let target = tree.node(graph.nodes()[edge.target].child);
            match edge.anchor.kind {
                AnchorType::Align => target.origin.along(axis) + margin.start(axis),
                _ => {
                    target.origin.along(axis)
                        + target.size.along(axis)
                        + target.margin.end(axis)
                        + margin.start(axis)
                }
            }
        }
        None if align.is_active(AlignParent::center_of(axis)) => (parent_extent - extent) / 2.0,
        None => parent_padding.start(axis) + margin.start(axis),
    };

    // Trailing edge.
    let end_position = match graph_node.end {
        Some(edge) => {
            let target = tree.node(graph.nodes()[edge.target].child);
            Some(match edge.anchor.kind {
                AnchorType::Align => {
                    target.origin.along(axis) + target.size.along(axis) - (extent + margin.end(axis))
                }
                _ => target.origin.along(axis) - (extent + margin.end(axis) + target.margin.start(axis)),
            })
        }
        None if align.is_active(AlignParent::end_of(axis)) => {
            Some(parent_extent - (extent + margin.end(axis) + parent_padding.end(axis)))
        }
        None => None,
    };

    // The leading edge stays put; a trailing edge stretches the box to reach it.
    if let Some(end_position) = end_position {
        extent += end_position - position;
    }

    let child = tree.node_mut(graph_node.child);
    child.origin.set_along(axis, position);
    child.size.set_along(axis, extent);
}
