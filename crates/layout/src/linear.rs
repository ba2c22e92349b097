//! Linear containers: children stacked along one axis, with weights.

use crate::config::LayoutConfig;
use crate::engine::measure_axis;
use crate::node::{LinearProps, NodeId};
use crate::tree::LayoutTree;
use trellis_types::{Axis, Gravity, Point};

/// Sum of the visible children's extents plus their margins along `axis`.
fn children_extent(tree: &LayoutTree, children: &[NodeId], axis: Axis) -> f32 {
    children
        .iter()
        .map(|&c| tree.node(c))
        .filter(|c| !c.is_gone())
        .map(|c| c.size.along(axis) + c.margin.sum(axis))
        .sum()
}

/// Re-measures the children along `axis` and, on the main axis, hands the
/// remaining space out by weight.
pub(crate) fn measure_children(
    tree: &mut LayoutTree,
    id: NodeId,
    props: LinearProps,
    axis: Axis,
    config: &LayoutConfig,
) {
    let children = tree.children_of(id);
    for &child in &children {
        measure_axis(tree, child, axis);
    }

    let mut sum = children_extent(tree, &children, axis);

    if axis == props.orientation.main_axis() {
        let declared_weights: f32 = children
            .iter()
            .map(|&c| tree.node(c))
            .filter(|c| !c.is_gone())
            .map(|c| c.weight)
            .sum();
        let weight_sum = if props.weight_sum > 0.0 {
            props.weight_sum
        } else {
            declared_weights
        };

        let node = tree.node(id);
        let diff = node.size.along(axis) - node.padding.sum(axis) - sum;

        if weight_sum != 0.0 {
            for &child in &children {
                let node = tree.node_mut(child);
                if node.is_gone() || node.weight == 0.0 {
                    continue;
                }
                let mut extent = node.size.along(axis) + diff * node.weight / weight_sum;
                if config.clamp_negative_extents && extent < 0.0 {
                    log::debug!("Clamping weighted extent {:.2} of {} to zero", extent, child);
                    extent = 0.0;
                }
                node.size.set_along(axis, extent);
            }
            sum = children_extent(tree, &children, axis);
        }
    }

    tree.node_mut(id).content_sum.set_along(axis, sum);
}

/// Places the children with a single forward sweep along the main axis.
pub(crate) fn place_children(tree: &mut LayoutTree, id: NodeId, props: LinearProps) {
    let main = props.orientation.main_axis();
    let cross = main.cross();

    let node = tree.node(id);
    let padding = node.padding;
    let usable_main = node.size.along(main) - padding.sum(main);
    let usable_cross = node.size.along(cross) - padding.sum(cross);
    let major = node.gravity.masked(main);
    let minor = node.gravity.masked(cross);
    let sum = node.content_sum.along(main);

    let mut cursor = padding.start(main);
    if major.is_active(Gravity::end_of(main)) {
        cursor += usable_main - sum;
    } else if major.is_active(Gravity::center_of(main)) {
        cursor += (usable_main - sum) / 2.0;
    }
    let mut remaining = sum;

    for child in tree.children_of(id) {
        let node = tree.node_mut(child);
        if node.is_gone() {
            node.origin.set_along(main, cursor);
            node.origin.set_along(cross, padding.start(cross));
            continue;
        }

        let own_gravity = if node.layout_gravity.is_empty() {
            node.gravity
        } else {
            node.layout_gravity
        };

        // Without container gravity, a child may push itself towards the end.
        if major.is_empty() {
            if own_gravity.is_active(Gravity::end_of(main)) {
                cursor = padding.start(main) + usable_main - remaining;
            } else if own_gravity.is_active(Gravity::center_of(main)) {
                cursor += (padding.start(main) + usable_main - remaining - cursor) / 2.0;
            }
        }

        cursor += node.margin.start(main);

        let placement = if minor.is_empty() { own_gravity } else { minor };
        let slack = usable_cross - (node.size.along(cross) + node.margin.sum(cross));
        let offset = if placement.is_active(Gravity::end_of(cross)) {
            slack
        } else if placement.is_active(Gravity::center_of(cross)) {
            slack / 2.0
        } else {
            0.0
        };

        let mut origin = Point::default();
        origin.set_along(main, cursor);
        origin.set_along(cross, padding.start(cross) + node.margin.start(cross) + offset);
        node.origin = origin;

        cursor += node.size.along(main) + node.margin.end(main);
        remaining -= node.size.along(main) + node.margin.sum(main);
    }
}
