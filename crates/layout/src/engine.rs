//! The measure / arrange protocol shared by every box.
//!
//! A layout pass entered through [`LayoutEngine::request_layout`] runs three
//! steps on the requested subtree:
//!
//! 1. **measure**: resolve the node's own width then height from its declared
//!    lengths. Containers recurse into their children as part of this.
//! 2. **measure children**: every container re-measures its children per axis
//!    and applies its own adjustments (weights, anchors), top-down.
//! 3. **arrange**: compute each child's origin, commit frames to the host.

use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::node::{BoxKind, NodeId};
use crate::tree::LayoutTree;
use crate::{absolute, linear, relative};
use trellis_types::{Axis, Length, Point, Rect};

#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Runs a full layout pass over the subtree rooted at `id`.
    ///
    /// A node that has never been arranged starts at its parent's padded
    /// corner plus its own margin. Afterwards it keeps the origin its parent
    /// gave it.
    pub fn request_layout(&self, tree: &mut LayoutTree, id: NodeId) -> Result<(), LayoutError> {
        tree.get(id)?;
        log::debug!("Layout requested for {} ({})", id, tree.node(id).tag);

        if !tree.node(id).arranged {
            let origin = initial_origin(tree, id);
            tree.node_mut(id).origin = origin;
        }

        measure(tree, id);
        self.measure_subviews(tree, id)?;
        arrange(tree, id);
        Ok(())
    }

    /// Re-runs layout from the viewport, e.g. after it was resized.
    pub fn refresh_layout(&self, tree: &mut LayoutTree) -> Result<(), LayoutError> {
        let viewport = tree.viewport().ok_or(LayoutError::NoViewport)?;
        self.request_layout(tree, viewport)
    }

    fn measure_subviews(&self, tree: &mut LayoutTree, id: NodeId) -> Result<(), LayoutError> {
        let kind = tree.node(id).kind;
        match kind {
            BoxKind::Linear(props) => {
                linear::measure_children(tree, id, props, Axis::Horizontal, &self.config);
                linear::measure_children(tree, id, props, Axis::Vertical, &self.config);
            }
            BoxKind::Relative => {
                relative::measure_children(tree, id, Axis::Horizontal, &self.config)?;
                relative::measure_children(tree, id, Axis::Vertical, &self.config)?;
            }
            BoxKind::Absolute => {}
            BoxKind::Leaf(_) => return Ok(()),
        }

        for child in tree.children_of(id) {
            let node = tree.node(child);
            if node.is_container() && !node.is_gone() {
                self.measure_subviews(tree, child)?;
            }
        }
        Ok(())
    }
}

fn initial_origin(tree: &LayoutTree, id: NodeId) -> Point {
    let node = tree.node(id);
    let (left, top) = match node.parent {
        Some(parent) => {
            let padding = tree.node(parent).padding;
            (padding.left, padding.top)
        }
        None => (0.0, 0.0),
    };
    Point::new(left + node.margin.left, top + node.margin.top)
}

pub(crate) fn measure(tree: &mut LayoutTree, id: NodeId) {
    measure_axis(tree, id, Axis::Horizontal);
    measure_axis(tree, id, Axis::Vertical);
}

/// Whether a container's wrapped extent on `axis` is the sum rather than the
/// maximum of its children.
fn stacks_along(kind: BoxKind, axis: Axis) -> bool {
    matches!(kind, BoxKind::Linear(props) if props.orientation.main_axis() == axis)
}

/// Resolves the node's extent on one axis from its declared length.
pub(crate) fn measure_axis(tree: &mut LayoutTree, id: NodeId, axis: Axis) {
    let node = tree.node(id);
    if node.is_gone() {
        tree.node_mut(id).size.set_along(axis, 0.0);
        return;
    }
    let is_container = node.is_container();

    match node.size_info.along(axis) {
        Length::Exact(value) => {
            tree.node_mut(id).size.set_along(axis, value);
            if is_container {
                measure_children_axis(tree, id, axis);
            }
        }
        Length::MatchParent => {
            let extent = match node.parent {
                Some(parent) => {
                    let parent = tree.node(parent);
                    parent.size.along(axis) - parent.padding.sum(axis) - node.margin.sum(axis)
                }
                None => 0.0,
            };
            tree.node_mut(id).size.set_along(axis, extent);
            if is_container {
                measure_children_axis(tree, id, axis);
            }
        }
        Length::WrapContent if is_container => {
            let (matching, others): (Vec<NodeId>, Vec<NodeId>) = tree
                .children_of(id)
                .into_iter()
                .partition(|&c| tree.node(c).size_info.along(axis).is_match_parent());

            for &child in &others {
                measure_axis(tree, child, axis);
            }

            let node = tree.node(id);
            let extents = others
                .iter()
                .map(|&c| tree.node(c))
                .filter(|c| !c.is_gone())
                .map(|c| c.size.along(axis) + c.margin.sum(axis));
            let extent = if stacks_along(node.kind, axis) {
                extents.fold(None, |acc: Option<f32>, e| Some(acc.unwrap_or(0.0) + e))
            } else {
                extents.fold(None, |acc: Option<f32>, e| Some(acc.map_or(e, |a| a.max(e))))
            }
            .map_or(0.0, |e| e + node.padding.sum(axis));
            tree.node_mut(id).size.set_along(axis, extent);

            // Now that this node has a size, match-parent children can use it.
            for &child in &matching {
                measure_axis(tree, child, axis);
            }
        }
        Length::WrapContent => {
            let max_width = match axis {
                Axis::Horizontal => f32::INFINITY,
                Axis::Vertical => node.size.width,
            };
            let extent = node
                .content
                .as_ref()
                .map_or(0.0, |content| content.measure_intrinsic_content(max_width).along(axis));
            tree.node_mut(id).size.set_along(axis, extent);
        }
    }
}

fn measure_children_axis(tree: &mut LayoutTree, id: NodeId, axis: Axis) {
    for child in tree.children_of(id) {
        measure_axis(tree, child, axis);
    }
}

/// Commits the node's frame, then places and arranges its children.
pub(crate) fn arrange(tree: &mut LayoutTree, id: NodeId) {
    let node = tree.node_mut(id);
    node.frame = Rect::from_origin_size(node.origin, node.size);
    node.arranged = true;
    commit(tree, id);

    let node = tree.node(id);
    if node.is_gone() || !node.is_container() {
        return;
    }

    let kind = node.kind;
    match kind {
        BoxKind::Absolute => absolute::place_children(tree, id),
        BoxKind::Linear(props) => linear::place_children(tree, id, props),
        // Positions were resolved while measuring.
        BoxKind::Relative | BoxKind::Leaf(_) => {}
    }

    for child in tree.children_of(id) {
        arrange(tree, child);
    }
}

fn commit(tree: &LayoutTree, id: NodeId) {
    let node = tree.node(id);
    let Some(view) = node.host() else {
        return;
    };
    let mut view = view.borrow_mut();
    view.commit_frame(node.frame);
    view.set_hidden(node.visibility.is_hidden());
    if let Some(color) = node.background {
        view.set_background_color(color);
    }
}
