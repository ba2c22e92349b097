//! Arena storage for layout nodes.

use crate::LayoutError;
use crate::node::{BoxKind, HostLink, LayoutNode, NodeId};
use trellis_traits::SharedHostView;
use trellis_types::{LayoutId, Length, Size, SizeInfo};

/// Owns every node of one inflated hierarchy.
///
/// Nodes are addressed by [`NodeId`]; children are kept in document order and
/// each node knows its parent. Structure is fixed once built: nodes can be
/// added but never moved or removed.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
    roots: Vec<NodeId>,
    viewport: Option<NodeId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `node` as the last child of `parent`, or as a new root.
    pub fn add_node(&mut self, mut node: LayoutNode, parent: Option<NodeId>) -> Result<NodeId, LayoutError> {
        let id = NodeId(self.nodes.len());
        match parent {
            Some(parent_id) => {
                self.get(parent_id)?;
                node.parent = Some(parent_id);
                self.nodes.push(node);
                self.nodes[parent_id.0].children.push(id);
            }
            None => {
                self.nodes.push(node);
                self.roots.push(id);
            }
        }
        Ok(id)
    }

    /// Creates the host root: an absolute container with a fixed size that
    /// inflated hierarchies are attached to.
    pub fn add_viewport(&mut self, width: f32, height: f32) -> Result<NodeId, LayoutError> {
        let mut node = LayoutNode::new(BoxKind::Absolute)
            .with_tag("viewport")
            .with_size_info(SizeInfo::exact(width, height));
        // Known up front, so roots can be laid out before the first full pass.
        node.size = Size::new(width, height);
        let id = self.add_node(node, None)?;
        self.viewport = Some(id);
        Ok(id)
    }

    pub fn viewport(&self) -> Option<NodeId> {
        self.viewport
    }

    /// Changes the viewport's declared size, e.g. after a host resize.
    pub fn resize_viewport(&mut self, width: f32, height: f32) -> Result<(), LayoutError> {
        let id = self.viewport.ok_or(LayoutError::NoViewport)?;
        let node = self.get_mut(id)?;
        node.size_info = SizeInfo::new(Length::Exact(width), Length::Exact(height));
        node.size = Size::new(width, height);
        Ok(())
    }

    /// Links a host view to a node. The tree holds it weakly.
    pub fn attach_host(&mut self, id: NodeId, view: &SharedHostView) -> Result<(), LayoutError> {
        self.get_mut(id)?.host = HostLink::new(view);
        Ok(())
    }

    pub fn get(&self, id: NodeId) -> Result<&LayoutNode, LayoutError> {
        self.nodes.get(id.0).ok_or(LayoutError::UnknownNode(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, LayoutError> {
        self.nodes.get_mut(id.0).ok_or(LayoutError::UnknownNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Top-level nodes in insertion order (the viewport, if any, included).
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node id in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Finds the first descendant of `from` carrying `layout_id`, checking
    /// each child before descending into it.
    pub fn find_by_id(&self, from: NodeId, layout_id: LayoutId) -> Option<NodeId> {
        let node = self.nodes.get(from.0)?;
        for &child in &node.children {
            if self.nodes[child.0].layout_id == Some(layout_id) {
                return Some(child);
            }
            if let Some(found) = self.find_by_id(child, layout_id) {
                return Some(found);
            }
        }
        None
    }

    /// Searches every root, including the roots themselves.
    pub fn find_in_tree(&self, layout_id: LayoutId) -> Option<NodeId> {
        self.roots.iter().find_map(|&root| {
            if self.nodes[root.0].layout_id == Some(layout_id) {
                Some(root)
            } else {
                self.find_by_id(root, layout_id)
            }
        })
    }

    pub(crate) fn node(&self, id: NodeId) -> &LayoutNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut LayoutNode {
        &mut self.nodes[id.0]
    }

    /// Cloned child list, so callers can mutate nodes while iterating.
    pub(crate) fn children_of(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.0].children.clone()
    }
}
