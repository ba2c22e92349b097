//! Per-axis anchor graphs for relative containers.
//!
//! Nodes are the direct children of one container. An edge runs from a child
//! to the sibling it anchors to on that axis. Anchors to unknown ids, to
//! non-siblings or to the child itself are not edges.

use crate::LayoutError;
use crate::node::NodeId;
use crate::tree::LayoutTree;
use trellis_types::{Anchor, Axis, LayoutId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub anchor: Anchor,
    /// Index of the target among the container's children.
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub child: NodeId,
    /// Anchor on the leading edge (left or top).
    pub start: Option<Edge>,
    /// Anchor on the trailing edge (right or bottom).
    pub end: Option<Edge>,
}

impl GraphNode {
    fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.start.iter().chain(self.end.iter())
    }
}

#[derive(Debug, Clone)]
pub struct DependencyGraph {
    axis: Axis,
    nodes: Vec<GraphNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Visited,
}

impl DependencyGraph {
    pub fn build(tree: &LayoutTree, children: &[NodeId], axis: Axis) -> Self {
        let ids: Vec<Option<LayoutId>> = children.iter().map(|&c| tree.node(c).layout_id).collect();

        let resolve = |index: usize, anchor: Option<Anchor>| -> Option<Edge> {
            let anchor = anchor?;
            let target_id = anchor.target()?;
            let target = ids.iter().position(|id| *id == Some(target_id));
            match target {
                Some(target) if target != index => Some(Edge { anchor, target }),
                Some(_) => {
                    log::warn!("Ignoring {} anchor of id {} to itself", axis.as_str(), target_id);
                    None
                }
                None => {
                    log::debug!(
                        "Ignoring {} anchor to id {}: not a sibling",
                        axis.as_str(),
                        target_id
                    );
                    None
                }
            }
        };

        let nodes = children
            .iter()
            .enumerate()
            .map(|(index, &child)| {
                let dependency = tree.node(child).dependency;
                GraphNode {
                    child,
                    start: resolve(index, dependency.start_anchor(axis)),
                    end: resolve(index, dependency.end_anchor(axis)),
                }
            })
            .collect();

        Self { axis, nodes }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Children with no anchor on this axis.
    pub fn roots(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.start.is_none() && node.end.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    /// Orders children so that every anchor target comes before the child
    /// anchored to it.
    ///
    /// Roots come first, in document order. The rest are placed depth-first,
    /// each after its targets. An anchor that closes a cycle is removed from
    /// the graph, unless `strict` is set, in which case the cycle is an error.
    pub fn resolution_order(&mut self, tree: &LayoutTree, strict: bool) -> Result<Vec<usize>, LayoutError> {
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());

        for root in self.roots() {
            marks[root] = Mark::Visited;
            order.push(root);
        }
        for index in 0..self.nodes.len() {
            if marks[index] == Mark::Unvisited {
                self.visit(index, &mut marks, &mut order, tree, strict)?;
            }
        }
        Ok(order)
    }

    fn visit(
        &mut self,
        index: usize,
        marks: &mut [Mark],
        order: &mut Vec<usize>,
        tree: &LayoutTree,
        strict: bool,
    ) -> Result<(), LayoutError> {
        marks[index] = Mark::Visiting;

        for slot in [EdgeSlot::Start, EdgeSlot::End] {
            let Some(edge) = slot.get(&self.nodes[index]) else {
                continue;
            };
            match marks[edge.target] {
                Mark::Visited => {}
                Mark::Unvisited => self.visit(edge.target, marks, order, tree, strict)?,
                Mark::Visiting => {
                    let ids = self.cycle_ids(index, edge.target, tree);
                    if strict {
                        return Err(LayoutError::CyclicAnchors {
                            axis: self.axis,
                            ids,
                        });
                    }
                    log::warn!(
                        "Ignoring {} anchor that closes a cycle through ids {:?}",
                        self.axis.as_str(),
                        ids
                    );
                    slot.clear(&mut self.nodes[index]);
                }
            }
        }

        marks[index] = Mark::Visited;
        order.push(index);
        Ok(())
    }

    /// Ids along the cycle from `target` back to `from`, for diagnostics.
    fn cycle_ids(&self, from: usize, target: usize, tree: &LayoutTree) -> Vec<LayoutId> {
        let mut ids = Vec::new();
        let mut current = target;
        // Follow edges from the target until we are back at `from`.
        for _ in 0..self.nodes.len() {
            if let Some(id) = tree.node(self.nodes[current].child).layout_id {
                ids.push(id);
            }
            if current == from {
                break;
            }
            let next = self.nodes[current]
                .edges()
                .map(|e| e.target)
                .find(|&t| self.reaches(t, from));
            match next {
                Some(next) => current = next,
                None => break,
            }
        }
        ids
    }

    fn reaches(&self, from: usize, to: usize) -> bool {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![from];
        while let Some(current) = stack.pop() {
            if current == to {
                return true;
            }
            if std::mem::replace(&mut seen[current], true) {
                continue;
            }
            stack.extend(self.nodes[current].edges().map(|e| e.target));
        }
        false
    }
}

#[derive(Clone, Copy)]
enum EdgeSlot {
    Start,
    End,
}

impl EdgeSlot {
    fn get(self, node: &GraphNode) -> Option<Edge> {
        match self {
            EdgeSlot::Start => node.start,
            EdgeSlot::End => node.end,
        }
    }

    fn clear(self, node: &mut GraphNode) {
        match self {
            EdgeSlot::Start => node.start = None,
            EdgeSlot::End => node.end = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use trellis_types::Dependency;

    fn id(raw: u32) -> LayoutId {
        LayoutId::new(raw).unwrap()
    }

    fn anchored(top: Option<u32>, bottom: Option<u32>) -> Dependency {
        Dependency {
            top: top.map(|t| Anchor::position(id(t))),
            bottom: bottom.map(|t| Anchor::align(id(t))),
            ..Default::default()
        }
    }

    /// Children of a fresh relative root, in insertion order.
    fn siblings(nodes: Vec<crate::LayoutNode>) -> (LayoutTree, Vec<NodeId>) {
        let (mut tree, root) = tree_with_root(100.0, 100.0, relative());
        for node in nodes {
            tree.add_node(node, Some(root)).unwrap();
        }
        let children = tree.children_of(root);
        (tree, children)
    }

    #[test]
    fn test_only_sibling_anchors_become_edges() {
        let (tree, children) = siblings(vec![
            exact_leaf(1.0, 1.0).with_id(id(1)),
            exact_leaf(1.0, 1.0).with_id(id(2)).with_dependency(anchored(Some(1), Some(9))),
            exact_leaf(1.0, 1.0).with_id(id(3)).with_dependency(anchored(Some(3), None)),
        ]);

        let graph = DependencyGraph::build(&tree, &children, Axis::Vertical);

        assert_eq!(graph.axis(), Axis::Vertical);
        assert_eq!(graph.nodes()[1].start.map(|e| e.target), Some(0));
        assert_eq!(graph.nodes()[1].end, None);
        assert_eq!(graph.nodes()[2].start, None);
        assert_eq!(graph.roots(), vec![0, 2]);

        let horizontal = DependencyGraph::build(&tree, &children, Axis::Horizontal);
        assert_eq!(horizontal.roots(), vec![0, 1, 2]);
    }

    #[test]
    fn test_targets_come_before_dependents() {
        // 0 sits below 1, which aligns its bottom with 2.
        let (tree, children) = siblings(vec![
            exact_leaf(1.0, 1.0).with_id(id(1)).with_dependency(anchored(Some(2), None)),
            exact_leaf(1.0, 1.0).with_id(id(2)).with_dependency(anchored(None, Some(3))),
            exact_leaf(1.0, 1.0).with_id(id(3)),
        ]);
        let mut graph = DependencyGraph::build(&tree, &children, Axis::Vertical);

        let order = graph.resolution_order(&tree, true).unwrap();

        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_cycle_edge_is_dropped_unless_strict() {
        init_logger();
        let (tree, children) = siblings(vec![
            exact_leaf(1.0, 1.0).with_id(id(1)).with_dependency(anchored(Some(2), None)),
            exact_leaf(1.0, 1.0).with_id(id(2)).with_dependency(anchored(Some(1), None)),
        ]);

        let mut strict = DependencyGraph::build(&tree, &children, Axis::Vertical);
        assert_eq!(
            strict.resolution_order(&tree, true),
            Err(LayoutError::CyclicAnchors {
                axis: Axis::Vertical,
                ids: vec![id(1), id(2)],
            })
        );

        let mut lenient = DependencyGraph::build(&tree, &children, Axis::Vertical);
        let order = lenient.resolution_order(&tree, false).unwrap();
        assert_eq!(order, vec![1, 0]);
        assert_eq!(lenient.nodes()[1].start, None);
        assert_eq!(lenient.nodes()[0].start.map(|e| e.target), Some(1));
    }
}
