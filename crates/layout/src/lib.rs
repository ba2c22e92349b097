use thiserror::Error;
use trellis_types::{Axis, LayoutId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Relative anchors on the {} axis form a cycle through ids {ids:?}.", .axis.as_str())]
    CyclicAnchors { axis: Axis, ids: Vec<LayoutId> },
    #[error("Node {0} does not exist in this tree.")]
    UnknownNode(NodeId),
    #[error("The tree has no viewport to lay out from.")]
    NoViewport,
}

pub mod config;
pub mod engine;
pub mod graph;
pub mod node;
pub mod tree;

mod absolute;
mod linear;
mod relative;

pub use self::config::LayoutConfig;
pub use self::engine::LayoutEngine;
pub use self::graph::DependencyGraph;
pub use self::node::{BoxKind, Capabilities, HostLink, LayoutNode, LeafKind, LinearProps, NodeId};
pub use self::tree::LayoutTree;

// Geometry the engine hands back, re-exported so callers need not depend on
// the types crate directly.
pub use trellis_types::{Point, Rect, Size};

#[cfg(test)]
mod test_utils;
