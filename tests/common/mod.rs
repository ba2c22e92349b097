pub mod fixtures;

use std::sync::Arc;
use trellis::{Inflated, Inflater, LayoutTree, NodeId, PipelineError, ResourceResolver};
use trellis_layout::Rect;
use trellis_traits::{InMemoryResourceProvider, RecordingViewFactory};
use trellis_types::LayoutId;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A tree with a viewport and everything inflated into it.
pub struct Inflation {
    pub tree: LayoutTree,
    pub viewport: NodeId,
    pub inflated: Inflated,
    pub factory: RecordingViewFactory,
    pub inflater: Inflater,
}

impl Inflation {
    /// Frame of the node registered as `@+id/name`.
    pub fn frame_of(&self, name: &str) -> Rect {
        let id = self.id(name);
        let node = self
            .tree
            .find_in_tree(id)
            .unwrap_or_else(|| panic!("no node with id {}", name));
        self.tree.get(node).unwrap().frame()
    }

    pub fn id(&self, name: &str) -> LayoutId {
        self.inflater
            .resolver()
            .ids()
            .get(name)
            .unwrap_or_else(|| panic!("id {} was never registered", name))
    }

    pub fn root_frame(&self, index: usize) -> Rect {
        self.tree.get(self.inflated.roots[index]).unwrap().frame()
    }
}

/// Provider holding the given resources.
pub fn provider_with(resources: &[(&str, &str)]) -> Arc<InMemoryResourceProvider> {
    let provider = InMemoryResourceProvider::new();
    for (name, data) in resources {
        provider.add(*name, *data).unwrap();
    }
    Arc::new(provider)
}

/// Inflates `markup` into a fresh `width` x `height` viewport.
pub fn inflate(markup: &str, width: f32, height: f32) -> Result<Inflation, PipelineError> {
    inflate_with(Inflater::new(ResourceResolver::new(provider_with(&[]))), markup, width, height)
}

pub fn inflate_with(
    mut inflater: Inflater,
    markup: &str,
    width: f32,
    height: f32,
) -> Result<Inflation, PipelineError> {
    init_logger();
    let mut tree = LayoutTree::new();
    let viewport = tree.add_viewport(width, height)?;
    let factory = RecordingViewFactory::new();
    let inflated = inflater.inflate_str(markup, &mut tree, viewport, Some(&factory))?;
    Ok(Inflation {
        tree,
        viewport,
        inflated,
        factory,
        inflater,
    })
}
