//! The public entry points: markup in, laid out node subtrees out.
//!
//! An [`Inflater`] owns the resolution context of one application session.
//! Every tree inflated through the same inflater shares its id registry, so
//! `@+id/name` means the same integer in all of them.

mod builder;
mod registry;

pub use registry::BoxRegistry;

use crate::content::ApproximateTextMeasurer;
use crate::error::PipelineError;
use crate::parser::{MarkupElement, parse_markup, parse_markup_bytes};
use builder::TreeBuilder;
use std::rc::Rc;
use std::sync::Arc;
use trellis_layout::{LayoutConfig, LayoutEngine, LayoutError, LayoutTree, NodeId};
use trellis_resource::ResourceResolver;
use trellis_traits::{SharedHostView, TextMeasurer, ViewFactory};

#[derive(Debug, Clone, PartialEq)]
pub struct InflaterConfig {
    /// Document element whose children are the inflated roots.
    pub wrapper_tag: String,
    /// Appended to resource names that lack it.
    pub extension: String,
    /// Handed to the engine that lays out inflated trees.
    pub layout: LayoutConfig,
}

impl Default for InflaterConfig {
    fn default() -> Self {
        Self {
            wrapper_tag: "xml".to_string(),
            extension: "xml".to_string(),
            layout: LayoutConfig::default(),
        }
    }
}

/// The result of one inflation.
#[derive(Default)]
pub struct Inflated {
    /// Top-level nodes in document order.
    pub roots: Vec<NodeId>,
    /// Host views created for the new nodes. The tree only holds them
    /// weakly, so they live as long as this list (or the host) keeps them.
    pub views: Vec<(NodeId, SharedHostView)>,
}

impl Inflated {
    pub fn view(&self, id: NodeId) -> Option<&SharedHostView> {
        self.views.iter().find(|(node, _)| *node == id).map(|(_, view)| view)
    }
}

pub struct Inflater {
    config: InflaterConfig,
    registry: BoxRegistry,
    resolver: ResourceResolver,
    measurer: Rc<dyn TextMeasurer>,
    engine: LayoutEngine,
}

impl Inflater {
    pub fn new(resolver: ResourceResolver) -> Self {
        Self::with_config(resolver, InflaterConfig::default())
    }

    pub fn with_config(resolver: ResourceResolver, config: InflaterConfig) -> Self {
        Self {
            engine: LayoutEngine::new(config.layout),
            config,
            registry: BoxRegistry::default(),
            resolver,
            measurer: Rc::new(ApproximateTextMeasurer::default()),
        }
    }

    pub fn with_registry(mut self, registry: BoxRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the measurer used by text and button leaves.
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Rc::new(measurer);
        self
    }

    pub fn config(&self) -> &InflaterConfig {
        &self.config
    }

    pub fn resolver(&self) -> &ResourceResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut ResourceResolver {
        &mut self.resolver
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// `resource` with the markup extension appended if it is missing.
    pub fn resource_name(&self, resource: &str) -> String {
        let suffix = format!(".{}", self.config.extension);
        if resource.ends_with(&suffix) {
            resource.to_string()
        } else {
            format!("{}{}", resource, suffix)
        }
    }

    /// Builds `elements` under `parent` and lays out each new root.
    pub fn build(
        &mut self,
        elements: &[MarkupElement],
        tree: &mut LayoutTree,
        parent: NodeId,
        factory: Option<&dyn ViewFactory>,
    ) -> Result<Inflated, PipelineError> {
        tree.get(parent)?;

        let mut builder = TreeBuilder {
            registry: &self.registry,
            resolver: &mut self.resolver,
            measurer: &self.measurer,
            factory,
            views: Vec::new(),
        };
        let mut roots = Vec::with_capacity(elements.len());
        for element in elements {
            if let Some(root) = builder.build(tree, element, Some(parent))? {
                roots.push(root);
            }
        }
        let views = builder.views;

        for &root in &roots {
            if let Err(e) = self.engine.request_layout(tree, root) {
                if let LayoutError::CyclicAnchors { ids, .. } = &e {
                    let names: Vec<&str> = ids
                        .iter()
                        .filter_map(|&id| self.resolver.ids().name_of(id))
                        .collect();
                    log::warn!("Anchor cycle through {}", names.join(" -> "));
                }
                return Err(e.into());
            }
        }
        log::debug!("Inflated {} roots under {}", roots.len(), parent);
        Ok(Inflated { roots, views })
    }

    /// Inflates already loaded markup.
    pub fn inflate_str(
        &mut self,
        markup: &str,
        tree: &mut LayoutTree,
        parent: NodeId,
        factory: Option<&dyn ViewFactory>,
    ) -> Result<Inflated, PipelineError> {
        let elements = parse_markup(markup, &self.config.wrapper_tag)?;
        self.build(&elements, tree, parent, factory)
    }

    /// Loads `resource` through the resolver's provider on a blocking
    /// worker, then inflates it on the calling task and hands the new roots
    /// to `completion`.
    ///
    /// On any failure the error is logged and returned, and `completion` is
    /// not called.
    pub async fn inflate_resource<F>(
        &mut self,
        resource: &str,
        tree: &mut LayoutTree,
        parent: NodeId,
        factory: Option<&dyn ViewFactory>,
        completion: F,
    ) -> Result<Inflated, PipelineError>
    where
        F: FnOnce(&LayoutTree, &[NodeId]),
    {
        let name = self.resource_name(resource);
        match self.load_and_build(&name, tree, parent, factory).await {
            Ok(inflated) => {
                completion(tree, &inflated.roots);
                Ok(inflated)
            }
            Err(e) => {
                log::warn!("Could not inflate '{}': {}", name, e);
                Err(e)
            }
        }
    }

    async fn load_and_build(
        &mut self,
        name: &str,
        tree: &mut LayoutTree,
        parent: NodeId,
        factory: Option<&dyn ViewFactory>,
    ) -> Result<Inflated, PipelineError> {
        let provider = Arc::clone(self.resolver.provider());
        log::debug!("Loading '{}' from {}", name, provider.name());
        let path = name.to_string();
        let data = tokio::task::spawn_blocking(move || provider.load(&path)).await??;

        let elements = parse_markup_bytes(&data, &self.config.wrapper_tag)?;
        self.build(&elements, tree, parent, factory)
    }
}
