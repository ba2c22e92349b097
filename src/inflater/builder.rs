//! Turns markup elements into layout nodes.

use super::registry::BoxRegistry;
use crate::content::{ButtonContent, ImageContent, TextContent};
use crate::parser::MarkupElement;
use std::rc::Rc;
use trellis_layout::{BoxKind, LayoutError, LayoutNode, LayoutTree, LeafKind, LinearProps, NodeId};
use trellis_resource::ResourceResolver;
use trellis_style::LayoutAttributes;
use trellis_style::parsers::{length_or_zero, parse_integer, parse_line_break_mode};
use trellis_traits::{IntrinsicContent, SharedHostView, TextMeasurer, ViewFactory};
use trellis_types::{AlignParent, Anchor, Color, Dependency, FontSpec, LayoutId, Size};

/// What a leaf shows, as pushed to its host view.
enum HostContent {
    Text {
        text: String,
        font: FontSpec,
        color: Option<Color>,
    },
    Image(String),
}

fn boxed(content: impl IntrinsicContent + 'static) -> Box<dyn IntrinsicContent> {
    Box::new(content)
}

pub(crate) struct TreeBuilder<'a> {
    pub registry: &'a BoxRegistry,
    pub resolver: &'a mut ResourceResolver,
    pub measurer: &'a Rc<dyn TextMeasurer>,
    pub factory: Option<&'a dyn ViewFactory>,
    pub views: Vec<(NodeId, SharedHostView)>,
}

impl TreeBuilder<'_> {
    /// Builds `element` and its subtree under `parent`.
    ///
    /// Returns `None` when the tag is not a known box class; the whole
    /// subtree is skipped in that case.
    pub fn build(
        &mut self,
        tree: &mut LayoutTree,
        element: &MarkupElement,
        parent: Option<NodeId>,
    ) -> Result<Option<NodeId>, LayoutError> {
        let Some(kind) = self.registry.lookup(&element.tag) else {
            log::debug!(
                "Dropping <{}> at {} with {} child elements: unknown tag",
                element.tag,
                element.location,
                element.children.len()
            );
            return Ok(None);
        };

        let attributes = LayoutAttributes::from_attributes(element.attribute_pairs());
        let kind = match kind {
            BoxKind::Linear(_) => BoxKind::Linear(LinearProps {
                orientation: attributes.orientation,
                weight_sum: attributes.weight_sum,
            }),
            other => other,
        };

        let mut node = LayoutNode::new(kind).with_tag(element.tag.as_str());
        node.layout_id = element.attribute("id").and_then(|r| self.resolver.resolve_id(r));
        node.size_info = attributes.size_info;
        node.margin = attributes.margin();
        node.padding = attributes.padding();
        node.visibility = attributes.visibility;
        node.weight = attributes.weight;
        node.gravity = attributes.gravity;
        node.layout_gravity = attributes.layout_gravity;
        node.dependency = self.dependency(element, attributes.align_parent);
        node.background = attributes
            .background_color
            .as_deref()
            .and_then(|c| self.resolver.resolve_color(c));

        let host_content = match kind {
            BoxKind::Leaf(leaf) => {
                let (content, host_content) = self.leaf_content(leaf, element);
                node.content = content;
                host_content
            }
            _ => None,
        };

        let id = tree.add_node(node, parent)?;

        if let Some(factory) = self.factory {
            let view = factory.create_view(&element.tag);
            match &host_content {
                Some(HostContent::Text { text, font, color }) => {
                    view.borrow_mut().set_text(text, font, *color)
                }
                Some(HostContent::Image(name)) => view.borrow_mut().set_image(name),
                None => {}
            }
            tree.attach_host(id, &view)?;
            self.views.push((id, view));
        }

        if kind.is_container() {
            for child in &element.children {
                self.build(tree, child, Some(id))?;
            }
        } else if !element.children.is_empty() {
            log::debug!(
                "<{}> at {} is not a container; ignoring its {} child elements",
                element.tag,
                element.location,
                element.children.len()
            );
        }

        Ok(Some(id))
    }

    /// Reads the align-parent bits and the six sibling anchors. A position
    /// anchor replaces an align anchor on the same edge.
    fn dependency(&mut self, element: &MarkupElement, align_parent: AlignParent) -> Dependency {
        let mut anchor = |name: &str, make: fn(LayoutId) -> Anchor| -> Option<Anchor> {
            let reference = element.attribute(name)?;
            let id = self.resolver.resolve_id(reference);
            if id.is_none() {
                log::debug!("Leaving anchor {}=\"{}\" unset", name, reference);
            }
            id.map(make)
        };

        let align_top = anchor("align_top", Anchor::align);
        let align_left = anchor("align_left", Anchor::align);
        let align_bottom = anchor("align_bottom", Anchor::align);
        let align_right = anchor("align_right", Anchor::align);
        let below = anchor("below", Anchor::position);
        let to_right_of = anchor("to_right_of", Anchor::position);
        let above = anchor("above", Anchor::position);
        let to_left_of = anchor("to_left_of", Anchor::position);

        Dependency {
            top: below.or(align_top),
            left: to_right_of.or(align_left),
            bottom: above.or(align_bottom),
            right: to_left_of.or(align_right),
            align_parent,
        }
    }

    fn leaf_content(
        &self,
        leaf: LeafKind,
        element: &MarkupElement,
    ) -> (Option<Box<dyn IntrinsicContent>>, Option<HostContent>) {
        match leaf {
            LeafKind::Plain => (None, None),
            LeafKind::Text => {
                let text = self.text(element, "text");
                let font = self.font(element);
                let mut content = TextContent::new(text.clone(), font.clone(), Rc::clone(self.measurer));
                content.color = element
                    .attribute("text_color")
                    .and_then(|c| self.resolver.resolve_color(c));
                if let Some(value) = element.attribute("number_of_lines") {
                    match parse_integer(value) {
                        Ok(lines) => content.max_lines = lines.max(0) as usize,
                        Err(e) => log::debug!("Ignoring number_of_lines: {}", e),
                    }
                }
                if let Some(value) = element.attribute("line_break_mode") {
                    match parse_line_break_mode(value) {
                        Ok(mode) => content.line_break_mode = mode,
                        Err(e) => log::debug!("Ignoring line_break_mode: {}", e),
                    }
                }
                let host = HostContent::Text {
                    text,
                    font,
                    color: content.color,
                };
                (Some(boxed(content)), Some(host))
            }
            LeafKind::Button => {
                let title = match element.attribute("title") {
                    Some(_) => self.text(element, "title"),
                    None => self.text(element, "text"),
                };
                let font = self.font(element);
                let content = ButtonContent::new(title.clone(), font.clone(), Rc::clone(self.measurer));
                let host = HostContent::Text {
                    text: title,
                    font,
                    color: None,
                };
                (Some(boxed(content)), Some(host))
            }
            LeafKind::Image => {
                let name = element.attribute("image").unwrap_or_default().to_string();
                let side = |attr: &str| {
                    element
                        .attribute(attr)
                        .and_then(|v| length_or_zero(v).exact())
                        .unwrap_or(0.0)
                };
                let natural = Size::new(side("image_width"), side("image_height"));
                let content = ImageContent::new(name.clone(), natural);
                (Some(boxed(content)), Some(HostContent::Image(name)))
            }
        }
    }

    fn text(&self, element: &MarkupElement, attribute: &str) -> String {
        element
            .attribute(attribute)
            .map(|t| self.resolver.resolve_string(t))
            .unwrap_or_default()
    }

    fn font(&self, element: &MarkupElement) -> FontSpec {
        element
            .attribute("font")
            .and_then(|f| self.resolver.resolve_font(f))
            .unwrap_or_default()
    }
}
