//! Reads layout markup into a plain element tree using `roxmltree`.

use super::error::{Location, ParseError};

/// One parsed markup element: its tag, its attributes in document order and
/// its child elements. Text, comments and processing instructions are not
/// kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkupElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<MarkupElement>,
    pub location: Location,
}

impl MarkupElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: MarkupElement) -> Self {
        self.children.push(child);
        self
    }

    /// The value of `name`. If an attribute is repeated the last one wins.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attribute_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Parses a layout document into its top-level elements.
///
/// When the document element is `wrapper_tag`, its child elements are the
/// top-level elements. Otherwise the document element itself is the only one.
pub fn parse_markup(text: &str, wrapper_tag: &str) -> Result<Vec<MarkupElement>, ParseError> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();

    let forest = if root.tag_name().name() == wrapper_tag {
        root.children()
            .filter(|n| n.is_element())
            .map(|n| convert(&doc, n))
            .collect()
    } else {
        vec![convert(&doc, root)]
    };
    log::trace!("Parsed {} top-level markup elements", forest.len());
    Ok(forest)
}

/// Like [`parse_markup`] for raw bytes, which must be UTF-8.
pub fn parse_markup_bytes(bytes: &[u8], wrapper_tag: &str) -> Result<Vec<MarkupElement>, ParseError> {
    let text = std::str::from_utf8(bytes)?;
    parse_markup(text, wrapper_tag)
}

fn convert(doc: &roxmltree::Document<'_>, node: roxmltree::Node<'_, '_>) -> MarkupElement {
    MarkupElement {
        tag: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect(),
        children: node
            .children()
            .filter(|n| n.is_element())
            .map(|n| convert(doc, n))
            .collect(),
        location: doc.text_pos_at(node.range().start).into(),
    }
}
