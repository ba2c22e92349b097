//! Maps markup tags to box classes.

use std::collections::HashMap;
use trellis_layout::{BoxKind, LeafKind, LinearProps};

/// The box classes known to an inflater, keyed by tag.
///
/// Linear entries carry default [`LinearProps`]; the orientation and weight
/// sum of each element are filled in from its attributes.
#[derive(Debug, Clone)]
pub struct BoxRegistry {
    classes: HashMap<String, BoxKind>,
}

impl Default for BoxRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("AbsoluteLayout", BoxKind::Absolute);
        registry.register("LinearLayout", BoxKind::Linear(LinearProps::default()));
        registry.register("RelativeLayout", BoxKind::Relative);
        for tag in ["View", "UIView"] {
            registry.register(tag, BoxKind::Leaf(LeafKind::Plain));
        }
        for tag in ["Label", "UILabel"] {
            registry.register(tag, BoxKind::Leaf(LeafKind::Text));
        }
        for tag in ["Button", "UIButton"] {
            registry.register(tag, BoxKind::Leaf(LeafKind::Button));
        }
        for tag in ["ImageView", "UIImageView"] {
            registry.register(tag, BoxKind::Leaf(LeafKind::Image));
        }
        registry
    }
}

impl BoxRegistry {
    /// A registry that knows no tags.
    pub fn empty() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Adds or replaces the class for `tag`.
    pub fn register(&mut self, tag: impl Into<String>, kind: BoxKind) {
        self.classes.insert(tag.into(), kind);
    }

    pub fn lookup(&self, tag: &str) -> Option<BoxKind> {
        self.classes.get(tag).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
