use serde::{Deserialize, Serialize};

/// A font request resolved from a `"name:size"` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub name: String,
    pub size: f32,
}

impl FontSpec {
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            name: "System".to_string(),
            size: 17.0,
        }
    }
}
