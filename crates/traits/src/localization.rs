use std::collections::HashMap;
use std::fmt::Debug;

/// Looks up localized strings for `@string/` references.
pub trait Localizer: Debug {
    fn localize(&self, key: &str) -> String;
}

/// Returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn localize(&self, key: &str) -> String {
        key.to_string()
    }
}

/// A fixed key to string table. Missing keys fall back to the key itself.
#[derive(Debug, Clone, Default)]
pub struct MapLocalizer {
    strings: HashMap<String, String>,
}

impl MapLocalizer {
    pub fn new(strings: HashMap<String, String>) -> Self {
        Self { strings }
    }
}

impl Localizer for MapLocalizer {
    fn localize(&self, key: &str) -> String {
        self.strings.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}
