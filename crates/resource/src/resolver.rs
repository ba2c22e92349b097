//! Turns symbolic references in markup into concrete values.
//!
//! Nothing here fails loudly. An unknown id, a missing color or a malformed
//! font resolves to `None` and the caller decides what that means.

use crate::color_table::ColorTable;
use crate::registry::IdRegistry;
use once_cell::unsync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;
use trellis_style::parsers::length_or_zero;
use trellis_traits::{
    IdentityLocalizer, Localizer, MapLocalizer, ResourceError, ResourceProvider,
};
use trellis_types::{Color, FontSpec, LayoutId};

const NEW_ID_PREFIX: &str = "@+id/";
const ID_PREFIX: &str = "@id/";
const STRING_PREFIX: &str = "@string/";
const CODE_PREFIX: &str = "@code/";
const COLOR_PREFIX: &str = "@color/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Resource name of the named color table.
    pub color_table: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            color_table: "colors.json".to_string(),
        }
    }
}

/// Resolution context for one application session.
///
/// Owns the id registry and the color table cache. Inflate every tree that
/// should share ids through the same resolver.
#[derive(Debug)]
pub struct ResourceResolver {
    config: ResolverConfig,
    provider: Arc<dyn ResourceProvider>,
    localizer: Box<dyn Localizer>,
    ids: IdRegistry,
    colors: OnceCell<ColorTable>,
}

impl ResourceResolver {
    pub fn new(provider: Arc<dyn ResourceProvider>) -> Self {
        Self::with_config(provider, ResolverConfig::default())
    }

    pub fn with_config(provider: Arc<dyn ResourceProvider>, config: ResolverConfig) -> Self {
        Self {
            config,
            provider,
            localizer: Box::new(IdentityLocalizer),
            ids: IdRegistry::new(),
            colors: OnceCell::new(),
        }
    }

    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    pub fn provider(&self) -> &Arc<dyn ResourceProvider> {
        &self.provider
    }

    pub fn ids(&self) -> &IdRegistry {
        &self.ids
    }

    /// `@+id/name` registers `name` if needed; `@id/name` only looks it up.
    /// Any other form is not an id.
    pub fn resolve_id(&mut self, reference: &str) -> Option<LayoutId> {
        if let Some(name) = reference.strip_prefix(NEW_ID_PREFIX) {
            return self.ids.register(name);
        }
        self.lookup_id(reference)
    }

    /// Like [`resolve_id`](Self::resolve_id) but never registers.
    pub fn lookup_id(&self, reference: &str) -> Option<LayoutId> {
        let name = reference
            .strip_prefix(ID_PREFIX)
            .or_else(|| reference.strip_prefix(NEW_ID_PREFIX))?;
        let id = self.ids.get(name);
        if id.is_none() {
            log::debug!("Unresolved id reference '{}'", reference);
        }
        id
    }

    /// `@string/key` is localized; anything else is a literal whose `\n`
    /// escapes become newlines.
    pub fn resolve_string(&self, reference: &str) -> String {
        match reference.strip_prefix(STRING_PREFIX) {
            Some(key) => self.localizer.localize(key),
            None => reference.replace("\\n", "\n"),
        }
    }

    /// Parses `"name:size"`. Anything but exactly two parts is `None`; an
    /// unreadable size is zero.
    pub fn resolve_font(&self, spec: &str) -> Option<FontSpec> {
        let parts: Vec<&str> = spec.split(':').collect();
        match parts.as_slice() {
            [name, size] => {
                let size = length_or_zero(size).exact().unwrap_or(0.0);
                Some(FontSpec::new(*name, size))
            }
            _ => {
                log::debug!("Malformed font spec '{}'", spec);
                None
            }
        }
    }

    /// `@code/HEX`, `@color/name` or a bare hex code.
    pub fn resolve_color(&self, reference: &str) -> Option<Color> {
        if let Some(code) = reference.strip_prefix(CODE_PREFIX) {
            return Some(Color::from_hex_code(code));
        }
        if let Some(name) = reference.strip_prefix(COLOR_PREFIX) {
            let code = self.color_table().code(name);
            if code.is_none() {
                log::debug!("Color '{}' is not in the color table", name);
            }
            return code.map(Color::from_hex_code);
        }
        Some(Color::from_hex_code(reference))
    }

    /// The color table, loaded on first use. A table that cannot be loaded
    /// is cached as empty.
    fn color_table(&self) -> &ColorTable {
        self.colors.get_or_init(|| {
            match ColorTable::load(self.provider.as_ref(), &self.config.color_table) {
                Ok(table) => {
                    log::debug!(
                        "Loaded {} named colors from '{}'",
                        table.len(),
                        self.config.color_table
                    );
                    table
                }
                Err(e) => {
                    log::warn!("Color table '{}' unavailable: {}", self.config.color_table, e);
                    ColorTable::default()
                }
            }
        })
    }
}

/// Loads a flat JSON object of `key -> string` as a localizer.
pub fn load_string_table(
    provider: &dyn ResourceProvider,
    path: &str,
) -> Result<MapLocalizer, ResourceError> {
    let json = provider.load_string(path)?;
    let strings: HashMap<String, String> = serde_json::from_str(&json)
        .map_err(|e| ResourceError::InvalidFormat(format!("{}: {}", path, e)))?;
    Ok(MapLocalizer::new(strings))
}
