use std::collections::HashMap;
use trellis_traits::{ResourceError, ResourceProvider};

/// Named colors: a flat JSON object of `name -> hex code`.
///
/// Non-string values are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    codes: HashMap<String, String>,
}

impl ColorTable {
    pub fn from_json(json: &str) -> Result<Self, ResourceError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ResourceError::InvalidFormat(format!("color table: {}", e)))?;
        let object = value.as_object().ok_or_else(|| {
            ResourceError::InvalidFormat("color table must be a JSON object".to_string())
        })?;

        let codes = object
            .iter()
            .filter_map(|(name, code)| match code.as_str() {
                Some(code) => Some((name.clone(), code.to_string())),
                None => {
                    log::debug!("Skipping non-string color table entry '{}'", name);
                    None
                }
            })
            .collect();
        Ok(Self { codes })
    }

    pub fn load(provider: &dyn ResourceProvider, path: &str) -> Result<Self, ResourceError> {
        let json = provider.load_string(path)?;
        Self::from_json(&json)
    }

    pub fn code(&self, name: &str) -> Option<&str> {
        self.codes.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
