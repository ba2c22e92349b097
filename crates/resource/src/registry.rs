use std::collections::HashMap;
use trellis_types::LayoutId;

/// Maps id names to integers, handing out 1, 2, 3... in registration order.
///
/// Entries are never removed, so a name keeps its id for as long as the
/// registry lives. Sharing one registry across inflations keeps ids stable
/// between separately inflated trees.
#[derive(Debug, Clone)]
pub struct IdRegistry {
    ids: HashMap<String, LayoutId>,
    next: u32,
}

impl Default for IdRegistry {
    fn default() -> Self {
        Self {
            ids: HashMap::new(),
            next: 1,
        }
    }
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, registering it first if needed.
    pub fn register(&mut self, name: &str) -> Option<LayoutId> {
        if let Some(id) = self.ids.get(name) {
            return Some(*id);
        }
        let id = LayoutId::new(self.next)?;
        self.next = self.next.checked_add(1)?;
        self.ids.insert(name.to_string(), id);
        log::trace!("Registered id '{}' as {}", name, id);
        Some(id)
    }

    pub fn get(&self, name: &str) -> Option<LayoutId> {
        self.ids.get(name).copied()
    }

    /// Reverse lookup, mostly for diagnostics.
    pub fn name_of(&self, id: LayoutId) -> Option<&str> {
        self.ids
            .iter()
            .find(|(_, v)| **v == id)
            .map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
