//! Integer identities assigned to boxes through `@+id/` references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered box identity. Always strictly positive; an unassigned box
/// carries `None` instead of a zero id.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayoutId(u32);

impl LayoutId {
    /// Wraps a raw id. Returns `None` for zero, which means "unassigned".
    pub fn new(raw: u32) -> Option<Self> {
        if raw == 0 { None } else { Some(Self(raw)) }
    }

    /// Interprets a signed anchor target; non-positive targets are absent.
    pub fn from_target(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().and_then(Self::new)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LayoutId> for u32 {
    fn from(id: LayoutId) -> Self {
        id.0
    }
}
