#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Clamp children whose weight adjustment would give them a negative
    /// main-axis extent to zero.
    ///
    /// When `false`, an overcommitted weight distribution propagates negative
    /// extents into the arranged frames.
    ///
    /// Defaults to `true`.
    pub clamp_negative_extents: bool,

    /// Fail a layout pass with [`LayoutError::CyclicAnchors`](crate::LayoutError)
    /// when relative anchors form a cycle.
    ///
    /// When `false`, the anchors that close a cycle are ignored and logged.
    ///
    /// Defaults to `false`.
    pub strict_anchors: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            clamp_negative_extents: true,
            strict_anchors: false,
        }
    }
}
