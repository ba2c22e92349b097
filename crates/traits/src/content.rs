//! Intrinsic content measurement for leaf boxes.

use std::fmt::Debug;
use trellis_style::LineBreakMode;
use trellis_types::{FontSpec, Size};

/// Content that knows its own natural size, such as text or an image.
///
/// Called while resolving a `wrap_content` extent. `max_width` is the width
/// available to the content; it may be `f32::INFINITY` when unconstrained.
pub trait IntrinsicContent: Debug {
    fn measure_intrinsic_content(&self, max_width: f32) -> Size;
}

/// What a text measurer needs to know about a run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest<'a> {
    pub text: &'a str,
    pub font: &'a FontSpec,
    /// Zero means unlimited.
    pub max_lines: usize,
    pub line_break_mode: LineBreakMode,
}

/// Shapes text on behalf of text-bearing leaves.
pub trait TextMeasurer: Debug {
    fn measure_text(&self, request: &TextRequest<'_>, max_width: f32) -> Size;
}
