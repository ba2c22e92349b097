//! Intrinsic content of the leaf box classes.
//!
//! Text and button leaves measure through a [`TextMeasurer`]; images report
//! the size declared in markup. When no platform shaper is available,
//! [`ApproximateTextMeasurer`] gives deterministic metrics.

use std::rc::Rc;
use trellis_style::LineBreakMode;
use trellis_traits::{IntrinsicContent, TextMeasurer, TextRequest};
use trellis_types::{Color, FontSpec, Size};

#[derive(Debug, Clone)]
pub struct TextContent {
    pub text: String,
    pub font: FontSpec,
    pub color: Option<Color>,
    /// Zero means unlimited.
    pub max_lines: usize,
    pub line_break_mode: LineBreakMode,
    measurer: Rc<dyn TextMeasurer>,
}

impl TextContent {
    pub fn new(text: impl Into<String>, font: FontSpec, measurer: Rc<dyn TextMeasurer>) -> Self {
        Self {
            text: text.into(),
            font,
            color: None,
            max_lines: 0,
            line_break_mode: LineBreakMode::default(),
            measurer,
        }
    }
}

impl IntrinsicContent for TextContent {
    fn measure_intrinsic_content(&self, max_width: f32) -> Size {
        let request = TextRequest {
            text: &self.text,
            font: &self.font,
            max_lines: self.max_lines,
            line_break_mode: self.line_break_mode,
        };
        self.measurer.measure_text(&request, max_width)
    }
}

/// A button sizes to its title on a single line.
#[derive(Debug, Clone)]
pub struct ButtonContent {
    pub title: String,
    pub font: FontSpec,
    measurer: Rc<dyn TextMeasurer>,
}

impl ButtonContent {
    pub fn new(title: impl Into<String>, font: FontSpec, measurer: Rc<dyn TextMeasurer>) -> Self {
        Self {
            title: title.into(),
            font,
            measurer,
        }
    }
}

impl IntrinsicContent for ButtonContent {
    fn measure_intrinsic_content(&self, max_width: f32) -> Size {
        let request = TextRequest {
            text: &self.title,
            font: &self.font,
            max_lines: 1,
            line_break_mode: LineBreakMode::TruncatingTail,
        };
        self.measurer.measure_text(&request, max_width)
    }
}

/// An image with a declared natural size. Narrower space scales it down,
/// keeping its aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageContent {
    pub name: String,
    pub natural: Size,
}

impl ImageContent {
    pub fn new(name: impl Into<String>, natural: Size) -> Self {
        Self {
            name: name.into(),
            natural,
        }
    }
}

impl IntrinsicContent for ImageContent {
    fn measure_intrinsic_content(&self, max_width: f32) -> Size {
        let Size { width, height } = self.natural;
        if width > 0.0 && max_width < width {
            let scale = max_width.max(0.0) / width;
            Size::new(width * scale, height * scale)
        } else {
            self.natural
        }
    }
}

/// Fixed-pitch text metrics derived from the font size alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateTextMeasurer {
    /// Advance of every character, as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f32,
}

impl Default for ApproximateTextMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            line_height_ratio: 1.2,
        }
    }
}

impl ApproximateTextMeasurer {
    /// Character counts of each laid out line.
    fn break_lines(&self, request: &TextRequest<'_>, advance: f32, max_width: f32) -> Vec<usize> {
        let limited = max_width.is_finite() && request.line_break_mode.wraps();
        let per_line = if limited && advance > 0.0 {
            ((max_width / advance).floor() as usize).max(1)
        } else {
            usize::MAX
        };

        let mut lines = Vec::new();
        for paragraph in request.text.split('\n') {
            let count = paragraph.chars().count();
            if count <= per_line {
                lines.push(count);
                continue;
            }
            match request.line_break_mode {
                LineBreakMode::CharWrapping => {
                    let mut left = count;
                    while left > 0 {
                        lines.push(left.min(per_line));
                        left = left.saturating_sub(per_line);
                    }
                }
                _ => wrap_words(paragraph, per_line, &mut lines),
            }
        }
        lines
    }
}

/// Greedy word wrap. A word longer than a line gets a line of its own and
/// is clipped to the line length.
fn wrap_words(paragraph: &str, per_line: usize, lines: &mut Vec<usize>) {
    let mut current = 0;
    for word in paragraph.split(' ') {
        let len = word.chars().count();
        if current == 0 {
            current = len;
        } else if current + 1 + len <= per_line {
            current += 1 + len;
        } else {
            lines.push(current.min(per_line));
            current = len;
        }
    }
    lines.push(current.min(per_line));
}

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure_text(&self, request: &TextRequest<'_>, max_width: f32) -> Size {
        if request.text.is_empty() {
            return Size::zero();
        }
        let advance = request.font.size * self.advance_ratio;
        let line_height = request.font.size * self.line_height_ratio;

        let mut lines = self.break_lines(request, advance, max_width);
        if request.max_lines > 0 {
            lines.truncate(request.max_lines);
        }

        let longest = lines.iter().copied().max().unwrap_or(0) as f32 * advance;
        let width = if max_width.is_finite() {
            longest.min(max_width.max(0.0))
        } else {
            longest
        };
        Size::new(width.ceil(), (lines.len() as f32 * line_height).ceil())
    }
}
