//! Applies raw markup attributes to the declared geometry of a box.

use crate::parsers::{
    insets_or_zero, length_or_zero, parse_align_parent, parse_gravity, parse_number,
    parse_orientation, parse_visibility, StyleParseError,
};
use trellis_types::{AlignParent, EdgeInsets, Gravity, Orientation, SizeInfo, Visibility};

/// Margin or padding as written: a shorthand attribute wins over the
/// per-side attributes no matter which appears first.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InsetDeclaration {
    pub shorthand: Option<EdgeInsets>,
    pub sides: EdgeInsets,
}

impl InsetDeclaration {
    pub fn resolved(&self) -> EdgeInsets {
        self.shorthand.unwrap_or(self.sides)
    }
}

/// The geometry-related attributes shared by every box class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutAttributes {
    pub size_info: SizeInfo,
    pub margin: InsetDeclaration,
    pub padding: InsetDeclaration,
    pub visibility: Visibility,
    pub background_color: Option<String>,
    pub weight: f32,
    pub weight_sum: f32,
    pub gravity: Gravity,
    pub layout_gravity: Gravity,
    pub align_parent: AlignParent,
    pub orientation: Orientation,
}

fn side(value: &str) -> f32 {
    length_or_zero(value).exact().unwrap_or(0.0)
}

impl LayoutAttributes {
    /// Builds attributes from a full attribute list. Malformed values are
    /// logged and leave the field at its default.
    pub fn from_attributes<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut attributes = Self::default();
        for (name, value) in attrs {
            if let Err(e) = attributes.apply_attribute(name, value) {
                log::debug!("Ignoring attribute {}=\"{}\": {}", name, value, e);
            }
        }
        attributes
    }

    pub fn margin(&self) -> EdgeInsets {
        self.margin.resolved()
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding.resolved()
    }

    /// Applies a single attribute. Returns `Ok(false)` when the attribute is
    /// not a layout attribute, which callers may route elsewhere.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<bool, StyleParseError> {
        match name {
            "width" => self.size_info.width = length_or_zero(value),
            "height" => self.size_info.height = length_or_zero(value),
            "margin" => self.margin.shorthand = Some(insets_or_zero(value)),
            "margin-top" => self.margin.sides.top = side(value),
            "margin-right" => self.margin.sides.right = side(value),
            "margin-bottom" => self.margin.sides.bottom = side(value),
            "margin-left" => self.margin.sides.left = side(value),
            "padding" => self.padding.shorthand = Some(insets_or_zero(value)),
            "padding-top" => self.padding.sides.top = side(value),
            "padding-right" => self.padding.sides.right = side(value),
            "padding-bottom" => self.padding.sides.bottom = side(value),
            "padding-left" => self.padding.sides.left = side(value),
            "visibility" => self.visibility = parse_visibility(value)?,
            "background_color" => self.background_color = Some(value.to_string()),
            "weight" => self.weight = parse_number(value)?,
            "weight_sum" => self.weight_sum = parse_number(value)?,
            "gravity" => self.gravity = parse_gravity(value),
            "layout_gravity" => self.layout_gravity = parse_gravity(value),
            "align_parent" => self.align_parent = parse_align_parent(value),
            "orientation" => self.orientation = parse_orientation(value),
            _ => return Ok(false),
        };
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_types::Length;

    #[test]
    fn test_shorthand_margin_wins_over_sides() {
        let attrs = LayoutAttributes::from_attributes([
            ("margin-left", "7"),
            ("margin", "4"),
            ("margin-top", "9"),
        ]);
        assert_eq!(attrs.margin(), EdgeInsets::all(4.0));
    }

    #[test]
    fn test_per_side_padding_defaults_to_zero() {
        let attrs = LayoutAttributes::from_attributes([("padding-top", "3"), ("padding-left", "x")]);
        assert_eq!(attrs.padding(), EdgeInsets::new(3.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_sizes_and_flags() {
        let attrs = LayoutAttributes::from_attributes([
            ("width", "match_parent"),
            ("height", "wrap_content"),
            ("gravity", "right|center_vertical"),
            ("orientation", "vertical"),
            ("weight", "2"),
            ("visibility", "gone"),
        ]);
        assert_eq!(attrs.size_info.width, Length::MatchParent);
        assert_eq!(attrs.size_info.height, Length::WrapContent);
        assert_eq!(attrs.gravity, Gravity::RIGHT | Gravity::CENTER_VERTICAL);
        assert_eq!(attrs.orientation, Orientation::Vertical);
        assert_eq!(attrs.weight, 2.0);
        assert!(attrs.visibility.is_gone());
    }

    #[test]
    fn test_malformed_values_keep_defaults() {
        let attrs = LayoutAttributes::from_attributes([("weight", "lots"), ("visibility", "dim")]);
        assert_eq!(attrs.weight, 0.0);
        assert_eq!(attrs.visibility, Visibility::Visible);
    }

    #[test]
    fn test_unknown_attribute_is_reported_unhandled() {
        let mut attrs = LayoutAttributes::default();
        assert_eq!(attrs.apply_attribute("text", "hello"), Ok(false));
        assert_eq!(attrs.apply_attribute("width", "10"), Ok(true));
    }
}
