//! Low-level nom parser functions for markup attribute values.
//!
//! Strict parsers return `Result<_, StyleParseError>`. The `*_or_*` wrappers
//! apply the degradation policy used when building boxes from markup: a value
//! that does not parse falls back to a documented default and is logged.

use crate::text::LineBreakMode;
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{alpha0, char};
use nom::combinator::{map_res, opt, recognize, value};
use nom::sequence::{preceded, terminated};
use thiserror::Error;
use trellis_types::{AlignParent, EdgeInsets, Gravity, Length, Orientation, Visibility};

/// Errors that can occur during attribute value parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Float parse error: {0}")]
    FloatParse(String),
}

// --- Helper Parsers ---

fn digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit()).parse(input)
}

/// Parses a signed decimal number such as `12`, `-3.5` or `.25`.
pub fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digits, opt((char('.'), opt(digits))))),
                recognize((char('.'), digits)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

/// Parses an exact extent: optional leading letters, a number, and an
/// ignored unit suffix (`"12dp"`, `"px4"`).
fn exact_length(input: &str) -> IResult<&str, Length> {
    let (input, value) = terminated(
        preceded(take_while(|c: char| c.is_ascii_lowercase()), parse_f32),
        alpha0,
    )
    .parse(input)?;
    Ok((input, Length::Exact(value)))
}

/// Parses a normalized (lowercase, space free) length token.
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    alt((
        value(Length::MatchParent, tag("match_parent")),
        value(Length::MatchParent, tag("fill_parent")),
        value(Length::WrapContent, tag("wrap_content")),
        exact_length,
    ))
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

/// Parses a declared length. Case and embedded spaces are ignored.
pub fn parse_length_value(s: &str) -> Result<Length, StyleParseError> {
    let normalized: String = s.to_lowercase().chars().filter(|c| *c != ' ').collect();
    run_parser(parse_length, &normalized)
}

/// Lenient length: anything unparseable is an exact zero.
pub fn length_or_zero(s: &str) -> Length {
    parse_length_value(s).unwrap_or_else(|e| {
        log::debug!("Treating length '{}' as zero: {}", s, e);
        Length::zero()
    })
}

/// Parses 1 to 4 whitespace separated components using the CSS shorthand
/// convention. Components that are not exact lengths count as zero.
pub fn parse_insets(s: &str) -> Result<EdgeInsets, StyleParseError> {
    let parts: Vec<f32> = s
        .split_whitespace()
        .map(|token| length_or_zero(token).exact().unwrap_or(0.0))
        .collect();

    match parts.as_slice() {
        [all] => Ok(EdgeInsets::all(*all)),
        [vertical, horizontal] => Ok(EdgeInsets::new(*vertical, *horizontal, *vertical, *horizontal)),
        [top, horizontal, bottom] => Ok(EdgeInsets::new(*top, *horizontal, *bottom, *horizontal)),
        [top, right, bottom, left] => Ok(EdgeInsets::new(*top, *right, *bottom, *left)),
        _ => Err(StyleParseError::Parse(format!(
            "Invalid number of values for inset shorthand: got {}, expected 1 to 4.",
            parts.len()
        ))),
    }
}

pub fn insets_or_zero(s: &str) -> EdgeInsets {
    parse_insets(s).unwrap_or_else(|e| {
        log::debug!("Treating insets '{}' as zero: {}", s, e);
        EdgeInsets::zero()
    })
}

/// Parses a `|` separated gravity list. Unknown tokens contribute nothing.
pub fn parse_gravity(s: &str) -> Gravity {
    s.split('|').fold(Gravity::empty(), |acc, token| {
        let flag = match token.trim().to_lowercase().as_str() {
            "left" => Gravity::LEFT,
            "right" => Gravity::RIGHT,
            "top" => Gravity::TOP,
            "bottom" => Gravity::BOTTOM,
            "center_horizontal" => Gravity::CENTER_HORIZONTAL,
            "center_vertical" => Gravity::CENTER_VERTICAL,
            "center" => Gravity::CENTER,
            other => {
                log::trace!("Ignoring gravity token '{}'", other);
                Gravity::empty()
            }
        };
        acc | flag
    })
}

/// Parses a `|` separated align-parent list. Unknown tokens contribute nothing.
pub fn parse_align_parent(s: &str) -> AlignParent {
    s.split('|').fold(AlignParent::empty(), |acc, token| {
        let flag = match token.trim().to_lowercase().as_str() {
            "left" => AlignParent::LEFT,
            "right" => AlignParent::RIGHT,
            "top" => AlignParent::TOP,
            "bottom" => AlignParent::BOTTOM,
            "center_horizontal" => AlignParent::CENTER_HORIZONTAL,
            "center_vertical" => AlignParent::CENTER_VERTICAL,
            "center" => AlignParent::CENTER,
            other => {
                log::trace!("Ignoring align_parent token '{}'", other);
                AlignParent::empty()
            }
        };
        acc | flag
    })
}

/// Anything other than `vertical` is horizontal.
pub fn parse_orientation(s: &str) -> Orientation {
    if s.trim().eq_ignore_ascii_case("vertical") {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

pub fn parse_visibility(s: &str) -> Result<Visibility, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "visible" => Ok(Visibility::Visible),
        "invisible" => Ok(Visibility::Invisible),
        "gone" => Ok(Visibility::Gone),
        _ => Err(StyleParseError::InvalidValue {
            property: "visibility".to_string(),
            value: s.to_string(),
        }),
    }
}

pub fn parse_number(s: &str) -> Result<f32, StyleParseError> {
    run_parser(parse_f32, s)
        .map_err(|_| StyleParseError::FloatParse(format!("Invalid number: {}", s)))
}

pub fn parse_integer(s: &str) -> Result<i32, StyleParseError> {
    s.trim().parse::<i32>().map_err(|_| StyleParseError::InvalidValue {
        property: "integer".to_string(),
        value: s.to_string(),
    })
}

pub fn parse_line_break_mode(s: &str) -> Result<LineBreakMode, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "word_wrapping" => Ok(LineBreakMode::WordWrapping),
        "char_wrapping" => Ok(LineBreakMode::CharWrapping),
        "clipping" => Ok(LineBreakMode::Clipping),
        "truncating_head" => Ok(LineBreakMode::TruncatingHead),
        "truncating_tail" => Ok(LineBreakMode::TruncatingTail),
        "truncating_middle" => Ok(LineBreakMode::TruncatingMiddle),
        _ => Err(StyleParseError::InvalidValue {
            property: "line_break_mode".to_string(),
            value: s.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length_value("120").unwrap(), Length::Exact(120.0));
        assert_eq!(parse_length_value(" 12dp ").unwrap(), Length::Exact(12.0));
        assert_eq!(parse_length_value("1 0").unwrap(), Length::Exact(10.0));
        assert_eq!(parse_length_value("-4.5").unwrap(), Length::Exact(-4.5));
        assert_eq!(parse_length_value("Match_Parent").unwrap(), Length::MatchParent);
        assert_eq!(parse_length_value("fill_parent").unwrap(), Length::MatchParent);
        assert_eq!(parse_length_value("wrap_content").unwrap(), Length::WrapContent);
        assert!(parse_length_value("abc").is_err());
    }

    #[test]
    fn test_unparseable_length_is_zero() {
        assert_eq!(length_or_zero("wide"), Length::Exact(0.0));
        assert_eq!(length_or_zero(""), Length::Exact(0.0));
    }

    #[test]
    fn test_parse_insets_shorthand() {
        assert_eq!(parse_insets("10").unwrap(), EdgeInsets::new(10.0, 10.0, 10.0, 10.0));
        assert_eq!(parse_insets("10 20").unwrap(), EdgeInsets::new(10.0, 20.0, 10.0, 20.0));
        assert_eq!(parse_insets("10 20 30").unwrap(), EdgeInsets::new(10.0, 20.0, 30.0, 20.0));
        assert_eq!(
            parse_insets("10 20 30 40").unwrap(),
            EdgeInsets::new(10.0, 20.0, 30.0, 40.0)
        );
        assert!(parse_insets("1 2 3 4 5").is_err());
        assert_eq!(insets_or_zero("1 2 3 4 5"), EdgeInsets::zero());
        assert_eq!(insets_or_zero(""), EdgeInsets::zero());
    }

    #[test]
    fn test_parse_gravity_tokens() {
        let gravity = parse_gravity("bottom|center_horizontal");
        assert!(gravity.is_active(Gravity::BOTTOM));
        assert!(gravity.is_active(Gravity::CENTER_HORIZONTAL));
        assert!(!gravity.is_active(Gravity::TOP));
        assert!(!gravity.is_active(Gravity::RIGHT));

        assert_eq!(parse_gravity("center"), Gravity::CENTER);
        assert_eq!(parse_gravity("sideways"), Gravity::empty());
        assert_eq!(parse_gravity(" right | nonsense "), Gravity::RIGHT);
    }

    #[test]
    fn test_parse_align_parent_tokens() {
        assert_eq!(
            parse_align_parent("left|bottom"),
            AlignParent::LEFT | AlignParent::BOTTOM
        );
        assert_eq!(parse_align_parent("center"), AlignParent::CENTER);
    }

    #[test]
    fn test_parse_orientation_and_visibility() {
        assert_eq!(parse_orientation("vertical"), Orientation::Vertical);
        assert_eq!(parse_orientation("diagonal"), Orientation::Horizontal);
        assert_eq!(parse_visibility("gone").unwrap(), Visibility::Gone);
        assert!(parse_visibility("faded").is_err());
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_number("1.5").unwrap(), 1.5);
        assert_eq!(parse_number(" 2 ").unwrap(), 2.0);
        assert!(parse_number("heavy").is_err());
        assert_eq!(parse_integer("3").unwrap(), 3);
        assert!(parse_integer("3.5").is_err());
    }

    #[test]
    fn test_parse_line_break_mode() {
        assert_eq!(
            parse_line_break_mode("truncating_tail").unwrap(),
            LineBreakMode::TruncatingTail
        );
        assert!(parse_line_break_mode("wrap").is_err());
    }
}
