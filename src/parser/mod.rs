pub mod error;
pub mod markup;

pub use error::{Location, ParseError};
pub use markup::{MarkupElement, parse_markup, parse_markup_bytes};
