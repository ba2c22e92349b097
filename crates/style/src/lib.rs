pub mod attributes;
pub mod parsers;
pub mod text;

pub use attributes::{InsetDeclaration, LayoutAttributes};
pub use parsers::StyleParseError;
pub use text::LineBreakMode;
