//! Inflates Android-style layout markup into positioned box trees.
//!
//! Markup is parsed into [`MarkupElement`]s, built into a
//! [`LayoutTree`] by an [`Inflater`] and laid out by the
//! [`LayoutEngine`]. Frames are committed to host views created by a
//! [`ViewFactory`](trellis_traits::ViewFactory).

pub mod content;
pub mod error;
pub mod inflater;
pub mod parser;

pub use content::{ApproximateTextMeasurer, ButtonContent, ImageContent, TextContent};
pub use error::PipelineError;
pub use inflater::{BoxRegistry, Inflated, Inflater, InflaterConfig};
pub use parser::{MarkupElement, ParseError};

pub use trellis_layout::{LayoutConfig, LayoutEngine, LayoutError, LayoutTree, NodeId};
pub use trellis_resource::{FilesystemResourceProvider, ResolverConfig, ResourceResolver};
