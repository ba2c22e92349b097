//! Resource resolution for trellis markup.
//!
//! ## Contents
//!
//! - [`ResourceResolver`]: turns `@+id/`, `@id/`, `@string/`, `@color/` and
//!   font references into concrete values
//! - [`IdRegistry`]: the name to integer id table owned by a resolver
//! - [`ColorTable`]: the named color table, loaded on first use
//! - [`FilesystemResourceProvider`]: loads resources from a directory
//!
//! For convenience, we also re-export the in-memory provider from trellis-traits.

mod color_table;
mod filesystem;
mod registry;
mod resolver;

pub use color_table::ColorTable;
pub use filesystem::FilesystemResourceProvider;
pub use registry::IdRegistry;
pub use resolver::{ResolverConfig, ResourceResolver, load_string_table};

pub use trellis_traits::InMemoryResourceProvider;
