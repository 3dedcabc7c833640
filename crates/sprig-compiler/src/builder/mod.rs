//! Second pass of the pipeline: pair open/close segments into a template
//! tree with stack discipline.

/// The tree builder.
pub mod core;

pub use self::core::{DEFAULT_MAX_DEPTH, TreeBuilder};
