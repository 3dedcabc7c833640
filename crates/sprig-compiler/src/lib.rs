//! Component-tag precompiler.
//!
//! Rewrites custom component tags embedded in template source (for example
//! `<User_Card $name="John" />`) into hydration placeholder markup that a
//! client runtime later scans and brings to life. Everything that is not a
//! well-formed component tag passes through byte-for-byte.
//!
//! The pipeline has three phases:
//!
//! 1. [`scanner`] - split the source into a flat stream of text and
//!    component-tag segments.
//! 2. [`builder`] - pair open/close tags with a stack discipline into a
//!    [`TemplateTree`](sprig_tree::TemplateTree).
//! 3. [`emit`] - serialize the tree, rewriting each component node into a
//!    `<div class="_Component_Init" ...>` placeholder.
//!
//! ```
//! use sprig_compiler::compile;
//!
//! let out = compile("<User_Card $name=\"John\" />").unwrap();
//! assert!(out.contains("data-component-init-name=\"User_Card\""));
//! ```

/// Attribute classification and partitioning.
pub mod attrs;
/// Stack-discipline pairing of tag segments into a tree.
pub mod builder;
/// Placeholder markup emission.
pub mod emit;
/// Compile errors.
pub mod error;
/// Escape functions and their composition.
pub mod escape;
/// The component-tag scanner.
pub mod scanner;

pub use builder::{DEFAULT_MAX_DEPTH, TreeBuilder};
pub use error::CompileError;
pub use scanner::{ComponentScanner, Segment, is_component_tag_name};

use sprig_tree::TemplateTree;

/// The compiler front door: configuration plus the scan/build/emit pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Compiler {
    max_depth: usize,
}

impl Compiler {
    /// Create a compiler with the default nesting limit.
    #[must_use]
    pub const fn new() -> Self {
        Compiler {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the component nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Scan and pair the source into a template tree without emitting.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::NestingTooDeep`] when component tags nest
    /// deeper than the configured limit.
    pub fn parse(&self, source: &str) -> Result<TemplateTree, CompileError> {
        // Each template gets a fresh warning slate; dedup is per compile,
        // not per process.
        sprig_common::warning::clear_warnings();
        let mut scanner = ComponentScanner::new(source.to_string());
        scanner.run();
        TreeBuilder::new(scanner.into_segments())
            .with_max_depth(self.max_depth)
            .build()
    }

    /// Run the full pipeline: scan, pair, and emit placeholder markup.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::NestingTooDeep`] when component tags nest
    /// deeper than the configured limit.
    pub fn compile(&self, source: &str) -> Result<String, CompileError> {
        let tree = self.parse(source)?;
        Ok(emit::serialize_tree(&tree))
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile template source with the default configuration.
///
/// # Errors
///
/// Returns [`CompileError::NestingTooDeep`] when component tags nest deeper
/// than [`DEFAULT_MAX_DEPTH`].
pub fn compile(source: &str) -> Result<String, CompileError> {
    Compiler::new().compile(source)
}
