//! Compiler errors.
//!
//! The transform is a best-effort rewriter: malformed tags and attribute
//! tokens degrade to literal text or are dropped with a warning, never
//! raised. The single fatal condition is the nesting-depth limit, which
//! exists so adversarial input surfaces as an error instead of exhausting
//! the call stack.

use thiserror::Error;

/// Errors produced while compiling template source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Component nesting in the source is deeper than the configured limit.
    #[error("component nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep {
        /// The configured maximum nesting depth.
        limit: usize,
    },
}
