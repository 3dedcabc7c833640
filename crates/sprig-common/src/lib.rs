//! Common utilities for the Sprig component precompiler.
//!
//! This crate provides shared infrastructure used by all compiler components:
//! - **Warning System** - colored terminal output for best-effort recoveries

pub mod warning;
