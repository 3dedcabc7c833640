//! First pass of the pipeline: split template source into a flat segment
//! stream without pairing tags.

/// The scanner state machine.
pub mod core;
/// State-machine helper functions.
pub mod helpers;
/// Segment types and the component naming rule.
pub mod token;

pub use self::core::ComponentScanner;
pub use token::{Segment, is_component_tag_name};
