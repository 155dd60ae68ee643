//! Transformation module.
//!
//! - Operations: the individual row stages
//! - Pipeline: validation, stage ordering and file conversion

pub mod operations;
pub mod pipeline;

pub use operations::*;
pub use pipeline::*;
