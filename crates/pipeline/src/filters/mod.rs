//! Filter implementations for the candidate pipeline.
//!
//! This module contains the concrete filters that can be composed into a
//! FilterPipeline.

pub mod exposure;

// Re-export for convenience
pub use exposure::{Exposure, ExposureBands, ExposureFilter};
