//! Pipeline for merging, filtering and ranking analyzer candidates.
//!
//! This crate provides:
//! - Filter trait and the exposure filter
//! - FilterPipeline for composing filters
//! - Candidate merging and vote counting
//! - FrequencyRanker for choosing the primary set
//! - CoOccurrenceFinder for the best pair among the primary set
//!
//! ## Architecture
//! The pipeline processes candidates in stages:
//! 1. Analyzer outputs are concatenated; duplicates count as votes
//! 2. Filters remove unwanted candidates (too hot, too cold)
//! 3. Survivors are ranked by votes into the primary set
//! 4. The window is scanned for the primary pair drawn together most often
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{count_votes, merge_candidates, unique_candidates};
//! use pipeline::{CoOccurrenceFinder, FilterPipeline, FrequencyRanker};
//! use pipeline::filters::ExposureFilter;
//!
//! let merged = merge_candidates(vec![zone, tail, column]);
//! let votes = count_votes(&merged);
//!
//! let pipeline = FilterPipeline::new().add_filter(ExposureFilter::new());
//! let survivors = pipeline.apply(unique_candidates(&merged), &window)?;
//!
//! let primary = FrequencyRanker::new().rank(&votes, &survivors);
//! let pair = CoOccurrenceFinder::new().find(&primary, &window);
//! ```

pub mod cooccurrence;
pub mod filter_pipeline;
pub mod filters;
pub mod merge;
pub mod ranking;
pub mod traits;

// Re-export main types
pub use cooccurrence::{CoOccurrenceFinder, CoPair};
pub use filter_pipeline::FilterPipeline;
pub use merge::{count_votes, merge_candidates, unique_candidates};
pub use ranking::{DEFAULT_PRIMARY_SIZE, FrequencyRanker};
pub use traits::Filter;
