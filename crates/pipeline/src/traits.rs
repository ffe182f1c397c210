//! The filter seam between candidate merging and ranking.

use analyzers::{AnalysisWindow, Candidate};
use anyhow::Result;

/// Drops candidates judged against the analysis window.
///
/// Survivors keep their relative order.
pub trait Filter: Send + Sync {
    /// Shown in pipeline logs
    fn name(&self) -> &str;

    fn apply(&self, candidates: Vec<Candidate>, window: &AnalysisWindow) -> Result<Vec<Candidate>>;
}
