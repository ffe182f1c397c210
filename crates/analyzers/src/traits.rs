//! Core trait for candidate-producing heuristics.

use crate::types::{AnalysisMethod, Candidate};
use crate::window::AnalysisWindow;
use data_loader::Number;

/// A heuristic that proposes numbers from an analysis window.
///
/// ## Design Note
/// - Analyzers are pure: same window, same output
/// - An empty window must yield an empty list, never an error
/// - `Send + Sync` lets one analyzer instance serve concurrent runs
pub trait Analyzer: Send + Sync {
    /// Which method this analyzer implements
    fn method(&self) -> AnalysisMethod;

    /// Proposed numbers, best first
    fn analyze(&self, window: &AnalysisWindow) -> Vec<Number>;

    /// Proposed numbers tagged with this analyzer's method
    fn candidates(&self, window: &AnalysisWindow) -> Vec<Candidate> {
        let method = self.method();
        self.analyze(window)
            .into_iter()
            .map(|n| Candidate::new(n, method))
            .collect()
    }
}
