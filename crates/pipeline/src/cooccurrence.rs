//! Co-occurrence of primary numbers within single draws.
//!
//! Pairs are canonical: the smaller number always comes first, so (3, 17)
//! and (17, 3) are the same pair.

use analyzers::{AnalysisWindow, Tally};
use data_loader::Number;
use serde::Serialize;
use tracing::debug;

/// The pair of primary numbers drawn together most often
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoPair {
    /// Ascending
    pub numbers: (Number, Number),
    /// Draws in the window containing both numbers
    pub count: usize,
}

impl CoPair {
    pub fn to_vec(&self) -> Vec<Number> {
        vec![self.numbers.0, self.numbers.1]
    }
}

/// Finds the primary-set pair that shared the most draws
#[derive(Debug, Clone, Copy, Default)]
pub struct CoOccurrenceFinder;

impl CoOccurrenceFinder {
    pub fn new() -> Self {
        Self
    }

    /// Count every primary-set pair drawn together, in first-seen order
    pub fn pair_counts(&self, primary: &[Number], window: &AnalysisWindow) -> Tally<(Number, Number)> {
        let mut pairs = Tally::new();
        for draw in window.draws() {
            let mut common: Vec<Number> = draw
                .numbers()
                .iter()
                .copied()
                .filter(|n| primary.contains(n))
                .collect();
            common.sort_unstable();

            for (i, &a) in common.iter().enumerate() {
                for &b in &common[i + 1..] {
                    pairs.add((a, b));
                }
            }
        }
        pairs
    }

    /// The most frequent pair, or `None` if no two primary numbers were ever
    /// drawn together. Ties go to the pair seen first (newest draw first).
    pub fn find(&self, primary: &[Number], window: &AnalysisWindow) -> Option<CoPair> {
        if primary.len() < 2 {
            return None;
        }

        let best = self
            .pair_counts(primary, window)
            .top(1)
            .first()
            .map(|&(numbers, count)| CoPair { numbers, count });

        debug!("Best co-occurring pair: {:?}", best);
        best
    }
}
