//! Column-Repeat Analyzer
//!
//! Treats each draw position (first ball, second ball, ...) as its own
//! column and finds the value that repeats most often in it. Equal counts go
//! to the value seen first, i.e. the one from the most recent draw.

use crate::tally::Tally;
use crate::traits::Analyzer;
use crate::types::AnalysisMethod;
use crate::window::AnalysisWindow;
use data_loader::{NUMBERS_PER_DRAW, Number};
use tracing::{debug, instrument};

pub struct ColumnRepeatAnalyzer {
    /// How many position winners are proposed, starting from position 1
    limit: usize,
}

impl ColumnRepeatAnalyzer {
    pub fn new() -> Self {
        Self { limit: 2 }
    }

    /// Configure how many positions contribute (default: 2)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Most repeated value for every position, in position order
    pub fn position_winners(&self, window: &AnalysisWindow) -> Vec<Number> {
        (0..NUMBERS_PER_DRAW)
            .filter_map(|position| {
                let column: Tally<Number> = window
                    .draws()
                    .iter()
                    .map(|draw| draw.numbers()[position])
                    .collect();
                column.top(1).first().map(|(n, _)| *n)
            })
            .collect()
    }
}

impl Default for ColumnRepeatAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for ColumnRepeatAnalyzer {
    fn method(&self) -> AnalysisMethod {
        AnalysisMethod::ColumnRepeat
    }

    #[instrument(skip(self, window), fields(window = window.len()))]
    fn analyze(&self, window: &AnalysisWindow) -> Vec<Number> {
        let mut winners = self.position_winners(window);
        winners.truncate(self.limit);
        debug!("Column-repeat picks: {:?}", winners);
        winners
    }
}
