//! Tail-Digit Analyzer
//!
//! Looks at the last decimal digit of every drawn number and proposes
//! numbers ending in the most common digits.
//!
//! Ties between equally common digits go to the digit seen first when
//! walking the window newest draw first, positions in drawn order. Proposed
//! numbers are listed in ascending order and are always numbers that were
//! actually drawn in the window.

use crate::tally::Tally;
use crate::traits::Analyzer;
use crate::types::AnalysisMethod;
use crate::window::AnalysisWindow;
use data_loader::Number;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

pub struct TailDigitAnalyzer {
    /// How many of the most common tail digits to follow
    tail_count: usize,

    /// Maximum numbers proposed
    limit: usize,
}

impl TailDigitAnalyzer {
    pub fn new() -> Self {
        Self {
            tail_count: 2,
            limit: 3,
        }
    }

    /// Configure how many tail digits are followed (default: 2)
    pub fn with_tail_count(mut self, tail_count: usize) -> Self {
        self.tail_count = tail_count;
        self
    }

    /// Configure the maximum numbers proposed (default: 3)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The most common tail digits, best first
    pub fn hot_tails(&self, window: &AnalysisWindow) -> Vec<u8> {
        let tails: Tally<u8> = window.numbers().map(|n| n % 10).collect();
        tails
            .top(self.tail_count)
            .into_iter()
            .map(|(tail, _)| tail)
            .collect()
    }
}

impl Default for TailDigitAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for TailDigitAnalyzer {
    fn method(&self) -> AnalysisMethod {
        AnalysisMethod::TailDigit
    }

    #[instrument(skip(self, window), fields(window = window.len()))]
    fn analyze(&self, window: &AnalysisWindow) -> Vec<Number> {
        let hot = self.hot_tails(window);
        let drawn: BTreeSet<Number> = window.numbers().collect();

        let picks: Vec<Number> = drawn
            .into_iter()
            .filter(|n| hot.contains(&(n % 10)))
            .take(self.limit)
            .collect();

        debug!("Hot tails {:?}, picks {:?}", hot, picks);
        picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use data_loader::DrawRecord;

    fn window(draws: &[[Number; 5]]) -> AnalysisWindow {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let records = draws
            .iter()
            .map(|numbers| DrawRecord::new(date, *numbers).unwrap())
            .collect();
        AnalysisWindow::new(date, records)
    }

    #[test]
    fn test_follows_two_hottest_tails() {
        let w = window(&[[11, 21, 3, 13, 5], [31, 23, 7, 8, 9]]);
        let analyzer = TailDigitAnalyzer::new();

        assert_eq!(analyzer.hot_tails(&w), vec![1, 3]);
        assert_eq!(analyzer.analyze(&w), vec![3, 11, 13]);
    }

    #[test]
    fn test_ties_go_to_first_seen_tail() {
        let w = window(&[[3, 1, 2, 4, 5]]);
        let analyzer = TailDigitAnalyzer::new();

        assert_eq!(analyzer.hot_tails(&w), vec![3, 1]);
        assert_eq!(analyzer.analyze(&w), vec![1, 3]);
    }

    #[test]
    fn test_repeated_identical_draws() {
        let w = window(&[[1, 2, 3, 4, 5]; 10]);
        assert_eq!(TailDigitAnalyzer::new().analyze(&w), vec![1, 2]);
    }

    #[test]
    fn test_picks_are_capped() {
        let w = window(&[[1, 11, 21, 31, 2]]);
        assert_eq!(TailDigitAnalyzer::new().analyze(&w), vec![1, 2, 11]);
        assert_eq!(
            TailDigitAnalyzer::new().with_limit(10).analyze(&w),
            vec![1, 2, 11, 21, 31]
        );
    }

    #[test]
    fn test_empty_window() {
        let w = window(&[]);
        let analyzer = TailDigitAnalyzer::new();
        assert!(analyzer.hot_tails(&w).is_empty());
        assert!(analyzer.analyze(&w).is_empty());
    }
}
