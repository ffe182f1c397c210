//! The weekday analysis window.
//!
//! Every heuristic looks at the same slice of history: past draws that fell
//! on the reference date's weekday, newest first, capped at a fixed size.
//! The window is built once per run and only ever borrowed afterwards.

use crate::tally::Tally;
use chrono::NaiveDate;
use data_loader::{DrawCorpus, DrawRecord, Number, weekday_of};
use tracing::debug;

/// Default cap on the number of draws in a window
pub const DEFAULT_WINDOW_SIZE: usize = 800;

/// Same-weekday draws, most recent first
#[derive(Debug, Clone)]
pub struct AnalysisWindow {
    reference_date: NaiveDate,
    weekday: u8,
    draws: Vec<DrawRecord>,
}

impl AnalysisWindow {
    /// Wrap draws that are already filtered and ordered
    ///
    /// `draws` is used in the given order; callers normally go through
    /// [`build_window`] instead.
    pub fn new(reference_date: NaiveDate, draws: Vec<DrawRecord>) -> Self {
        Self {
            reference_date,
            weekday: weekday_of(reference_date),
            draws,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Weekday shared by every draw in the window, Monday = 0
    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    pub fn draws(&self) -> &[DrawRecord] {
        &self.draws
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// All drawn numbers, draw by draw, each in drawn order
    pub fn numbers(&self) -> impl Iterator<Item = Number> + '_ {
        self.draws.iter().flat_map(|d| d.numbers().iter().copied())
    }

    /// Per-number frequency across all five positions
    pub fn number_tally(&self) -> Tally<Number> {
        self.numbers().collect()
    }
}

/// Select the draws sharing `reference_date`'s weekday, newest first,
/// keeping at most `limit` of them.
///
/// A short or empty window is not an error.
pub fn build_window(corpus: &DrawCorpus, reference_date: NaiveDate, limit: usize) -> AnalysisWindow {
    let weekday = weekday_of(reference_date);

    let mut draws: Vec<DrawRecord> = corpus
        .records()
        .iter()
        .filter(|r| r.weekday() == weekday)
        .copied()
        .collect();
    let matching = draws.len();

    // Stable: same-date duplicates keep corpus order
    draws.sort_by(|a, b| b.date().cmp(&a.date()));
    draws.truncate(limit);

    debug!(
        "Window for {} (weekday {}): {} matching draws, keeping {}",
        reference_date,
        weekday,
        matching,
        draws.len()
    );

    AnalysisWindow::new(reference_date, draws)
}
