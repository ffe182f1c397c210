//! Core domain types for historical draw data.
//!
//! A draw is five distinct numbers picked from 1..=39. Records are validated
//! once at construction and never change afterwards, so every consumer can
//! rely on the invariants without re-checking them.

use crate::error::{DataLoadError, Result};
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

// =============================================================================
// Constants
// =============================================================================

/// A single drawn number (1-39)
pub type Number = u8;

/// Numbers that can appear in a draw
pub const NUMBER_RANGE: RangeInclusive<Number> = 1..=39;

/// How many numbers one draw contains
pub const NUMBERS_PER_DRAW: usize = 5;

/// Day names, Monday first, as printed on the draw schedule
pub const WEEKDAY_LABELS: [&str; 7] = ["一", "二", "三", "四", "五", "六", "日"];

/// Weekday of a date as 0 (Monday) to 6 (Sunday)
pub fn weekday_of(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Localized label for a weekday index (Monday = 0)
pub fn weekday_label(weekday: u8) -> &'static str {
    WEEKDAY_LABELS[weekday as usize % WEEKDAY_LABELS.len()]
}

// =============================================================================
// DrawRecord
// =============================================================================

/// One historical draw.
///
/// `numbers` keeps the drawn order, so position 0 is the first ball drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRecord {
    date: NaiveDate,
    numbers: [Number; NUMBERS_PER_DRAW],
    weekday: u8,
}

impl DrawRecord {
    /// Build a record, checking that the numbers are distinct and in range
    pub fn new(date: NaiveDate, numbers: [Number; NUMBERS_PER_DRAW]) -> Result<Self> {
        for (i, &n) in numbers.iter().enumerate() {
            if !NUMBER_RANGE.contains(&n) {
                return Err(DataLoadError::InvalidValue {
                    field: format!("number {}", i + 1),
                    value: n.to_string(),
                });
            }
            if numbers[..i].contains(&n) {
                return Err(DataLoadError::InvalidValue {
                    field: "numbers".to_string(),
                    value: format!("{:?} (duplicate {})", numbers, n),
                });
            }
        }

        Ok(Self {
            date,
            numbers,
            weekday: weekday_of(date),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The five numbers in drawn order
    pub fn numbers(&self) -> &[Number; NUMBERS_PER_DRAW] {
        &self.numbers
    }

    /// Weekday of the draw, Monday = 0
    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    pub fn contains(&self, number: Number) -> bool {
        self.numbers.contains(&number)
    }
}

// =============================================================================
// DrawCorpus
// =============================================================================

/// Every loaded draw in chronological order.
///
/// Records from overlapping sources are kept as-is; duplicates are not
/// removed. The sort is stable, so records sharing a date keep load order.
#[derive(Debug, Clone, Default)]
pub struct DrawCorpus {
    records: Vec<DrawRecord>,
}

impl DrawCorpus {
    /// Creates an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from records in any order
    pub fn from_records(mut records: Vec<DrawRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest draw dates, if any
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.date, last.date))
    }

    /// Number of draws per weekday, Monday first
    pub fn weekday_counts(&self) -> [usize; 7] {
        let mut counts = [0usize; 7];
        for record in &self.records {
            counts[record.weekday as usize] += 1;
        }
        counts
    }

    /// How often each number was drawn, indexed by number (slot 0 unused)
    pub fn number_counts(&self) -> [usize; 40] {
        let mut counts = [0usize; 40];
        for record in &self.records {
            for &n in &record.numbers {
                counts[n as usize] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_derives_weekday() {
        // 2024-01-01 was a Monday
        let record = DrawRecord::new(date(2024, 1, 1), [3, 14, 22, 30, 39]).unwrap();
        assert_eq!(record.weekday(), 0);

        let sunday = DrawRecord::new(date(2024, 1, 7), [1, 2, 3, 4, 5]).unwrap();
        assert_eq!(sunday.weekday(), 6);
        assert_eq!(weekday_label(sunday.weekday()), "日");
    }

    #[test]
    fn test_record_rejects_out_of_range() {
        assert!(DrawRecord::new(date(2024, 1, 1), [0, 2, 3, 4, 5]).is_err());
        assert!(DrawRecord::new(date(2024, 1, 1), [1, 2, 3, 4, 40]).is_err());
    }

    #[test]
    fn test_record_rejects_duplicates() {
        let err = DrawRecord::new(date(2024, 1, 1), [7, 8, 7, 9, 10]).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { .. }));
    }

    #[test]
    fn test_corpus_sorts_and_keeps_duplicates() {
        let late = DrawRecord::new(date(2024, 3, 5), [1, 2, 3, 4, 5]).unwrap();
        let early = DrawRecord::new(date(2023, 3, 5), [6, 7, 8, 9, 10]).unwrap();

        let corpus = DrawCorpus::from_records(vec![late, early, late]);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.records()[0], early);
        assert_eq!(corpus.date_range(), Some((early.date(), late.date())));
    }

    #[test]
    fn test_corpus_counts() {
        let corpus = DrawCorpus::from_records(vec![
            DrawRecord::new(date(2024, 1, 1), [1, 2, 3, 4, 5]).unwrap(),
            DrawRecord::new(date(2024, 1, 8), [1, 12, 13, 14, 15]).unwrap(),
            DrawRecord::new(date(2024, 1, 9), [1, 22, 23, 24, 25]).unwrap(),
        ]);

        let weekdays = corpus.weekday_counts();
        assert_eq!(weekdays[0], 2);
        assert_eq!(weekdays[1], 1);

        let numbers = corpus.number_counts();
        assert_eq!(numbers[1], 3);
        assert_eq!(numbers[39], 0);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = DrawCorpus::new();
        assert!(corpus.is_empty());
        assert_eq!(corpus.date_range(), None);
    }
}
