//! Filter that keeps only numbers with ordinary exposure.
//!
//! Under a uniform draw each number is expected to come up
//! `draws * 5 / 39` times in the window. Numbers drawn much more often than
//! that are "hot", numbers drawn much less often are "cold"; both are
//! dropped.

use crate::traits::Filter;
use analyzers::{AnalysisWindow, Candidate, Tally};
use anyhow::Result;
use data_loader::{NUMBER_RANGE, NUMBERS_PER_DRAW, Number};
use serde::Serialize;

/// Where a number sits relative to the expected frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Exposure {
    Hot,
    Normal,
    Cold,
}

/// Hot/cold classification of the whole number range for one window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureBands {
    /// Expected hits per number under a uniform draw
    pub baseline: f64,
    pub hot: Vec<Number>,
    pub cold: Vec<Number>,
}

/// Removes candidates whose window frequency is outside the normal band.
///
/// ## Algorithm
/// For each candidate:
/// 1. Count its hits across all five positions of the window
/// 2. Hot if hits > baseline * hot_ratio
/// 3. Cold if hits < baseline * cold_ratio
/// 4. Keep only if neither
///
/// An empty window has no baseline, so every candidate passes.
pub struct ExposureFilter {
    hot_ratio: f64,
    cold_ratio: f64,
}

impl ExposureFilter {
    /// Create a filter with the standard 1.2 / 0.6 bands
    pub fn new() -> Self {
        Self {
            hot_ratio: 1.2,
            cold_ratio: 0.6,
        }
    }

    /// Configure the hot and cold ratios against the baseline
    pub fn with_bands(mut self, hot_ratio: f64, cold_ratio: f64) -> Self {
        self.hot_ratio = hot_ratio;
        self.cold_ratio = cold_ratio;
        self
    }

    /// Expected hits per number for a window of this size
    pub fn baseline(window: &AnalysisWindow) -> f64 {
        let hits = window.len() * NUMBERS_PER_DRAW;
        hits as f64 / NUMBER_RANGE.count() as f64
    }

    fn classify_count(&self, count: usize, baseline: f64) -> Exposure {
        let count = count as f64;
        if count > baseline * self.hot_ratio {
            Exposure::Hot
        } else if count < baseline * self.cold_ratio {
            Exposure::Cold
        } else {
            Exposure::Normal
        }
    }

    /// Classification of one number; always `Normal` for an empty window
    pub fn exposure_of(&self, number: Number, window: &AnalysisWindow) -> Exposure {
        if window.is_empty() {
            return Exposure::Normal;
        }
        let counts = window.number_tally();
        self.classify_count(counts.count(&number), Self::baseline(window))
    }

    /// Hot and cold numbers across the whole number range
    pub fn bands(&self, window: &AnalysisWindow) -> ExposureBands {
        let baseline = Self::baseline(window);
        let mut bands = ExposureBands {
            baseline,
            hot: Vec::new(),
            cold: Vec::new(),
        };
        if window.is_empty() {
            return bands;
        }

        let counts = window.number_tally();
        for n in NUMBER_RANGE {
            match self.classify_count(counts.count(&n), baseline) {
                Exposure::Hot => bands.hot.push(n),
                Exposure::Cold => bands.cold.push(n),
                Exposure::Normal => {}
            }
        }
        bands
    }

    fn keep(&self, number: Number, counts: &Tally<Number>, baseline: f64) -> bool {
        self.classify_count(counts.count(&number), baseline) == Exposure::Normal
    }
}

impl Default for ExposureFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for ExposureFilter {
    fn name(&self) -> &str {
        "ExposureFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, window: &AnalysisWindow) -> Result<Vec<Candidate>> {
        if window.is_empty() {
            return Ok(candidates);
        }

        let counts = window.number_tally();
        let baseline = Self::baseline(window);

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| self.keep(candidate.number, &counts, baseline))
            .collect();

        Ok(filtered)
    }
}
