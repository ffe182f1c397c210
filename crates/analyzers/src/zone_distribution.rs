//! Zone-Distribution Analyzer
//!
//! Finds where in the number space recent draws have clustered and picks the
//! hottest numbers from there.
//!
//! ## Algorithm
//! 1. Count how often each number was drawn in the window
//! 2. Score each zone as the sum of its members' counts
//! 3. Take the two highest-scoring zones (earlier zone wins ties)
//! 4. From each, take its two most drawn numbers (lower number wins ties)
//!
//! Zones that never came up are not picked, so a window whose draws all fall
//! in one zone yields at most two numbers. Inside a picked zone, members that
//! were never drawn still rank (last, by number).

use crate::tally::Tally;
use crate::traits::Analyzer;
use crate::types::AnalysisMethod;
use crate::window::AnalysisWindow;
use crate::zones::{ZONES, Zone};
use data_loader::Number;
use tracing::{debug, instrument};

pub struct ZoneDistributionAnalyzer {
    /// How many zones to pick numbers from
    zone_count: usize,

    /// How many numbers to take from each picked zone
    per_zone: usize,
}

impl ZoneDistributionAnalyzer {
    pub fn new() -> Self {
        Self {
            zone_count: 2,
            per_zone: 2,
        }
    }

    /// Configure how many zones are picked (default: 2)
    pub fn with_zone_count(mut self, zone_count: usize) -> Self {
        self.zone_count = zone_count;
        self
    }

    /// Configure how many numbers come from each zone (default: 2)
    pub fn with_per_zone(mut self, per_zone: usize) -> Self {
        self.per_zone = per_zone;
        self
    }

    /// Every zone with its score, ranked highest first
    pub fn zone_scores(&self, window: &AnalysisWindow) -> Vec<(Zone, usize)> {
        rank_zones(&window.number_tally())
    }
}

impl Default for ZoneDistributionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for ZoneDistributionAnalyzer {
    fn method(&self) -> AnalysisMethod {
        AnalysisMethod::ZoneDistribution
    }

    #[instrument(skip(self, window), fields(window = window.len()))]
    fn analyze(&self, window: &AnalysisWindow) -> Vec<Number> {
        let counts = window.number_tally();
        let mut picks = Vec::with_capacity(self.zone_count * self.per_zone);

        for (zone, score) in rank_zones(&counts)
            .into_iter()
            .filter(|(_, score)| *score > 0)
            .take(self.zone_count)
        {
            let mut members: Vec<(Number, usize)> = zone
                .members()
                .map(|n| (n, counts.count(&n)))
                .collect();
            // Stable sort keeps ascending member order among equal counts
            members.sort_by(|a, b| b.1.cmp(&a.1));

            debug!("Zone {} scored {}", zone.id, score);
            picks.extend(members.into_iter().take(self.per_zone).map(|(n, _)| n));
        }

        debug!("Zone-distribution picks: {:?}", picks);
        picks
    }
}

fn rank_zones(counts: &Tally<Number>) -> Vec<(Zone, usize)> {
    let mut scored: Vec<(Zone, usize)> = ZONES
        .iter()
        .map(|zone| (*zone, zone.members().map(|n| counts.count(&n)).sum()))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}
