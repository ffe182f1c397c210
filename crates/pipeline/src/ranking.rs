//! Frequency ranking of the filtered candidates.
//!
//! Votes come from the full, duplicate-containing candidate list, so a
//! number backed by all three analyzers outranks one backed by a single
//! analyzer. Only numbers that survived filtering are eligible.

use analyzers::{Candidate, Tally};
use data_loader::Number;
use tracing::debug;

/// Default size of the primary set
pub const DEFAULT_PRIMARY_SIZE: usize = 5;

/// Picks the primary set from filtered candidates by vote count
pub struct FrequencyRanker {
    limit: usize,
}

impl FrequencyRanker {
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_PRIMARY_SIZE,
        }
    }

    /// Configure the size of the primary set (default: 5)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Rank surviving numbers by votes, highest first.
    ///
    /// Ties keep the order in which numbers first appeared among the votes.
    ///
    /// # Arguments
    /// * `votes` - Vote counts over the unfiltered candidate list
    /// * `survivors` - Candidates that passed the filters
    pub fn rank(&self, votes: &Tally<Number>, survivors: &[Candidate]) -> Vec<Number> {
        let primary: Vec<Number> = votes
            .most_common()
            .into_iter()
            .filter(|(n, _)| survivors.iter().any(|c| c.number == *n))
            .map(|(n, _)| n)
            .take(self.limit)
            .collect();

        debug!(
            "Ranked {} survivors into primary set {:?}",
            survivors.len(),
            primary
        );
        primary
    }
}

impl Default for FrequencyRanker {
    fn default() -> Self {
        Self::new()
    }
}
