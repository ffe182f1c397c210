//! Merging the analyzers' candidate lists.
//!
//! The concatenated list keeps duplicates on purpose: a number proposed by
//! two analyzers carries two votes. The exposure filter, on the other hand,
//! works on the distinct numbers.

use analyzers::{Candidate, Tally};
use data_loader::Number;

/// Concatenate candidate lists in the given order, keeping duplicates
pub fn merge_candidates(lists: Vec<Vec<Candidate>>) -> Vec<Candidate> {
    lists.into_iter().flatten().collect()
}

/// First candidate for every distinct number, in order of first appearance
pub fn unique_candidates(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut seen: Vec<Number> = Vec::with_capacity(candidates.len());
    candidates
        .iter()
        .filter(|c| {
            if seen.contains(&c.number) {
                false
            } else {
                seen.push(c.number);
                true
            }
        })
        .copied()
        .collect()
}

/// One vote per candidate, counted per number in first-appearance order
pub fn count_votes(candidates: &[Candidate]) -> Tally<Number> {
    candidates.iter().map(|c| c.number).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzers::AnalysisMethod::{ColumnRepeat, TailDigit, ZoneDistribution};

    fn merged() -> Vec<Candidate> {
        merge_candidates(vec![
            vec![Candidate::new(7, ZoneDistribution), Candidate::new(3, ZoneDistribution)],
            vec![Candidate::new(3, TailDigit), Candidate::new(13, TailDigit)],
            vec![Candidate::new(13, ColumnRepeat), Candidate::new(3, ColumnRepeat)],
        ])
    }

    #[test]
    fn test_merge_keeps_order_and_duplicates() {
        let numbers: Vec<Number> = merged().iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![7, 3, 3, 13, 13, 3]);
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        let unique = unique_candidates(&merged());
        assert_eq!(
            unique,
            vec![
                Candidate::new(7, ZoneDistribution),
                Candidate::new(3, ZoneDistribution),
                Candidate::new(13, TailDigit),
            ]
        );
    }

    #[test]
    fn test_count_votes() {
        let votes = count_votes(&merged());
        assert_eq!(votes.count(&3), 3);
        assert_eq!(votes.count(&13), 2);
        assert_eq!(votes.count(&7), 1);
        assert_eq!(votes.keys().collect::<Vec<_>>(), vec![7, 3, 13]);
    }

    #[test]
    fn test_empty_inputs() {
        let merged = merge_candidates(vec![vec![], vec![], vec![]]);
        assert!(merged.is_empty());
        assert!(unique_candidates(&merged).is_empty());
        assert!(count_votes(&merged).is_empty());
    }
}
