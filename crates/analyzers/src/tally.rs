//! Insertion-ordered counting multiset.
//!
//! Every "most common" question in the recommendation pipeline goes through
//! [`Tally`]. Ranking is a stable sort by count over first-insertion order,
//! so equal counts always resolve to whichever key was seen first. That rule
//! is what makes a run fully deterministic.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of keys, remembering the order keys first appeared
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: HashMap<K, usize>,
    order: Vec<K>,
}

impl<K: Copy + Eq + Hash> Tally<K> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Record one occurrence of `key`
    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    /// Record `n` occurrences of `key`
    pub fn add_n(&mut self, key: K, n: usize) {
        match self.counts.get_mut(&key) {
            Some(count) => *count += n,
            None => {
                self.counts.insert(key, n);
                self.order.push(key);
            }
        }
    }

    /// Occurrences of `key`; zero if never seen
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Distinct keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.order.iter().copied()
    }

    /// `(key, count)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.order.iter().map(|k| (*k, self.counts[k]))
    }

    /// All keys ranked by count, highest first; ties keep first-seen order
    pub fn most_common(&self) -> Vec<(K, usize)> {
        let mut ranked: Vec<(K, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest-ranked keys
    pub fn top(&self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.most_common();
        ranked.truncate(n);
        ranked
    }
}

impl<K: Copy + Eq + Hash> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}

impl<K: Copy + Eq + Hash> Extend<K> for Tally<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}
