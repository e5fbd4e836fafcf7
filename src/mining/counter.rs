//! Frequency tables with first-seen ordering
//!
//! Counts are order-independent; ranking ties are broken by the order in
//! which tokens were first added, which `IndexMap` preserves both in memory
//! and through a JSON round trip.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Token to occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence.
    pub fn add(&mut self, token: impl Into<String>) {
        self.add_n(token, 1);
    }

    /// Record `n` occurrences.
    pub fn add_n(&mut self, token: impl Into<String>, n: usize) {
        *self.counts.entry(token.into()).or_insert(0) += n;
    }

    /// Record one occurrence of every token in the sequence.
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in tokens {
            self.add(token);
        }
    }

    /// Accumulate another table; new tokens are appended in its order.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (token, count) in other.iter() {
            self.add_n(token.as_str(), count);
        }
    }

    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, usize)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    /// The `n` highest counts, descending; ties keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(&String, usize)> = self.iter().collect();
        // sort_by is stable, so equal counts stay in insertion order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
            .into_iter()
            .take(n)
            .map(|(token, count)| (token.clone(), count))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}
