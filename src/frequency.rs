use std::collections::HashMap;

use itertools::Itertools;

/// Occurrence count of every distinct character of a text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<char, usize>,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Self {
        FrequencyTable {
            counts: text.chars().counts(),
        }
    }

    pub fn get(&self, symbol: char) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of symbols counted, repeats included.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + Clone + '_ {
        self.counts
            .iter()
            .map(|(&symbol, &count)| (symbol, count))
            .sorted()
    }

    /// Combines the counts of two partial tables, e.g. from separately counted shards.
    pub fn merge(mut self, other: &FrequencyTable) -> Self {
        for (&symbol, &count) in other.counts.iter() {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
        self
    }
}

impl FromIterator<(char, usize)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (char, usize)>>(iter: T) -> Self {
        let mut counts = HashMap::new();
        for (symbol, count) in iter {
            *counts.entry(symbol).or_insert(0) += count;
        }
        FrequencyTable { counts }
    }
}
