use std::collections::BTreeMap;

use crate::compact_word::CompactWord;
use crate::counter::{WordCount, WordCounter};

/// Balanced ordered map keyed by [`CompactWord`]'s integer order, O(log n) per word.
#[derive(Debug, Default)]
pub struct OrderedCounter {
    counts: BTreeMap<CompactWord, u64>,
    total: u64,
}

impl WordCounter for OrderedCounter {
    fn record(&mut self, word: CompactWord) {
        self.total += 1;
        // Missing keys start at zero, then every hit adds one.
        *self.counts.entry(word).or_insert(0) += 1;
    }

    fn distinct(&self) -> usize {
        self.counts.len()
    }

    fn total(&self) -> u64 {
        self.total
    }

    /// Entries in ascending word order
    fn entries(&self) -> Vec<WordCount> {
        self.counts
            .iter()
            .map(|(&word, &count)| WordCount::new(word, count))
            .collect()
    }
}
