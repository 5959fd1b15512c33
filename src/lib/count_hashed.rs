use rustc_hash::FxHashMap;

use crate::compact_word::CompactWord;
use crate::counter::{WordCount, WordCounter};

/// Hash map keyed by [`CompactWord`], average O(1) per word.
///
/// Fx hashing is seedless, so iteration order is stable from one run to the next.
#[derive(Debug, Default)]
pub struct HashedCounter {
    counts: FxHashMap<CompactWord, u64>,
    total: u64,
}

impl WordCounter for HashedCounter {
    fn record(&mut self, word: CompactWord) {
        self.total += 1;
        *self.counts.entry(word).or_insert(0) += 1;
    }

    fn distinct(&self) -> usize {
        self.counts.len()
    }

    fn total(&self) -> u64 {
        self.total
    }

    fn entries(&self) -> Vec<WordCount> {
        self.counts
            .iter()
            .map(|(&word, &count)| WordCount::new(word, count))
            .collect()
    }
}
