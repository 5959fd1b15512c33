use crate::compact_word::CompactWord;
use crate::counter::{WordCount, WordCounter};

/// Unsorted list of entries searched front to back on every word.
///
/// O(n) per lookup; distinct words keep first-seen order.
#[derive(Debug, Default)]
pub struct LinearCounter {
    entries: Vec<WordCount>,
    total: u64,
}

impl WordCounter for LinearCounter {
    fn record(&mut self, word: CompactWord) {
        self.total += 1;
        match self.entries.iter_mut().find(|entry| entry.word == word) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(WordCount::new(word, 1)),
        }
    }

    fn distinct(&self) -> usize {
        self.entries.len()
    }

    fn total(&self) -> u64 {
        self.total
    }

    fn entries(&self) -> Vec<WordCount> {
        self.entries.clone()
    }
}
