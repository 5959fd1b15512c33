use crate::compact_word::CompactWord;
use crate::word_reader::WordReader;

/// One distinct word and the number of times it was seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WordCount {
    pub word: CompactWord,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: CompactWord, count: u64) -> Self {
        WordCount { word, count }
    }
}

/// Counting structure shared by every strategy.
///
/// Strategies only differ in how `record` finds the entry for a word; the
/// resulting multiset of `(word, count)` pairs is the same for all of them.
pub trait WordCounter {
    /// Count one occurrence of a non-empty word
    fn record(&mut self, word: CompactWord);

    /// Number of distinct words seen so far
    fn distinct(&self) -> usize;

    /// Total occurrences recorded
    fn total(&self) -> u64;

    /// Snapshot of every entry, in the counter's own iteration order
    fn entries(&self) -> Vec<WordCount>;
}

/// Drain `reader`, recording every word into a fresh `C`.
pub fn count_words<C, R>(reader: &mut R) -> C
where
    C: WordCounter + Default,
    R: WordReader,
{
    let mut counter = C::default();
    loop {
        let word = reader.next_word();
        if word.is_empty() {
            break;
        }
        counter.record(word);
    }
    counter
}
