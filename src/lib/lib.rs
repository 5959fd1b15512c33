// Library interface for wordcount-bench
// Exposes the word type, readers, counters and harness for the binaries, benches and fuzz targets

pub mod compact_word;
#[cfg(test)]
mod compact_word_test;
pub mod count_hashed;
pub mod count_linear;
pub mod count_ordered;
pub mod counter;
pub mod error;
pub mod harness;
pub mod word_list;
pub mod word_reader;

pub use compact_word::{CompactWord, WORD_CAPACITY};
pub use count_hashed::HashedCounter;
pub use count_linear::LinearCounter;
pub use count_ordered::OrderedCounter;
pub use counter::{WordCount, WordCounter, count_words};
pub use error::{BenchError, Result};
pub use harness::{Harness, RunReport, StrategyEntry, default_strategies, write_report};
pub use word_reader::{MemoryWordReader, ReadMode, StreamWordReader, WordReader, WordSource};
