//! Benchmark input generator.
//!
//! Picks a small random sample from a word list and writes a long stream drawn
//! from that sample, ten words per line.

use std::io::Write;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{BenchError, Result};

pub const DEFAULT_SAMPLE: usize = 100;
pub const DEFAULT_COUNT: usize = 10_000_000;
pub const WORDS_PER_LINE: usize = 10;

/// One word per line, surrounding whitespace trimmed, blank lines dropped
pub fn parse_word_list(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Write `count` words chosen uniformly from a `sample`-sized subset of `words`.
pub fn generate<R, W>(words: &[&str], sample: usize, count: usize, rng: &mut R, out: &mut W) -> Result<()>
where
    R: Rng,
    W: Write,
{
    if words.is_empty() {
        return Err(BenchError::EmptyWordList);
    }
    if sample == 0 || sample > words.len() {
        return Err(BenchError::SampleSize {
            sample,
            available: words.len(),
        });
    }

    let picked: Vec<&str> = words.choose_multiple(rng, sample).copied().collect();
    for i in 0..count {
        // `picked` is non-empty, checked above.
        let word = picked[rng.gen_range(0..picked.len())];
        out.write_all(word.as_bytes())?;
        let sep = if i % WORDS_PER_LINE == WORDS_PER_LINE - 1 { b"\n" } else { b" " };
        out.write_all(sep)?;
    }
    out.flush()?;
    Ok(())
}
