#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcount_bench::{MemoryWordReader, WORD_CAPACITY, WordReader};

fuzz_target!(|data: &[u8]| {
    // Every token is a non-empty run of a..z, at most WORD_CAPACITY long
    let mut reader = MemoryWordReader::from_bytes(data);
    let mut tokens = 0usize;

    for word in reader.words() {
        assert!(!word.is_empty(), "empty token before end of input");
        assert!(word.len() <= WORD_CAPACITY);
        assert!(word.chars().iter().all(u8::is_ascii_lowercase), "non-lowercase byte stored");
        tokens += 1;
    }

    // Each token needs at least one byte, plus a separator unless it ends the input
    assert!(tokens <= data.len().div_ceil(2));

    // Exhausted for good once the input is consumed
    assert_eq!(reader.remaining(), 0);
    assert!(reader.next_word().is_empty());
});
