#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcount_bench::{CompactWord, MemoryWordReader, StreamWordReader, WordReader};

fuzz_target!(|data: &[u8]| {
    // Whole-file and streaming readers must produce identical token sequences
    let memory: Vec<CompactWord> = MemoryWordReader::from_bytes(data).words().collect();
    let stream: Vec<CompactWord> = StreamWordReader::from_reader(data).words().collect();
    assert_eq!(memory, stream, "memory/stream token mismatch");
});
