#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcount_bench::{
    HashedCounter, LinearCounter, MemoryWordReader, OrderedCounter, WordCount, WordCounter,
    count_words,
};

fn sorted_entries<C: WordCounter + Default>(data: &[u8]) -> (Vec<WordCount>, u64) {
    let counter: C = count_words(&mut MemoryWordReader::from_bytes(data));
    let mut entries = counter.entries();
    entries.sort();
    (entries, counter.total())
}

fuzz_target!(|data: &[u8]| {
    // All three strategies must agree on every (word, count) pair
    let linear = sorted_entries::<LinearCounter>(data);
    let ordered = sorted_entries::<OrderedCounter>(data);
    let hashed = sorted_entries::<HashedCounter>(data);

    assert_eq!(linear, ordered, "linear/ordered mismatch");
    assert_eq!(linear, hashed, "linear/hashed mismatch");

    let summed: u64 = linear.0.iter().map(|e| e.count).sum();
    assert_eq!(summed, linear.1, "entry counts do not add up to total");
});
