use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordcount_bench::word_list;
use wordcount_bench::{
    HashedCounter, LinearCounter, MemoryWordReader, OrderedCounter, StreamWordReader, WordCounter,
    count_words,
};

const WORDS: &[&str] = &[
    "absolute", "abstract", "academic", "accepted", "accident", "accuracy", "accurate", "achieved",
    "acquired", "activity", "actually", "addition", "adequate", "adjacent", "adjusted", "advanced",
    "advisory", "advocate", "affected", "aircraft", "alliance", "although", "aluminum", "analysis",
    "announce", "anything", "anywhere", "apparent", "appendix", "approach", "approval", "argument",
];

fn generate_input(words: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    word_list::generate(WORDS, WORDS.len(), words, &mut rng, &mut out).unwrap();
    out
}

fn count_memory<C: WordCounter + Default>(input: &[u8]) -> usize {
    let counter: C = count_words(&mut MemoryWordReader::from_bytes(input));
    counter.distinct()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_words");
    for &size in &[10_000usize, 100_000] {
        let input = generate_input(size);
        group.bench_with_input(BenchmarkId::new("linear search", size), &input, |b, input| {
            b.iter(|| black_box(count_memory::<LinearCounter>(black_box(input))))
        });
        group.bench_with_input(BenchmarkId::new("ordered map", size), &input, |b, input| {
            b.iter(|| black_box(count_memory::<OrderedCounter>(black_box(input))))
        });
        group.bench_with_input(BenchmarkId::new("hash map", size), &input, |b, input| {
            b.iter(|| black_box(count_memory::<HashedCounter>(black_box(input))))
        });
    }
    group.finish();
}

fn bench_readers(c: &mut Criterion) {
    let input = generate_input(100_000);
    c.bench_function("tokenize_memory_100k", |b| {
        b.iter(|| black_box(count_memory::<HashedCounter>(black_box(&input))))
    });
    c.bench_function("tokenize_stream_100k", |b| {
        b.iter(|| {
            let counter: HashedCounter =
                count_words(&mut StreamWordReader::from_reader(black_box(input.as_slice())));
            black_box(counter.distinct())
        })
    });
}

criterion_group!(benches, bench_strategies, bench_readers);
criterion_main!(benches);
