use std::path::Path;

use criterion::BenchmarkId;
use criterion::{criterion_group, criterion_main, Criterion};
use wordsquare::{source::load_words, Dictionary, BUNDLED_WORD_LIST};

pub fn criterion_benchmark(c: &mut Criterion) {
    let words = load_words(Path::new(BUNDLED_WORD_LIST)).expect("Failed to load words");

    for dimension in [3, 5] {
        c.bench_with_input(
            BenchmarkId::new("build_dictionary", dimension),
            &words,
            |b, words| {
                b.iter(|| Dictionary::build(words, dimension));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
