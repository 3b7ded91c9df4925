use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use boggle_tools::{Boggle, Grid};

/// A few thousand pseudo-words, heavy on common letters so that many
/// prefixes survive pruning.
fn word_list(count: usize, seed: u64) -> Vec<String> {
    const LETTERS: &[u8] = b"aaabcdeeeefghiiijklmnooopqrssttuuvwxyz";
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..9);
            (0..len).map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char).collect()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = word_list(20_000, 7);

    let mut group = c.benchmark_group("solve");
    group.sample_size(20);
    for side in [4usize, 5, 6] {
        let boggle = Boggle::new(Grid::random_with_seed(side, side as u64), words.clone());
        group.bench_with_input(BenchmarkId::from_parameter(format!("{}x{}", side, side)), &boggle,
                               |b, boggle| b.iter(|| boggle.solve()));
    }
    group.finish();

    c.bench_function("build index (20k words)", |b| {
        b.iter(|| Boggle::new(Grid::empty(), words.clone()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
