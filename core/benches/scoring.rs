use criterion::{Criterion, criterion_group, criterion_main};
use hueguess_core::*;
use std::hint::black_box;

fn colors(indices: &[u8]) -> Vec<Color> {
    indices.iter().map(|&n| Color::rgb(n, n, n)).collect()
}

fn bench_scoring(c: &mut Criterion) {
    let solution = colors(&[0, 1, 2, 3]);
    let guess = colors(&[0, 3, 2, 4]);
    c.bench_function("score_4_pegs", |b| {
        b.iter(|| score(black_box(&solution), black_box(&guess)))
    });

    let solution = colors(&[1, 1, 2, 2, 3, 3, 4, 4, 5]);
    let guess = colors(&[5, 4, 4, 3, 3, 2, 2, 1, 1]);
    c.bench_function("score_9_pegs_repeats", |b| {
        b.iter(|| score(black_box(&solution), black_box(&guess)))
    });
}

fn bench_round(c: &mut Criterion) {
    c.bench_function("random_round_start", |b| {
        let config = GameConfig::default().with_menu(false);
        let mut engine = GameEngine::new(config, RandomRoundGenerator::new(1)).unwrap();
        b.iter(|| engine.restart())
    });
}

criterion_group!(benches, bench_scoring, bench_round);
criterion_main!(benches);
