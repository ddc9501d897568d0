//! Benchmarks for regex golf evaluation.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;

use regex_golf::GolfEvaluator;

fn word_list(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn bench_component_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_selection");
    let mut rng = StdRng::seed_from_u64(42);

    for words in [10, 100, 1000] {
        let positive = word_list(&mut rng, words);
        let negative = word_list(&mut rng, words);
        let components: Vec<String> = positive
            .iter()
            .chain(&negative)
            .take(32)
            .map(|w| w[..2].to_string())
            .collect();

        let evaluator = GolfEvaluator::component_selection(positive, negative, &components)
            .expect("components are plain literals");
        let genome: Vec<f64> = (0..evaluator.genome_len())
            .map(|_| rng.gen_range(-1.0..1.0))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_words", words)),
            &words,
            |b, _| {
                b.iter(|| evaluator.evaluate(black_box(&genome)));
            },
        );
    }

    group.finish();
}

fn bench_substring_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("substring_mutation");
    let mut rng = StdRng::seed_from_u64(7);

    for words in [10, 100, 1000] {
        let positive = word_list(&mut rng, words);
        let negative = word_list(&mut rng, words);
        let evaluator = GolfEvaluator::substring_mutation(positive, negative);
        let genome: Vec<f64> = (0..5).map(|_| rng.gen_range(0.0..256.0)).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_words", words)),
            &words,
            |b, _| {
                b.iter(|| evaluator.evaluate(black_box(&genome)));
            },
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let mut rng = StdRng::seed_from_u64(3);
    let evaluator =
        GolfEvaluator::substring_mutation(word_list(&mut rng, 200), word_list(&mut rng, 200));

    for population in [16, 128, 1024] {
        let genomes: Vec<Vec<f64>> = (0..population)
            .map(|_| (0..5).map(|_| rng.gen_range(0.0..256.0)).collect())
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, _| {
                b.iter(|| evaluator.evaluate_batch(black_box(&genomes)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_component_selection,
    bench_substring_mutation,
    bench_batch
);
criterion_main!(benches);
