//! Criterion benchmarks for the reward sweep
//!
//! Run with: cargo bench -p splitsim_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use splitsim_core::analysis::{SensitivityParameter, sensitivity};
use splitsim_core::{ScenarioInputs, summarize, sweep};

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");

    for resolution in [200, 2_000, 20_000] {
        let inputs = ScenarioInputs {
            resolution,
            ..Default::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &inputs,
            |b, inputs| b.iter(|| sweep(black_box(inputs))),
        );
    }

    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    // What a single slider change costs: sweep plus summary
    let inputs = ScenarioInputs::default();
    c.bench_function("sweep_and_summarize_default", |b| {
        b.iter(|| {
            let result = sweep(black_box(&inputs));
            summarize(&result, black_box(inputs.highlight_split))
        })
    });
}

fn bench_sensitivity(c: &mut Criterion) {
    let inputs = ScenarioInputs::default();
    let values = SensitivityParameter::PoolDominance.default_values(&inputs, 20);
    c.bench_function("sensitivity_pool_dominance_20", |b| {
        b.iter(|| {
            sensitivity(
                black_box(&inputs),
                SensitivityParameter::PoolDominance,
                &values,
            )
        })
    });
}

criterion_group!(benches, bench_sweep, bench_recompute, bench_sensitivity);
criterion_main!(benches);
