use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use tuned_filter::filter::calc::calculate;
use tuned_filter::filter::params::FilterParameters;
use tuned_filter::report::Report;

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_calc");

    group.bench_function(BenchmarkId::new("calculate", "template_defaults"), |b| {
        b.iter_batched(
            FilterParameters::template_defaults,
            |params| calculate(&params).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function(BenchmarkId::new("report", "template_defaults"), |b| {
        let result = calculate(&FilterParameters::template_defaults()).unwrap();
        b.iter(|| Report::from_result(&result))
    });

    group.finish();
}

criterion_group!(benches, bench_calculate);
criterion_main!(benches);
