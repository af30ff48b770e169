mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use map_lod::prelude::{GrouperConfig, RegionGrouper};

fn grouping_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping/build");

    for &n in &[1_000usize, 10_000, 50_000] {
        let points = common::synthetic_points(n, 96);
        let grouper = RegionGrouper::new(GrouperConfig::default());
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let clusters = grouper.build(&points);
                black_box(clusters);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = grouping_benches
}
criterion_main!(benches);
