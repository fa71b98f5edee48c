use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use railyard::{find_loops, Track, TrackSpec, Traversal};

const RING_SIZE: usize = 256;

/// Ring of `n` junctions (`n` even): each root feeds the next junction's
/// left, each right pairs with a neighbor's right. Every port has exactly
/// one run, so traversal always reaches a verdict instead of a degree error.
fn ring_spec(n: usize) -> TrackSpec {
    assert!(n >= 2 && n % 2 == 0);
    let mut spec = TrackSpec::new();
    for i in 0..n {
        spec = spec.connect(
            format!("chain{i:04}"),
            format!("j{i}.root"),
            format!("j{}.left", (i + 1) % n),
        );
    }
    for i in (0..n).step_by(2) {
        spec = spec.connect(
            format!("cross{i:04}"),
            format!("j{i}.right"),
            format!("j{}.right", i + 1),
        );
    }
    spec
}

fn bench_analysis(c: &mut Criterion) {
    let spec = ring_spec(RING_SIZE);
    let track = Track::build(&spec).unwrap();

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Elements(RING_SIZE as u64));

    group.bench_function("build_ring", |b| {
        b.iter(|| Track::build(&spec).unwrap());
    });

    group.bench_function("traverse_ring", |b| {
        b.iter(|| Traversal::new(&track).seed(42).run().unwrap());
    });

    group.bench_function("find_loops_ring", |b| {
        b.iter(|| find_loops(&track));
    });

    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
