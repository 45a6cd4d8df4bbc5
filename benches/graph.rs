//! Benchmarks for dependency graph operations.
//!
//! Measures:
//! - Strongly connected components over a long chain and a long ring
//! - Cycle detection on a wide, layered DAG
//! - Verified insertion throughput
//! - Descendant enumeration

extern crate depcycle;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use depcycle::Graph;
use std::hint::black_box;

/// m0 -> m1 -> ... -> m(n-1), optionally closed into a ring.
fn chain(n: usize, ring: bool) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n - 1 {
        graph.add(&format!("m{i}"), format!("m{}", i + 1));
    }
    if ring {
        graph.add(&format!("m{}", n - 1), "m0");
    }
    graph
}

/// `layers` layers of `width` vertices, each depending on every vertex of the
/// next layer.
fn layered(layers: usize, width: usize) -> Graph {
    let mut graph = Graph::new();
    for layer in 0..layers - 1 {
        let next: Vec<String> = (0..width).map(|j| format!("l{}_{j}", layer + 1)).collect();
        for j in 0..width {
            graph.add(&format!("l{layer}_{j}"), &next);
        }
    }
    graph
}

fn bench_scc_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc_chain");
    for n in [1_000, 10_000, 100_000] {
        let graph = chain(n, false);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| black_box(graph.strongly_connected_components().len()));
        });
    }
    group.finish();
}

fn bench_scc_ring(c: &mut Criterion) {
    let graph = chain(100_000, true);
    c.bench_function("scc_ring_100k", |b| {
        b.iter(|| black_box(graph.cycles().len()));
    });
}

fn bench_has_cycle_layered(c: &mut Criterion) {
    let graph = layered(20, 50);
    c.bench_function("has_cycle_layered_20x50", |b| {
        b.iter(|| black_box(graph.has_cycle()));
    });
}

fn bench_add_and_verify(c: &mut Criterion) {
    c.bench_function("add_and_verify_chain_500", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            for i in 0..500 {
                graph
                    .add_and_verify(&format!("m{i}"), format!("m{}", i + 1))
                    .unwrap();
            }
            black_box(graph.len())
        });
    });
}

fn bench_descendants(c: &mut Criterion) {
    let graph = layered(20, 50);
    c.bench_function("descendants_layered_20x50", |b| {
        b.iter(|| black_box(graph.descendants("l0_0").unwrap().len()));
    });
}

criterion_group!(
    benches,
    bench_scc_chain,
    bench_scc_ring,
    bench_has_cycle_layered,
    bench_add_and_verify,
    bench_descendants
);
criterion_main!(benches);
