use criterion::{black_box, criterion_group, criterion_main, Criterion};

use graphbench::config::GraphConfig;
use graphbench::services::algorithm::{AStar, BellmanFord, Bfs, Dijkstra, FloydWarshall};
use graphbench::services::GraphGenerator;
use graphbench::DenseGraph;

fn bench_graph() -> DenseGraph {
    let config = GraphConfig {
        capacity: 200,
        vertex_count: 200,
        edge_count: 4_000,
        seed: Some(42),
        ..GraphConfig::default()
    };
    GraphGenerator::new(config)
        .and_then(|mut generator| generator.generate())
        .expect("Benchmark graph should generate")
}

fn algorithms(c: &mut Criterion) {
    let graph = bench_graph();
    let goal = graph.vertex_count() - 1;

    let mut group = c.benchmark_group("dense_200");
    group.bench_function("bfs", |b| b.iter(|| Bfs::traverse(black_box(&graph), 0)));
    group.bench_function("dijkstra", |b| {
        b.iter(|| Dijkstra::shortest_distances(black_box(&graph), 0))
    });
    group.bench_function("bellman_ford", |b| {
        b.iter(|| BellmanFord::shortest_distances(black_box(&graph), 0))
    });
    group.bench_function("a_star", |b| {
        b.iter(|| AStar::search(black_box(&graph), 0, goal))
    });
    group.sample_size(10);
    group.bench_function("floyd_warshall", |b| {
        b.iter(|| FloydWarshall::all_pairs(black_box(&graph)))
    });
    group.finish();
}

criterion_group!(benches, algorithms);
criterion_main!(benches);
