//! 基准驱动集成测试
//!
//! 测试范围：
//! - 随机图生成与配置
//! - 顺序 / 并行运行基准

mod common;

use common::random_graph;
use graphbench::config::{BenchmarkConfig, Config, GraphConfig};
use graphbench::services::{Algorithm, Benchmark, GraphGenerator, Outcome};
use graphbench::GraphError;

#[test]
fn test_default_run_shape() {
    // 与默认配置相同的规模：500 个顶点，20000 条边
    let mut config = Config::default();
    config.graph.seed = Some(2024);

    let graph = GraphGenerator::new(config.graph.clone())
        .and_then(|mut generator| generator.generate())
        .expect("Generation should succeed");
    assert_eq!(graph.vertex_count(), 500);
    assert_eq!(graph.edge_count(), 20_000);

    let report = Benchmark::new(&graph, &config.benchmark)
        .and_then(|benchmark| benchmark.run())
        .expect("Benchmark should run");
    assert_eq!(report.goal, 499);
    assert_eq!(report.timings.len(), Algorithm::ALL.len());
}

#[test]
fn test_parallel_and_sequential_agree() {
    let graph = random_graph(11, 60, 200);

    let sequential = Benchmark::new(&graph, &BenchmarkConfig::default())
        .and_then(|benchmark| benchmark.run())
        .expect("Benchmark should run");
    let parallel = Benchmark::new(
        &graph,
        &BenchmarkConfig {
            parallel: true,
            ..BenchmarkConfig::default()
        },
    )
    .and_then(|benchmark| benchmark.run())
    .expect("Benchmark should run");

    for algorithm in Algorithm::ALL {
        assert_eq!(
            sequential.timing(algorithm).map(|t| &t.outcome),
            parallel.timing(algorithm).map(|t| &t.outcome)
        );
    }

    // BFS、Dijkstra、Bellman-Ford 的可达顶点数一致
    let reached: Vec<&Outcome> = [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::BellmanFord]
        .iter()
        .filter_map(|&a| sequential.timing(a).map(|t| &t.outcome))
        .collect();
    assert_eq!(reached.len(), 3);
    assert!(reached.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_generator_rejects_overflowing_capacity() {
    let config = GraphConfig {
        capacity: 10,
        vertex_count: 11,
        edge_count: 0,
        ..GraphConfig::default()
    };
    assert!(matches!(
        GraphGenerator::new(config),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_generator_rejects_empty_weight_range() {
    let config = GraphConfig {
        vertex_count: 10,
        edge_count: 5,
        min_weight: 5,
        max_weight: 4,
        ..GraphConfig::default()
    };
    assert!(GraphGenerator::new(config).is_err());
}
