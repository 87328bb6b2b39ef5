//! 集成测试共享工具模块
//!
//! 提供构图辅助函数，供所有集成测试使用

#![allow(dead_code)]

use graphbench::config::GraphConfig;
use graphbench::services::GraphGenerator;
use graphbench::DenseGraph;

/// 按边列表构建图，顶点标签为索引
pub fn build_graph(n: usize, edges: &[(usize, usize, u32)]) -> DenseGraph {
    let mut graph = DenseGraph::with_capacity(n);
    for i in 0..n {
        graph
            .add_vertex(i.to_string())
            .expect("Vertex should fit in test");
    }
    for &(u, v, w) in edges {
        graph.add_edge(u, v, w).expect("Edge should be valid in test");
    }
    graph
}

/// 4 个顶点的环：0-1-2-3 权重为1，0-3 权重为10
pub fn square_graph() -> DenseGraph {
    build_graph(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 10)])
}

/// 在 `square_graph` 的基础上增加孤立顶点 4
pub fn square_with_isolated() -> DenseGraph {
    build_graph(5, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 10)])
}

/// 固定种子的随机图
pub fn random_graph(seed: u64, vertex_count: usize, edge_count: usize) -> DenseGraph {
    let config = GraphConfig {
        capacity: vertex_count,
        vertex_count,
        edge_count,
        seed: Some(seed),
        ..GraphConfig::default()
    };
    GraphGenerator::new(config)
        .and_then(|mut generator| generator.generate())
        .expect("Random graph generation should succeed in test")
}

/// 用于属性检查的一组随机图，包含稀疏（可能不连通）和稠密情况
pub fn random_graphs() -> Vec<DenseGraph> {
    vec![
        random_graph(1, 20, 15),
        random_graph(2, 40, 60),
        random_graph(3, 60, 400),
        random_graph(4, 30, 435),
        random_graph(5, 80, 120),
    ]
}
