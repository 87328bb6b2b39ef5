//! 随机图生成器
//!
//! 生成基准使用的随机稠密图：顶点标签为 "0".."n-1"，
//! 边为不重复的无向边，边权与启发值均匀随机。

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GraphConfig;
use crate::core::error::{GraphError, GraphResult};
use crate::graph::DenseGraph;

/// 随机图生成器
pub struct GraphGenerator {
    config: GraphConfig,
    rng: StdRng,
}

impl GraphGenerator {
    pub fn new(config: GraphConfig) -> GraphResult<Self> {
        config.validate().map_err(GraphError::InvalidArgument)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// 生成一张新图
    pub fn generate(&mut self) -> GraphResult<DenseGraph> {
        let n = self.config.vertex_count;
        let mut graph = DenseGraph::try_with_capacity(self.config.capacity)?;

        for i in 0..n {
            graph.add_vertex(i.to_string())?;
        }

        // 重复的顶点对（任一方向）直接丢弃重抽
        while graph.edge_count() < self.config.edge_count {
            let u = self.rng.gen_range(0..n);
            let v = self.rng.gen_range(0..n);
            if u == v || graph.has_edge(u, v) {
                continue;
            }
            let weight = self
                .rng
                .gen_range(self.config.min_weight..=self.config.max_weight);
            graph.add_edge(u, v, weight)?;
        }

        for i in 0..n {
            let heuristic = if self.config.max_heuristic == 0 {
                0
            } else {
                self.rng.gen_range(0..self.config.max_heuristic)
            };
            graph.set_heuristic(i, heuristic)?;
        }

        info!(
            "生成随机图: {} 个顶点, {} 条边",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
