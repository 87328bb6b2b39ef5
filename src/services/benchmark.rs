//! 基准运行器
//!
//! 在同一张图上依次（或并行）运行五个算法，记录各自的耗时。

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use super::algorithm::{AStar, BellmanFord, Bfs, Dijkstra, Distance, FloydWarshall};
use crate::config::BenchmarkConfig;
use crate::core::error::{GraphError, GraphResult};
use crate::graph::DenseGraph;

/// 参与基准的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    BellmanFord,
    AStar,
    FloydWarshall,
}

impl Algorithm {
    /// 运行顺序
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::AStar,
        Algorithm::FloydWarshall,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::AStar => "A*",
            Algorithm::FloydWarshall => "Floyd-Warshall",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 算法运行结果摘要，只用于报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// 可达顶点数
    Reached(usize),
    /// A* 到目标的代价
    Cost(Option<Distance>),
    /// 全源矩阵的直径
    Diameter(Option<Distance>),
}

/// 单个算法的耗时
#[derive(Debug, Clone, Serialize)]
pub struct Timing {
    pub algorithm: Algorithm,
    pub elapsed_micros: u64,
    pub outcome: Outcome,
}

impl Timing {
    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_micros)
    }
}

/// 基准报告
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub source: usize,
    pub goal: usize,
    pub parallel: bool,
    pub timings: Vec<Timing>,
}

impl BenchmarkReport {
    pub fn timing(&self, algorithm: Algorithm) -> Option<&Timing> {
        self.timings.iter().find(|t| t.algorithm == algorithm)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph: {} vertices, {} edges (source {}, goal {}{})",
            self.vertex_count,
            self.edge_count,
            self.source,
            self.goal,
            if self.parallel { ", parallel" } else { "" }
        )?;
        for timing in &self.timings {
            let label = format!("{}:", timing.algorithm);
            writeln!(
                f,
                "{:<16}{:>10.3} ms",
                label,
                timing.elapsed().as_secs_f64() * 1000.0
            )?;
        }
        Ok(())
    }
}

/// 基准运行器
pub struct Benchmark<'a> {
    graph: &'a DenseGraph,
    source: usize,
    goal: usize,
    parallel: bool,
}

impl<'a> Benchmark<'a> {
    pub fn new(graph: &'a DenseGraph, config: &BenchmarkConfig) -> GraphResult<Self> {
        let n = graph.vertex_count();
        if n == 0 {
            return Err(GraphError::InvalidArgument("图中没有顶点".to_string()));
        }

        let goal = config.goal.unwrap_or(n - 1);
        graph.check_index(config.source)?;
        graph.check_index(goal)?;

        Ok(Self {
            graph,
            source: config.source,
            goal,
            parallel: config.parallel,
        })
    }

    /// 每个算法运行一次并计时
    pub fn run(&self) -> GraphResult<BenchmarkReport> {
        info!(
            "开始基准测试: {} 个顶点, {} 条边",
            self.graph.vertex_count(),
            self.graph.edge_count()
        );

        let timings = if self.parallel {
            Algorithm::ALL
                .par_iter()
                .map(|&algorithm| self.measure(algorithm))
                .collect::<GraphResult<Vec<_>>>()?
        } else {
            Algorithm::ALL
                .iter()
                .map(|&algorithm| self.measure(algorithm))
                .collect::<GraphResult<Vec<_>>>()?
        };

        info!("基准测试完成");
        Ok(BenchmarkReport {
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            source: self.source,
            goal: self.goal,
            parallel: self.parallel,
            timings,
        })
    }

    /// 运行单个算法并计时
    pub fn measure(&self, algorithm: Algorithm) -> GraphResult<Timing> {
        // 只计时算法调用本身，结果摘要在计时之外计算
        let (outcome, elapsed) = match algorithm {
            Algorithm::Bfs => {
                let (result, elapsed) = timed(|| Bfs::traverse(self.graph, self.source))?;
                (Outcome::Reached(result.visited_count()), elapsed)
            }
            Algorithm::Dijkstra => {
                let (result, elapsed) =
                    timed(|| Dijkstra::shortest_distances(self.graph, self.source))?;
                (Outcome::Reached(result.reachable_count()), elapsed)
            }
            Algorithm::BellmanFord => {
                let (result, elapsed) =
                    timed(|| BellmanFord::shortest_distances(self.graph, self.source))?;
                (Outcome::Reached(result.reachable_count()), elapsed)
            }
            Algorithm::AStar => {
                let (result, elapsed) =
                    timed(|| AStar::search(self.graph, self.source, self.goal))?;
                (Outcome::Cost(result.cost()), elapsed)
            }
            Algorithm::FloydWarshall => {
                let (matrix, elapsed) = timed(|| Ok(FloydWarshall::all_pairs(self.graph)))?;
                (Outcome::Diameter(matrix.diameter()), elapsed)
            }
        };

        debug!("{} took {:?}", algorithm, elapsed);
        Ok(Timing {
            algorithm,
            elapsed_micros: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            outcome,
        })
    }
}

/// 运行 `run` 并返回其结果与耗时
fn timed<T>(run: impl FnOnce() -> GraphResult<T>) -> GraphResult<(T, Duration)> {
    let start = Instant::now();
    let value = run()?;
    Ok((value, start.elapsed()))
}
