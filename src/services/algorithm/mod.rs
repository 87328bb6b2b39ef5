//! 算法模块
//!
//! 稠密图上的遍历与最短路径算法。每个算法以 `&DenseGraph` 为输入，
//! 在自己的状态缓冲区上运行，不修改图的拓扑。

pub mod astar;
pub mod bellman_ford;
pub mod bfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod queue;
pub mod state;

// 重新导出常用算法结构体
pub use astar::{AStar, AStarResult};
pub use bellman_ford::BellmanFord;
pub use bfs::{Bfs, TraversalResult};
pub use dijkstra::Dijkstra;
pub use floyd_warshall::{DistanceMatrix, FloydWarshall};
pub use queue::{MinQueue, ScoredVertex};
pub use state::{Distance, SearchState, ShortestPaths, INFINITY};

use crate::core::error::GraphResult;
use crate::graph::DenseGraph;

impl DenseGraph {
    /// 标记从 `source` 可达的顶点
    pub fn traverse(&self, source: usize) -> GraphResult<TraversalResult> {
        Bfs::traverse(self, source)
    }

    pub fn dijkstra(&self, source: usize) -> GraphResult<ShortestPaths> {
        Dijkstra::shortest_distances(self, source)
    }

    pub fn bellman_ford(&self, source: usize) -> GraphResult<ShortestPaths> {
        BellmanFord::shortest_distances(self, source)
    }

    pub fn a_star(&self, source: usize, goal: usize) -> GraphResult<AStarResult> {
        AStar::search(self, source, goal)
    }

    pub fn floyd_warshall(&self) -> DistanceMatrix {
        FloydWarshall::all_pairs(self)
    }
}
