//! 单次算法调用的顶点状态缓冲区
//!
//! 每个算法入口自行分配一个 `SearchState`，不再共享图上的可变字段，
//! 因此同一张图上的多个算法可以并行执行。

use serde::Serialize;

/// 距离类型
pub type Distance = u64;

/// 未到达顶点的距离
pub const INFINITY: Distance = Distance::MAX;

/// 每个顶点的 visited 标记和当前距离
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
    visited: Vec<bool>,
    distance: Vec<Distance>,
}

impl SearchState {
    /// 为 `vertex_count` 个顶点创建已重置的状态：
    /// visited=false, distance=INFINITY
    pub fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            distance: vec![INFINITY; vertex_count],
        }
    }

    #[inline]
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited[index]
    }

    #[inline]
    pub fn mark_visited(&mut self, index: usize) {
        self.visited[index] = true;
    }

    #[inline]
    pub fn distance(&self, index: usize) -> Distance {
        self.distance[index]
    }

    #[inline]
    pub fn set_distance(&mut self, index: usize, distance: Distance) {
        self.distance[index] = distance;
    }

    pub(crate) fn into_parts(self) -> (Vec<bool>, Vec<Distance>) {
        (self.visited, self.distance)
    }
}

/// 单源最短路径结果（Dijkstra / Bellman-Ford）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// 起点
    pub source: usize,
    /// 各顶点距离，不可达为 `INFINITY`
    pub distances: Vec<Distance>,
    /// 算法结束时的 visited 标记（Bellman-Ford 不使用，全为 false）
    pub visited: Vec<bool>,
}

impl ShortestPaths {
    pub(crate) fn from_state(source: usize, state: SearchState) -> Self {
        let (visited, distances) = state.into_parts();
        Self {
            source,
            distances,
            visited,
        }
    }

    /// 到目标顶点的最短距离，不可达或越界返回 None
    pub fn distance_to(&self, target: usize) -> Option<Distance> {
        self.distances
            .get(target)
            .copied()
            .filter(|&d| d != INFINITY)
    }

    /// 可达顶点数（含起点）
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != INFINITY).count()
    }
}
