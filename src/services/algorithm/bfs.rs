//! BFS算法模块
//!
//! 从起点出发标记所有可达顶点。
//!
//! 注意：这里的遍历不是教科书式的层序 BFS。每次出队一个顶点后，
//! 反复从索引 0 开始扫描，找到它的第一个未访问邻居并入队，直到该顶点
//! 没有未访问邻居为止。访问顺序是扫描顺序的产物，不保证按边数由近到远。
//! 可达集合与标准 BFS 相同。

use std::collections::VecDeque;

use log::debug;
use serde::Serialize;

use super::state::SearchState;
use crate::core::error::GraphResult;
use crate::graph::{DenseGraph, NO_EDGE};

/// BFS算法结构体
pub struct Bfs;

/// 遍历结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    /// 起点
    pub source: usize,
    /// 各顶点是否可达
    pub visited: Vec<bool>,
    /// 标记顺序，起点在首位
    pub order: Vec<usize>,
}

impl TraversalResult {
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(false)
    }

    pub fn visited_count(&self) -> usize {
        self.order.len()
    }
}

impl Bfs {
    /// 遍历从 `source` 可达的所有顶点
    pub fn traverse(graph: &DenseGraph, source: usize) -> GraphResult<TraversalResult> {
        graph.check_index(source)?;

        let mut state = SearchState::new(graph.vertex_count());
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut order = Vec::new();

        state.mark_visited(source);
        order.push(source);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            while let Some(next) = Self::first_unvisited_neighbor(graph, &state, current) {
                state.mark_visited(next);
                order.push(next);
                queue.push_back(next);
            }
        }

        debug!("BFS from {} reached {} vertices", source, order.len());

        let (visited, _) = state.into_parts();
        Ok(TraversalResult {
            source,
            visited,
            order,
        })
    }

    /// 从索引 0 开始扫描，返回第一个未访问的邻居
    fn first_unvisited_neighbor(
        graph: &DenseGraph,
        state: &SearchState,
        vertex: usize,
    ) -> Option<usize> {
        (0..graph.vertex_count())
            .find(|&j| graph.weight_unchecked(vertex, j) != NO_EDGE && !state.is_visited(j))
    }
}
