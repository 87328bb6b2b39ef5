//! A*算法模块
//!
//! 使用顶点上设置的启发值，从起点搜索到目标。
//! 启发值是否可采纳（admissible）不做检查：只有可采纳时结果才保证最优。

use log::debug;
use serde::Serialize;

use super::queue::MinQueue;
use super::state::{Distance, SearchState, INFINITY};
use crate::core::error::GraphResult;
use crate::graph::DenseGraph;

/// A*算法结构体
pub struct AStar;

/// A*搜索结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AStarResult {
    pub source: usize,
    pub goal: usize,
    /// 从起点到各顶点的已知最小代价
    pub g_score: Vec<Distance>,
    /// 已展开顶点（目标顶点不会被标记）
    pub visited: Vec<bool>,
    /// 展开的顶点数
    pub expanded: usize,
}

impl AStarResult {
    /// 到目标的代价，不可达返回 None
    pub fn cost(&self) -> Option<Distance> {
        self.g_score
            .get(self.goal)
            .copied()
            .filter(|&g| g != INFINITY)
    }

    pub fn found(&self) -> bool {
        self.cost().is_some()
    }
}

impl AStar {
    /// 从 `source` 搜索到 `goal`
    ///
    /// # 参数
    /// - `graph`: 稠密图，启发值取自 `Vertex::heuristic`
    /// - `source`: 起始顶点
    /// - `goal`: 目标顶点
    ///
    /// # 返回
    /// 搜索结果，`g_score[goal]` 为最终代价；目标不可达时为 `INFINITY`
    pub fn search(graph: &DenseGraph, source: usize, goal: usize) -> GraphResult<AStarResult> {
        graph.check_index(source)?;
        graph.check_index(goal)?;

        let n = graph.vertex_count();
        let mut state = SearchState::new(n);
        let mut g_score = vec![INFINITY; n];
        let mut open_set = MinQueue::new();
        let mut expanded = 0usize;

        g_score[source] = 0;
        open_set.push(u64::from(graph.heuristic_unchecked(source)), source);

        while let Some(current) = open_set.pop() {
            let u = current.vertex;
            if u == goal {
                break;
            }

            if state.is_visited(u) {
                continue;
            }
            state.mark_visited(u);
            expanded += 1;

            for (v, weight) in graph.neighbors(u) {
                if state.is_visited(v) {
                    continue;
                }

                let tentative_g_score = g_score[u] + u64::from(weight);
                if tentative_g_score < g_score[v] {
                    g_score[v] = tentative_g_score;
                    let f_score = tentative_g_score + u64::from(graph.heuristic_unchecked(v));
                    open_set.push(f_score, v);
                }
            }
        }

        debug!(
            "A* {} -> {} expanded {} vertices, cost {:?}",
            source,
            goal,
            expanded,
            (g_score[goal] != INFINITY).then_some(g_score[goal])
        );

        let (visited, _) = state.into_parts();
        Ok(AStarResult {
            source,
            goal,
            g_score,
            visited,
            expanded,
        })
    }
}
