//! Bellman-Ford算法模块
//!
//! 单源最短路径，对每条有向边 (u, v) 反复松弛，最多执行 n-1 轮。
//! 图的边权都为正，这里不会出现负权环；`shortest_distances_checked`
//! 额外执行一轮检测，供通用场景使用。

use log::debug;

use super::state::{SearchState, ShortestPaths, INFINITY};
use crate::core::error::{GraphError, GraphResult};
use crate::graph::DenseGraph;

/// Bellman-Ford算法结构体
pub struct BellmanFord;

impl BellmanFord {
    /// 执行Bellman-Ford算法，不检测负权环
    pub fn shortest_distances(graph: &DenseGraph, source: usize) -> GraphResult<ShortestPaths> {
        let (state, _) = Self::relax_all(graph, source)?;
        Ok(ShortestPaths::from_state(source, state))
    }

    /// 执行Bellman-Ford算法，若第 n 轮仍可松弛则返回 `NegativeCycle`
    pub fn shortest_distances_checked(
        graph: &DenseGraph,
        source: usize,
    ) -> GraphResult<ShortestPaths> {
        let (mut state, converged) = Self::relax_all(graph, source)?;

        if !converged && Self::relax_pass(graph, &mut state) {
            return Err(GraphError::NegativeCycle);
        }

        Ok(ShortestPaths::from_state(source, state))
    }

    /// 返回最终状态，以及是否在 n-1 轮之前已收敛
    fn relax_all(graph: &DenseGraph, source: usize) -> GraphResult<(SearchState, bool)> {
        graph.check_index(source)?;

        let n = graph.vertex_count();
        let mut state = SearchState::new(n);
        state.set_distance(source, 0);

        let mut passes = 0usize;
        let mut converged = false;

        // 松弛操作，执行n-1次
        for _ in 0..n.saturating_sub(1) {
            passes += 1;
            if !Self::relax_pass(graph, &mut state) {
                // 没有更新，提前终止
                converged = true;
                break;
            }
        }

        debug!(
            "Bellman-Ford from {} finished after {} passes (converged: {})",
            source, passes, converged
        );
        Ok((state, converged))
    }

    /// 对所有边执行一轮松弛，返回是否有距离被更新
    fn relax_pass(graph: &DenseGraph, state: &mut SearchState) -> bool {
        let mut updated = false;

        for u in 0..graph.vertex_count() {
            let dist_u = state.distance(u);
            if dist_u == INFINITY {
                continue;
            }

            for (v, weight) in graph.neighbors(u) {
                let new_dist = dist_u + u64::from(weight);
                if new_dist < state.distance(v) {
                    state.set_distance(v, new_dist);
                    updated = true;
                }
            }
        }

        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(n: usize, edges: &[(usize, usize, u32)]) -> DenseGraph {
        let mut graph = DenseGraph::with_capacity(n);
        for i in 0..n {
            graph.add_vertex(i.to_string()).expect("Vertex should fit in test");
        }
        for &(u, v, w) in edges {
            graph.add_edge(u, v, w).expect("Edge should be valid in test");
        }
        graph
    }

    #[test]
    fn test_shortest_distances() {
        let graph = build(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 10)]);
        let result =
            BellmanFord::shortest_distances(&graph, 0).expect("Bellman-Ford should succeed in test");

        assert_eq!(result.distances, vec![0, 1, 2, 3]);
        // Bellman-Ford 不设置 visited
        assert!(result.visited.iter().all(|&v| !v));
    }

    #[test]
    fn test_from_middle_vertex() {
        let graph = build(4, &[(0, 1, 3), (1, 2, 4), (2, 3, 5)]);
        let result =
            BellmanFord::shortest_distances(&graph, 2).expect("Bellman-Ford should succeed in test");
        assert_eq!(result.distances, vec![7, 4, 0, 5]);
    }

    #[test]
    fn test_unreachable() {
        let graph = build(3, &[(0, 1, 2)]);
        let result =
            BellmanFord::shortest_distances(&graph, 0).expect("Bellman-Ford should succeed in test");
        assert_eq!(result.distances[2], INFINITY);
    }

    #[test]
    fn test_checked_never_reports_cycle_on_positive_weights() {
        let graph = build(3, &[(0, 1, 2), (1, 2, 2), (0, 2, 9)]);
        let result = BellmanFord::shortest_distances_checked(&graph, 0)
            .expect("Positive weights cannot form a negative cycle");
        assert_eq!(result.distances, vec![0, 2, 4]);
    }

    #[test]
    fn test_empty_edges() {
        let graph = build(2, &[]);
        let result =
            BellmanFord::shortest_distances(&graph, 1).expect("Bellman-Ford should succeed in test");
        assert_eq!(result.distances, vec![INFINITY, 0]);
    }
}
