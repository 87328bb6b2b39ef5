//! Dijkstra算法模块
//!
//! 非负权图上的单源最短路径。优先队列按 (距离, 顶点索引) 排序，
//! 同一顶点的过期条目在出队时跳过。

use log::debug;

use super::queue::MinQueue;
use super::state::{SearchState, ShortestPaths};
use crate::core::error::GraphResult;
use crate::graph::DenseGraph;

/// Dijkstra算法结构体
pub struct Dijkstra;

impl Dijkstra {
    /// 计算从起点到所有顶点的最短距离
    pub fn shortest_distances(graph: &DenseGraph, source: usize) -> GraphResult<ShortestPaths> {
        graph.check_index(source)?;

        let mut state = SearchState::new(graph.vertex_count());
        let mut to_visit = MinQueue::new();
        let mut settled = 0usize;

        state.set_distance(source, 0);
        to_visit.push(0, source);

        while let Some(entry) = to_visit.pop() {
            let u = entry.vertex;
            if state.is_visited(u) {
                continue;
            }

            state.mark_visited(u);
            settled += 1;

            let dist_u = state.distance(u);
            for (v, weight) in graph.neighbors(u) {
                if state.is_visited(v) {
                    continue;
                }

                let new_distance = dist_u + u64::from(weight);
                if new_distance < state.distance(v) {
                    state.set_distance(v, new_distance);
                    to_visit.push(new_distance, v);
                }
            }
        }

        debug!("Dijkstra from {} settled {} vertices", source, settled);
        Ok(ShortestPaths::from_state(source, state))
    }
}
