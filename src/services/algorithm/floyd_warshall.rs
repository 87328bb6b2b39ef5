//! Floyd-Warshall算法模块
//!
//! 全源最短路径，适用于稠密图，时间复杂度O(V^3)。
//! 结果矩阵独立于顶点状态，不可达使用 `u64::MAX / 2` 作为内部哨兵，
//! 保证两个哨兵相加不会溢出。

use log::debug;
use serde::Serialize;

use super::state::{Distance, INFINITY};
use crate::graph::{DenseGraph, NO_EDGE};

/// 矩阵内部的不可达哨兵
const UNREACHABLE: Distance = Distance::MAX / 2;

/// Floyd-Warshall算法结构体
pub struct FloydWarshall;

/// 全源距离矩阵
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix {
    size: usize,
    dist: Vec<Distance>,
}

impl DistanceMatrix {
    /// 矩阵维度（顶点数）
    pub fn size(&self) -> usize {
        self.size
    }

    /// 获取从u到v的最短距离，不可达或越界返回 None
    pub fn distance(&self, u: usize, v: usize) -> Option<Distance> {
        if u >= self.size || v >= self.size {
            return None;
        }
        match self.dist[u * self.size + v] {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// 第 `u` 行，不可达记为 `INFINITY`，可直接与单源结果比较
    pub fn row(&self, u: usize) -> Vec<Distance> {
        (0..self.size)
            .map(|v| self.distance(u, v).unwrap_or(INFINITY))
            .collect()
    }

    /// 节点的偏心距（到最远可达节点的距离）
    pub fn eccentricity(&self, u: usize) -> Option<Distance> {
        (0..self.size)
            .filter(|&v| v != u)
            .filter_map(|v| self.distance(u, v))
            .max()
    }

    /// 图的直径（可达顶点对之间最长的最短路径）
    pub fn diameter(&self) -> Option<Distance> {
        (0..self.size).filter_map(|u| self.eccentricity(u)).max()
    }
}

impl FloydWarshall {
    /// 执行Floyd-Warshall算法
    pub fn all_pairs(graph: &DenseGraph) -> DistanceMatrix {
        let n = graph.vertex_count();
        let mut dist = vec![UNREACHABLE; n * n];

        // 初始化距离矩阵
        for i in 0..n {
            for j in 0..n {
                let weight = graph.weight_unchecked(i, j);
                if i == j {
                    dist[i * n + j] = 0;
                } else if weight != NO_EDGE {
                    dist[i * n + j] = Distance::from(weight);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if d_ik == UNREACHABLE {
                    continue;
                }
                for j in 0..n {
                    let candidate = d_ik + dist[k * n + j];
                    if candidate < dist[i * n + j] {
                        dist[i * n + j] = candidate;
                    }
                }
            }
        }

        debug!("Floyd-Warshall computed {}x{} distance matrix", n, n);
        DistanceMatrix { size: n, dist }
    }
}
