//! 最小优先队列模块
//!
//! Dijkstra 和 A* 共用。按 (score, vertex) 升序出队，
//! 允许重复和过期条目，由调用方在出队时惰性跳过。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::state::Distance;

/// 优先队列条目：代价 + 顶点索引（用于打破平局）
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScoredVertex {
    pub score: Distance,
    pub vertex: usize,
}

impl Ord for ScoredVertex {
    fn cmp(&self, other: &Self) -> Ordering {
        // 反转比较，使 BinaryHeap 成为最小堆
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for ScoredVertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 最小堆封装
#[derive(Debug, Default)]
pub struct MinQueue {
    heap: BinaryHeap<ScoredVertex>,
}

impl MinQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, score: Distance, vertex: usize) {
        self.heap.push(ScoredVertex { score, vertex });
    }

    pub fn pop(&mut self) -> Option<ScoredVertex> {
        self.heap.pop()
    }
}
