//! 稠密图存储
//!
//! 固定容量的顶点数组，加上按顶点位置索引的方阵权重矩阵。
//! 矩阵始终对称；权重 `0` 表示"无边"，因此所有实际存在的边权都 >= 1。

pub mod vertex;

pub use vertex::{Heuristic, Vertex};

use crate::core::error::{GraphError, GraphResult};

/// 边权类型
pub type Weight = u32;

/// 矩阵中表示"无边"的值
pub const NO_EDGE: Weight = 0;

/// 默认顶点容量
pub const DEFAULT_CAPACITY: usize = 1000;

/// 容量上限，权重矩阵最多 8192 * 8192 个单元（256MB）
pub const MAX_CAPACITY: usize = 8192;

/// 稠密无向带权图
#[derive(Debug, Clone)]
pub struct DenseGraph {
    capacity: usize,
    vertices: Vec<Vertex>,
    /// capacity * capacity，行优先
    weights: Vec<Weight>,
    edge_count: usize,
}

impl Default for DenseGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DenseGraph {
    /// 使用默认容量（1000 个顶点）创建图
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// 创建最多容纳 `capacity` 个顶点的图
    ///
    /// 容量来自外部输入时使用 `try_with_capacity`。
    ///
    /// # Panics
    /// `capacity` 超过 `MAX_CAPACITY` 时 panic
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= MAX_CAPACITY,
            "容量 {} 超过上限 {}",
            capacity,
            MAX_CAPACITY
        );
        Self::allocate(capacity, capacity * capacity)
    }

    /// 创建最多容纳 `capacity` 个顶点的图，容量过大时返回 `InvalidArgument`
    pub fn try_with_capacity(capacity: usize) -> GraphResult<Self> {
        let cells = capacity
            .checked_mul(capacity)
            .filter(|_| capacity <= MAX_CAPACITY)
            .ok_or_else(|| {
                GraphError::InvalidArgument(format!(
                    "容量 {} 超过上限 {}",
                    capacity, MAX_CAPACITY
                ))
            })?;
        Ok(Self::allocate(capacity, cells))
    }

    fn allocate(capacity: usize, cells: usize) -> Self {
        Self {
            capacity,
            vertices: Vec::with_capacity(capacity),
            weights: vec![NO_EDGE; cells],
            edge_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 不同无向边的数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 在下一个空位追加顶点，返回其索引
    pub fn add_vertex(&mut self, label: impl Into<String>) -> GraphResult<usize> {
        if self.vertices.len() == self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.vertices.push(Vertex::new(label));
        Ok(self.vertices.len() - 1)
    }

    /// 设置无向边 `u - v` 的权重
    ///
    /// 同一对顶点之间已有的边会被覆盖。
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> GraphResult<()> {
        self.check_index(u)?;
        self.check_index(v)?;

        if u == v {
            return Err(GraphError::InvalidEdge(format!("自环: {} -> {}", u, v)));
        }
        if weight == NO_EDGE {
            return Err(GraphError::InvalidEdge(format!(
                "边权必须为正: {} -> {}",
                u, v
            )));
        }

        if self.weights[self.slot(u, v)] == NO_EDGE {
            self.edge_count += 1;
        }

        let (uv, vu) = (self.slot(u, v), self.slot(v, u));
        self.weights[uv] = weight;
        self.weights[vu] = weight;
        Ok(())
    }

    pub fn set_heuristic(&mut self, index: usize, value: Heuristic) -> GraphResult<()> {
        self.check_index(index)?;
        self.vertices[index].set_heuristic(value);
        Ok(())
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// 边 `u - v` 的权重，无边时返回 None
    pub fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        if u >= self.vertex_count() || v >= self.vertex_count() {
            return None;
        }
        match self.weight_unchecked(u, v) {
            NO_EDGE => None,
            w => Some(w),
        }
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }

    /// 扫描第 `u` 行，按索引升序返回邻居
    ///
    /// `u` 越界时不返回任何邻居。
    pub fn neighbors(&self, u: usize) -> Neighbors<'_> {
        let row: &[Weight] = if u < self.vertex_count() {
            let start = u * self.capacity;
            &self.weights[start..start + self.vertex_count()]
        } else {
            &[]
        };
        Neighbors { row, next: 0 }
    }

    /// 检查 `index` 是否指向已添加的顶点
    pub fn check_index(&self, index: usize) -> GraphResult<()> {
        if index < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertexIndex {
                index,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// 矩阵原始值，无边为 `NO_EDGE`；由调用方保证不越界
    #[inline]
    pub(crate) fn weight_unchecked(&self, u: usize, v: usize) -> Weight {
        self.weights[self.slot(u, v)]
    }

    #[inline]
    pub(crate) fn heuristic_unchecked(&self, index: usize) -> Heuristic {
        self.vertices[index].heuristic()
    }

    #[inline]
    fn slot(&self, u: usize, v: usize) -> usize {
        u * self.capacity + v
    }
}

/// 矩阵某一行的 `(邻居, 权重)` 迭代器
pub struct Neighbors<'a> {
    row: &'a [Weight],
    next: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = (usize, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.row.len() {
            let v = self.next;
            self.next += 1;
            if self.row[v] != NO_EDGE {
                return Some((v, self.row[v]));
            }
        }
        None
    }
}
