//! 统一错误处理 for GraphBench
//!
//! 图存储边界上的前置条件检查失败，以及基准驱动的参数错误，
//! 统一使用 `GraphError` 表示。算法本身在结构合法的图上不会失败。

use thiserror::Error;

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;

/// 图存储与算法错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("顶点容量已满: {capacity}")]
    CapacityExceeded { capacity: usize },

    #[error("无效的顶点索引: {index} (顶点数 {vertex_count})")]
    InvalidVertexIndex { index: usize, vertex_count: usize },

    #[error("无效的边: {0}")]
    InvalidEdge(String),

    #[error("检测到负权环")]
    NegativeCycle,

    #[error("无效参数: {0}")]
    InvalidArgument(String),
}
