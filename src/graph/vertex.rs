//! 顶点模型
//!
//! 图中保存的顶点只包含身份信息（标签）和 A* 使用的启发值。
//! 每次算法调用的可变状态（visited / distance）由算法自己的
//! `SearchState` 缓冲区持有，见 `services::algorithm::state`。

use serde::{Deserialize, Serialize};

/// 启发值类型，A* 使用
pub type Heuristic = u32;

/// 图顶点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    label: String,
    heuristic: Heuristic,
}

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            heuristic: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// 到目标的估计代价，默认为0
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub(crate) fn set_heuristic(&mut self, value: Heuristic) {
        self.heuristic = value;
    }
}
