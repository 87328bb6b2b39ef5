//! 服务层模块
//!
//! 图算法实现，以及生成随机图、计时运行算法的基准驱动

pub mod algorithm;
pub mod benchmark;
pub mod generator;

// 重新导出常用服务
pub use algorithm::*;
pub use benchmark::{Algorithm, Benchmark, BenchmarkReport, Outcome, Timing};
pub use generator::GraphGenerator;
