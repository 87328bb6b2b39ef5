use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::graph::{Heuristic, Weight, DEFAULT_CAPACITY, MAX_CAPACITY};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub benchmark: BenchmarkConfig,
    pub log: LogConfig,
}

/// 随机图生成参数
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    pub capacity: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub min_weight: Weight,
    pub max_weight: Weight,
    /// 启发值取 [0, max_heuristic)
    pub max_heuristic: Heuristic,
    pub seed: Option<u64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            vertex_count: 500,
            edge_count: 20_000,
            min_weight: 1,
            max_weight: 20,
            max_heuristic: 100,
            seed: None,
        }
    }
}

impl GraphConfig {
    /// 无向简单图最多可容纳的边数
    pub fn max_edges(&self) -> usize {
        self.vertex_count * self.vertex_count.saturating_sub(1) / 2
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.capacity > MAX_CAPACITY {
            return Err(format!(
                "容量 {} 超过上限 {}",
                self.capacity, MAX_CAPACITY
            ));
        }
        if self.vertex_count > self.capacity {
            return Err(format!(
                "顶点数 {} 超过容量 {}",
                self.vertex_count, self.capacity
            ));
        }
        if self.edge_count > self.max_edges() {
            return Err(format!(
                "边数 {} 超过 {} 个顶点的上限 {}",
                self.edge_count,
                self.vertex_count,
                self.max_edges()
            ));
        }
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(format!(
                "无效的边权范围: [{}, {}]",
                self.min_weight, self.max_weight
            ));
        }
        Ok(())
    }
}

/// 基准运行参数
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub source: usize,
    /// A* 目标，缺省为最后一个顶点
    pub goal: Option<usize>,
    /// 在 rayon 线程池上并行运行各算法
    pub parallel: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub to_file: bool,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_file: false,
            dir: "logs".to_string(),
            file: "graphbench".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.graph.validate()?;

        let n = self.graph.vertex_count;
        if n > 0 && self.benchmark.source >= n {
            return Err(format!("起点 {} 超出顶点范围 {}", self.benchmark.source, n).into());
        }
        if let Some(goal) = self.benchmark.goal {
            if goal >= n {
                return Err(format!("目标 {} 超出顶点范围 {}", goal, n).into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.graph.vertex_count, 500);
        assert_eq!(config.graph.edge_count, 20_000);
        assert_eq!(config.graph.capacity, 1000);
        assert_eq!(config.log.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_save() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.graph.seed = Some(7);
        config.benchmark.parallel = true;
        config
            .save(temp_file.path())
            .expect("Failed to save config to temporary file");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config.graph, loaded_config.graph);
        assert_eq!(config.benchmark, loaded_config.benchmark);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"[graph]\nvertex_count = 10\nedge_count = 12\n")
            .expect("Failed to write TOML content to temporary file");

        let config = Config::load(temp_file.path()).expect("Failed to load partial config");
        assert_eq!(config.graph.vertex_count, 10);
        assert_eq!(config.graph.max_weight, 20);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_validate_rejects_too_many_edges() {
        let mut config = Config::default();
        config.graph.vertex_count = 4;
        config.graph.edge_count = 7;
        assert!(config.validate().is_err());

        config.graph.edge_count = 6;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_capacity() {
        let mut config = Config::default();
        config.graph.capacity = MAX_CAPACITY + 1;
        assert!(config.validate().is_err());

        config.graph.capacity = MAX_CAPACITY;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_weight() {
        let mut config = Config::default();
        config.graph.min_weight = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_goal_out_of_range() {
        let mut config = Config::default();
        config.benchmark.goal = Some(500);
        assert!(config.validate().is_err());
    }
}
