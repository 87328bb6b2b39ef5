use anyhow::{anyhow, Result};
use clap::Parser;
use log::warn;

use graphbench::config::Config;
use graphbench::services::{Benchmark, GraphGenerator};
use graphbench::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphBench Contributors")]
/// Build a random dense graph and time five graph algorithms on it
struct Cli {
    /// Path to a TOML config file
    #[clap(short, long)]
    config: Option<String>,

    /// Number of vertices
    #[clap(short = 'n', long)]
    vertices: Option<usize>,

    /// Number of undirected edges
    #[clap(short, long)]
    edges: Option<usize>,

    /// Seed for the random graph
    #[clap(short, long)]
    seed: Option<u64>,

    /// Run the algorithms concurrently
    #[clap(short, long)]
    parallel: bool,

    /// Print the report as JSON
    #[clap(long)]
    json: bool,

    /// Log level, e.g. "debug" or "graphbench=trace"
    #[clap(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<(Config, bool)> {
        let mut config = match &self.config {
            Some(path) => Config::load(path).map_err(|e| anyhow!("加载配置失败 {}: {}", path, e))?,
            None => Config::default(),
        };

        if let Some(vertices) = self.vertices {
            config.graph.vertex_count = vertices;
            if vertices > config.graph.capacity {
                config.graph.capacity = vertices;
            }
        }
        if let Some(edges) = self.edges {
            config.graph.edge_count = edges;
        }
        if self.seed.is_some() {
            config.graph.seed = self.seed;
        }
        if self.parallel {
            config.benchmark.parallel = true;
        }
        if let Some(level) = self.log_level {
            config.log.level = level;
        }

        Ok((config, self.json))
    }
}

fn main() -> Result<()> {
    let (config, json) = Cli::parse().into_config()?;
    logging::init(&config).map_err(|e| anyhow!("日志初始化失败: {}", e))?;

    // 日志就绪后再校验，拒绝的配置会留下一条 warn
    if let Err(e) = config.validate() {
        warn!("无效的配置: {}", e);
        logging::shutdown();
        return Err(anyhow!("无效的配置: {}", e));
    }

    let result = run(&config, json);
    logging::shutdown();
    result
}

fn run(config: &Config, json: bool) -> Result<()> {
    let mut generator = GraphGenerator::new(config.graph.clone())?;
    let graph = generator.generate()?;

    let report = Benchmark::new(&graph, &config.benchmark)?.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
