//! GraphBench - benchmark harness for classical graph algorithms
//!
//! Builds a dense, weighted, undirected graph and runs traversal,
//! single-source and all-pairs shortest path algorithms against it.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;

pub use crate::core::{GraphError, GraphResult};
pub use crate::graph::{DenseGraph, Vertex};
