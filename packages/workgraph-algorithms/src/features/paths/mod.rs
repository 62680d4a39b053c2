//! Paths kernel
//!
//! Simple-path enumeration, weighted shortest paths, critical paths over
//! timed DAGs and connected-subgraph extraction by node-type filters.

mod critical_path;
mod dijkstra;
mod simple_paths;
mod subgraph;

pub use critical_path::{critical_path, CriticalPathResult};
pub use dijkstra::{shortest_path, ShortestPathResult};
pub use simple_paths::{all_simple_paths, AllPathsResult};
pub use subgraph::{subgraph_from_sources, subgraph_from_targets, TypedSubgraph};
