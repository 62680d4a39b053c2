//! Connectivity kernel
//!
//! Component decomposition (undirected and strongly connected), bridge and
//! articulation-point detection on the shared undirected DFS forest,
//! activity-filtered reachability and SCC-subgraph extraction.

mod articulation;
mod bridges;
mod components;
mod dynamic;
mod forest;
mod scc;
mod strong_subgraph;

pub use articulation::articulation_points;
pub use bridges::{bridge_analysis, bridge_detection, Bridge, BridgeAnalysisResult};
pub use components::{
    connected_components, ComponentAssignment, ComponentInfo, ConnectedComponentsResult,
};
pub use dynamic::dynamic_reachability;
pub use scc::strongly_connected_components;
pub use strong_subgraph::{strong_subgraph_extraction, StrongSubgraph};
