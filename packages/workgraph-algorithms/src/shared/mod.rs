//! Shared models and utilities

pub mod adjacency;
pub mod models;
pub mod progress;

pub use adjacency::{forward_adjacency, reverse_adjacency, undirected_adjacency};
pub use models::{
    ActiveEdge, FlowEdge, FlowNode, GraphEdge, GraphNode, GroupValueNode, TimedNode, ValueNode,
    VolumeEdge, WeightedEdge,
};
pub use progress::ProgressTracker;

/// Node identifier type alias
pub type NodeId = String;

/// Division that yields 0.0 on a zero denominator
///
/// Used as the "undefined ratio" sentinel throughout aggregation and
/// analysis outputs; replacing it with an error would break the output
/// contract.
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
