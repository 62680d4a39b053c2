//! Graph record models
//!
//! All identifiers are opaque strings. Inputs are constructed by the caller
//! and borrowed read-only by every algorithm; outputs are freshly built
//! records owned by the caller.

mod edge;
mod node;

pub use edge::{ActiveEdge, EdgeEndpoints, FlowEdge, GraphEdge, VolumeEdge, WeightedEdge};
pub use node::{FlowNode, GraphNode, GroupValueNode, TimedNode, ValueNode};
