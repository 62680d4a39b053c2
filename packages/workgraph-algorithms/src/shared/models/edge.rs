//! Edge records
//!
//! Edges may reference ids that are absent from the node list (dangling
//! edges); each algorithm documents how it treats them. Parallel edges and
//! self-loops are permitted.

use serde::{Deserialize, Serialize};

/// Endpoint access shared by every edge variant
///
/// The adjacency builder and the traversal kernels are generic over this
/// seam so that weighted, flow, active and volume edges all feed the same
/// index construction.
pub trait EdgeEndpoints {
    fn source(&self) -> &str;
    fn target(&self) -> &str;
}

macro_rules! impl_edge_endpoints {
    ($($ty:ty),+) => {
        $(impl EdgeEndpoints for $ty {
            fn source(&self) -> &str {
                &self.from
            }

            fn target(&self) -> &str {
                &self.to
            }
        })+
    };
}

/// Base directed edge record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,

    #[serde(rename = "type")]
    pub edge_type: String,
}

impl GraphEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, edge_type: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type: edge_type.into(),
        }
    }
}

/// Edge with a traversal cost and an optional delay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub from: String,
    pub to: String,

    #[serde(rename = "type")]
    pub edge_type: String,

    pub weight: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
}

/// Edge carrying a flow magnitude and a transmission-loss percentage
///
/// `loss_percentage` is clamped by contract to [0, 100]; out-of-range values
/// produce undefined numeric outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub from: String,
    pub to: String,

    #[serde(rename = "type")]
    pub edge_type: String,

    /// Nominal flow magnitude sent along this edge
    pub weight: f64,

    pub loss_percentage: f64,
}

impl FlowEdge {
    /// Flow that actually arrives after transmission loss
    pub fn actual_flow(&self) -> f64 {
        self.weight * (1.0 - self.loss_percentage / 100.0)
    }

    /// Amount lost in transmission
    pub fn loss_amount(&self) -> f64 {
        self.weight * self.loss_percentage / 100.0
    }
}

/// Edge with an activity flag; inactive edges are invisible to dynamic
/// reachability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEdge {
    pub from: String,
    pub to: String,

    #[serde(rename = "type")]
    pub edge_type: String,

    pub active: bool,
}

/// Edge carrying a measured volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeEdge {
    pub from: String,
    pub to: String,

    #[serde(rename = "type")]
    pub edge_type: String,

    pub volume: f64,
}

impl_edge_endpoints!(GraphEdge, WeightedEdge, FlowEdge, ActiveEdge, VolumeEdge);
