/*
 * Volume Flow Balance
 *
 * Per-node volume accounting over measured edges:
 *
 *   volume_in   = Σ volume of incoming edges
 *   volume_out  = Σ volume of outgoing edges
 *   actual_loss = volume_in - volume_out
 *
 * A source node (no incoming edges) therefore reports a negative
 * actual_loss equal to -volume_out; a sink reports its full volume_in.
 *
 * System totals:
 *   total_input_volume  = Σ volume_out of nodes with no incoming edge
 *   total_output_volume = Σ volume_in  of nodes with no outgoing edge
 *   total_system_loss   = total_input_volume - total_output_volume
 */

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::shared::models::{GraphNode, VolumeEdge};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeVolumeFlow {
    pub id: String,
    pub volume_in: f64,
    pub volume_out: f64,
    pub actual_loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeFlowResult {
    pub node_flows: Vec<NodeVolumeFlow>,
    pub total_input_volume: f64,
    pub total_output_volume: f64,
    pub total_system_loss: f64,
}

/// Balance measured volumes per node and for the system as a whole
pub fn volume_flow(nodes: &[GraphNode], edges: &[VolumeEdge]) -> VolumeFlowResult {
    let mut volume_in: FxHashMap<&str, f64> = FxHashMap::default();
    let mut volume_out: FxHashMap<&str, f64> = FxHashMap::default();

    for edge in edges {
        *volume_in.entry(edge.to.as_str()).or_insert(0.0) += edge.volume;
        *volume_out.entry(edge.from.as_str()).or_insert(0.0) += edge.volume;
    }

    let mut node_flows: Vec<NodeVolumeFlow> = Vec::with_capacity(nodes.len());
    let mut total_input_volume = 0.0;
    let mut total_output_volume = 0.0;

    for node in nodes {
        let id = node.id.as_str();
        let flow_in = volume_in.get(id).copied().unwrap_or(0.0);
        let flow_out = volume_out.get(id).copied().unwrap_or(0.0);

        if !volume_in.contains_key(id) {
            total_input_volume += flow_out;
        }
        if !volume_out.contains_key(id) {
            total_output_volume += flow_in;
        }

        node_flows.push(NodeVolumeFlow {
            id: node.id.clone(),
            volume_in: flow_in,
            volume_out: flow_out,
            actual_loss: flow_in - flow_out,
        });
    }

    VolumeFlowResult {
        node_flows,
        total_input_volume,
        total_output_volume,
        total_system_loss: total_input_volume - total_output_volume,
    }
}
