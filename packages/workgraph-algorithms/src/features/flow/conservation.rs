/*
 * Flow Conservation
 *
 * Verifies, per node, that what is held plus what arrives equals what is
 * sent plus what is lost in transmission:
 *
 *   value + total_inflow ≈ total_outflow + total_loss      (tolerance 1e-3)
 *
 * Per edge, actual_flow = weight * (1 - loss/100) and
 * loss_amount = weight * loss/100. Inflow sums actual_flow over incoming
 * edges; outflow and loss both sum over outgoing edges.
 *
 * Violating nodes are reported in node-list order.
 */

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::shared::models::{FlowEdge, FlowNode};

const TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConservationResult {
    pub is_conserved: bool,
    pub violations: Vec<String>,
}

/// Check every node's flow balance against the conservation equation
pub fn flow_conservation(nodes: &[FlowNode], edges: &[FlowEdge]) -> FlowConservationResult {
    let mut inflow: FxHashMap<&str, f64> = FxHashMap::default();
    let mut outflow: FxHashMap<&str, f64> = FxHashMap::default();
    let mut loss: FxHashMap<&str, f64> = FxHashMap::default();

    for edge in edges {
        *inflow.entry(edge.to.as_str()).or_insert(0.0) += edge.actual_flow();
        *outflow.entry(edge.from.as_str()).or_insert(0.0) += edge.actual_flow();
        *loss.entry(edge.from.as_str()).or_insert(0.0) += edge.loss_amount();
    }

    let mut violations: Vec<String> = Vec::new();
    for node in nodes {
        let id = node.id.as_str();
        let imbalance = node.value
            + inflow.get(id).copied().unwrap_or(0.0)
            - outflow.get(id).copied().unwrap_or(0.0)
            - loss.get(id).copied().unwrap_or(0.0);

        if imbalance.abs() > TOLERANCE {
            violations.push(node.id.clone());
        }
    }

    FlowConservationResult {
        is_conserved: violations.is_empty(),
        violations,
    }
}
