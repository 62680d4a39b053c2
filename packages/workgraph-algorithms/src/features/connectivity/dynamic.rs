/*
 * Dynamic Reachability
 *
 * Reachability over the subgraph of active edges only: inactive edges are
 * filtered out, then the ancestor/descendant closure runs on what remains.
 */

use crate::features::traversal::{ancestor_descendant, NodeClosure};
use crate::shared::models::{ActiveEdge, GraphEdge, GraphNode};

/// Per-node ancestors and descendants over active edges only
pub fn dynamic_reachability(nodes: &[GraphNode], edges: &[ActiveEdge]) -> Vec<NodeClosure> {
    let active_edges: Vec<GraphEdge> = edges
        .iter()
        .filter(|e| e.active)
        .map(|e| GraphEdge::new(e.from.clone(), e.to.clone(), e.edge_type.clone()))
        .collect();

    ancestor_descendant(nodes, &active_edges)
}
