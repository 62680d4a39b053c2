/*
 * Depth-First Search
 *
 * Discovery-order walk using an explicit LIFO stack.
 *
 * Contract:
 * - Neighbors are pushed in forward iteration order; LIFO popping means the
 *   LAST edge out of a node is explored first. This ordering is observable
 *   in outputs and must not be "fixed" by reversing the push order.
 * - Visited guard on pop, not on push: a node may sit on the stack several
 *   times but is expanded exactly once.
 */

use rustc_hash::FxHashSet;

use crate::shared::adjacency::forward_adjacency;
use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

/// Walk the graph depth-first and return node ids in discovery order
pub fn dfs(_nodes: &[GraphNode], edges: &[GraphEdge], source_node_id: &str) -> Vec<String> {
    let forward = forward_adjacency(edges);
    let mut progress = ProgressTracker::new("graph_dfs");

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut stack: Vec<String> = vec![source_node_id.to_string()];
    let mut order: Vec<String> = Vec::new();

    while let Some(current) = stack.pop() {
        progress.tick();
        if !visited.insert(current.clone()) {
            continue;
        }
        order.push(current.clone());

        if let Some(neighbors) = forward.get(&current) {
            for neighbor in neighbors {
                if !visited.contains(neighbor) {
                    stack.push(neighbor.clone());
                }
            }
        }
    }

    order
}
