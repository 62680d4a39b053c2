/*
 * Breadth-First Search
 *
 * Level-order walk from a source id over the forward adjacency.
 *
 * Contract:
 * - FIFO queue seeded with the source; the source is always emitted first,
 *   even when it has no outgoing edges and never appears in the adjacency.
 * - Neighbors are visited in edge-insertion order within a level.
 * - Visited guard on enqueue: each node is emitted at most once.
 * - Edges to ids absent from the node list are still followed; membership
 *   filtering belongs to the tracked variants.
 *
 * Time: O(|V_reachable| + |E_reachable|)
 */

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::shared::adjacency::forward_adjacency;
use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

/// Walk the graph breadth-first and return node ids in level order
pub fn bfs(_nodes: &[GraphNode], edges: &[GraphEdge], source_node_id: &str) -> Vec<String> {
    let forward = forward_adjacency(edges);
    let mut progress = ProgressTracker::new("graph_bfs");

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut queue: VecDeque<String> = VecDeque::new();
    let mut order: Vec<String> = Vec::new();

    visited.insert(source_node_id.to_string());
    queue.push_back(source_node_id.to_string());

    while let Some(current) = queue.pop_front() {
        progress.tick();
        order.push(current.clone());

        if let Some(neighbors) = forward.get(&current) {
            for neighbor in neighbors {
                if visited.insert(neighbor.clone()) {
                    queue.push_back(neighbor.clone());
                }
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> GraphNode {
        GraphNode::new(id, "step")
    }

    fn edge(from: &str, to: &str) -> GraphEdge {
        GraphEdge::new(from, to, "link")
    }

    #[test]
    fn test_bfs_tree_level_order() {
        let nodes = vec![node("A"), node("B"), node("C"), node("D"), node("E")];
        let edges = vec![
            edge("A", "B"),
            edge("A", "C"),
            edge("B", "D"),
            edge("B", "E"),
        ];

        let order = bfs(&nodes, &edges, "A");
        assert_eq!(order, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_bfs_source_without_edges_is_emitted() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "B")];

        let order = bfs(&nodes, &edges, "Z");
        assert_eq!(order, vec!["Z"]);
    }

    #[test]
    fn test_bfs_follows_dangling_edges() {
        // "X" is not in the node list but BFS does not validate membership
        let nodes = vec![node("A")];
        let edges = vec![edge("A", "X"), edge("X", "A")];

        let order = bfs(&nodes, &edges, "A");
        assert_eq!(order, vec!["A", "X"]);
    }

    #[test]
    fn test_bfs_parallel_edges_emit_once() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "B"), edge("A", "B"), edge("A", "B")];

        let order = bfs(&nodes, &edges, "A");
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_bfs_self_loop_visits_once() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "A"), edge("A", "B")];

        let order = bfs(&nodes, &edges, "A");
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_bfs_cycle_terminates() {
        let nodes = vec![node("A"), node("B"), node("C")];
        let edges = vec![edge("A", "B"), edge("B", "C"), edge("C", "A")];

        let order = bfs(&nodes, &edges, "A");
        assert_eq!(order, vec!["A", "B", "C"]);
    }
}
