/*
 * Layered Topological Sort (Kahn's algorithm, wave-synchronous)
 *
 * Processes the graph in waves: every node currently at in-degree zero
 * forms one layer, decrements its neighbors, and the neighbors that reach
 * zero form the next layer.
 *
 * - `topo_order` is a global 0-based counter across waves.
 * - `layer` increments by one per wave; the initial zero-in-degree wave is
 *   layer 0.
 * - The initial wave lists nodes in node-list order.
 * - Nodes on a cycle never reach in-degree zero and are silently omitted;
 *   callers that need diagnostics run cycle detection instead.
 * - Edges whose endpoints are absent from the node list are ignored.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::shared::adjacency::forward_adjacency;
use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

/// One node in topological order with its wave assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopoNode {
    pub id: String,
    pub topo_order: u64,
    pub layer: u64,
}

/// Sort the graph topologically, assigning a global order and a layer
pub fn topological_sort(nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<TopoNode> {
    let mut progress = ProgressTracker::new("graph_topological_sort");

    // Canonical node ids in list order (first occurrence wins)
    let mut known: FxHashSet<&str> = FxHashSet::default();
    let mut node_order: Vec<&str> = Vec::new();
    for node in nodes {
        if known.insert(node.id.as_str()) {
            node_order.push(node.id.as_str());
        }
    }

    let mut in_degree: FxHashMap<String, u64> = node_order
        .iter()
        .map(|id| (id.to_string(), 0))
        .collect();
    for edge in edges {
        if known.contains(edge.from.as_str()) {
            if let Some(degree) = in_degree.get_mut(edge.to.as_str()) {
                *degree += 1;
            }
        }
    }

    let forward = forward_adjacency(edges);

    let mut wave: Vec<String> = node_order
        .iter()
        .filter(|id| in_degree[**id] == 0)
        .map(|id| id.to_string())
        .collect();

    let mut sorted: Vec<TopoNode> = Vec::new();
    let mut topo_order: u64 = 0;
    let mut layer: u64 = 0;

    while !wave.is_empty() {
        let mut next_wave: Vec<String> = Vec::new();

        for id in &wave {
            progress.tick();
            sorted.push(TopoNode {
                id: id.clone(),
                topo_order,
                layer,
            });
            topo_order += 1;

            if let Some(neighbors) = forward.get(id.as_str()) {
                for neighbor in neighbors {
                    if let Some(degree) = in_degree.get_mut(neighbor.as_str()) {
                        *degree -= 1;
                        if *degree == 0 {
                            next_wave.push(neighbor.clone());
                        }
                    }
                }
            }
        }

        wave = next_wave;
        layer += 1;
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(id: &str) -> GraphNode {
        GraphNode::new(id, "task")
    }

    fn edge(from: &str, to: &str) -> GraphEdge {
        GraphEdge::new(from, to, "depends")
    }

    fn entry(id: &str, topo_order: u64, layer: u64) -> TopoNode {
        TopoNode {
            id: id.to_string(),
            topo_order,
            layer,
        }
    }

    #[test]
    fn test_toposort_diamond_layers() {
        let nodes = vec![node("A"), node("B"), node("C"), node("D")];
        let edges = vec![
            edge("A", "B"),
            edge("A", "C"),
            edge("B", "D"),
            edge("C", "D"),
        ];

        let sorted = topological_sort(&nodes, &edges);
        assert_eq!(
            sorted,
            vec![
                entry("A", 0, 0),
                entry("B", 1, 1),
                entry("C", 2, 1),
                entry("D", 3, 2),
            ]
        );
    }

    #[test]
    fn test_toposort_cycle_nodes_omitted() {
        let nodes = vec![node("A"), node("B"), node("C"), node("D")];
        let edges = vec![
            edge("A", "B"),
            edge("B", "C"),
            edge("C", "B"), // B ↔ C cycle
            edge("C", "D"),
        ];

        let sorted = topological_sort(&nodes, &edges);
        let ids: Vec<&str> = sorted.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A"]);
    }

    #[test]
    fn test_toposort_independent_nodes_share_layer_zero() {
        let nodes = vec![node("X"), node("Y"), node("Z")];
        let edges = Vec::new();

        let sorted = topological_sort(&nodes, &edges);
        assert_eq!(
            sorted,
            vec![entry("X", 0, 0), entry("Y", 1, 0), entry("Z", 2, 0)]
        );
    }

    #[test]
    fn test_toposort_parallel_edges_decrement_per_edge() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "B"), edge("A", "B")];

        let sorted = topological_sort(&nodes, &edges);
        assert_eq!(sorted, vec![entry("A", 0, 0), entry("B", 1, 1)]);
    }

    #[test]
    fn test_toposort_ignores_dangling_edges() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "B"), edge("ghost", "B"), edge("A", "ghost")];

        let sorted = topological_sort(&nodes, &edges);
        let ids: Vec<&str> = sorted.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_toposort_duplicate_node_ids_first_canonical() {
        let nodes = vec![node("A"), node("A"), node("B")];
        let edges = vec![edge("A", "B")];

        let sorted = topological_sort(&nodes, &edges);
        assert_eq!(sorted, vec![entry("A", 0, 0), entry("B", 1, 1)]);
    }
}
