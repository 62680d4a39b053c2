/*
 * Ancestor / Descendant Closure
 *
 * For every node in the input list, computes the transitive closure in both
 * directions: ancestors by DFS over the reverse adjacency, descendants by
 * DFS over the forward adjacency. `reachable_nodes` is the concatenation
 * ancestors ++ descendants with order preserved (not a set union: a node
 * that is both, via a cycle, appears twice).
 *
 * Like the plain walks, membership is not validated: ids reached only
 * through edges are included in the closure.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::shared::adjacency::{forward_adjacency, reverse_adjacency};
use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

/// Transitive closure of one node in both directions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeClosure {
    pub id: String,
    pub ancestors: Vec<String>,
    pub descendants: Vec<String>,
    pub reachable_nodes: Vec<String>,
}

/// Compute ancestors and descendants for every node in the input list
pub fn ancestor_descendant(nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<NodeClosure> {
    let forward = forward_adjacency(edges);
    let reverse = reverse_adjacency(edges);
    let mut progress = ProgressTracker::new("graph_ancestor_descendant");

    nodes
        .iter()
        .map(|node| {
            let ancestors = collect_reachable(&reverse, &node.id, &mut progress);
            let descendants = collect_reachable(&forward, &node.id, &mut progress);

            let mut reachable_nodes =
                Vec::with_capacity(ancestors.len() + descendants.len());
            reachable_nodes.extend(ancestors.iter().cloned());
            reachable_nodes.extend(descendants.iter().cloned());

            NodeClosure {
                id: node.id.clone(),
                ancestors,
                descendants,
                reachable_nodes,
            }
        })
        .collect()
}

/// DFS from `start` over the given adjacency, excluding `start` itself
/// unless a cycle leads back to it
fn collect_reachable(
    adjacency: &FxHashMap<String, Vec<String>>,
    start: &str,
    progress: &mut ProgressTracker,
) -> Vec<String> {
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut reached: Vec<String> = Vec::new();
    let mut stack: Vec<String> = Vec::new();

    if let Some(neighbors) = adjacency.get(start) {
        for neighbor in neighbors {
            stack.push(neighbor.clone());
        }
    }

    while let Some(current) = stack.pop() {
        progress.tick();
        if !visited.insert(current.clone()) {
            continue;
        }
        reached.push(current.clone());

        if let Some(neighbors) = adjacency.get(&current) {
            for neighbor in neighbors {
                if !visited.contains(neighbor) {
                    stack.push(neighbor.clone());
                }
            }
        }
    }

    reached
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(id: &str) -> GraphNode {
        GraphNode::new(id, "step")
    }

    fn edge(from: &str, to: &str) -> GraphEdge {
        GraphEdge::new(from, to, "link")
    }

    #[test]
    fn test_chain_closure() {
        let nodes = vec![node("A"), node("B"), node("C")];
        let edges = vec![edge("A", "B"), edge("B", "C")];

        let closures = ancestor_descendant(&nodes, &edges);

        assert_eq!(closures[0].ancestors, Vec::<String>::new());
        assert_eq!(closures[0].descendants, vec!["B", "C"]);
        assert_eq!(closures[0].reachable_nodes, vec!["B", "C"]);

        assert_eq!(closures[1].ancestors, vec!["A"]);
        assert_eq!(closures[1].descendants, vec!["C"]);
        assert_eq!(closures[1].reachable_nodes, vec!["A", "C"]);

        assert_eq!(closures[2].ancestors, vec!["B", "A"]);
        assert_eq!(closures[2].descendants, Vec::<String>::new());
        assert_eq!(closures[2].reachable_nodes, vec!["B", "A"]);
    }

    #[test]
    fn test_cycle_node_reaches_itself() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "B"), edge("B", "A")];

        let closures = ancestor_descendant(&nodes, &edges);

        // Through the cycle, A is its own ancestor and descendant
        assert_eq!(closures[0].ancestors, vec!["B", "A"]);
        assert_eq!(closures[0].descendants, vec!["B", "A"]);
        assert_eq!(closures[0].reachable_nodes, vec!["B", "A", "B", "A"]);
    }

    #[test]
    fn test_isolated_node_has_empty_closure() {
        let nodes = vec![node("A"), node("B"), node("Z")];
        let edges = vec![edge("A", "B")];

        let closures = ancestor_descendant(&nodes, &edges);
        assert_eq!(closures[2].ancestors, Vec::<String>::new());
        assert_eq!(closures[2].descendants, Vec::<String>::new());
        assert_eq!(closures[2].reachable_nodes, Vec::<String>::new());
    }

    #[test]
    fn test_branching_descendants_follow_dfs_discovery_order() {
        let nodes = vec![node("A"), node("B"), node("C"), node("D")];
        let edges = vec![edge("A", "B"), edge("A", "C"), edge("B", "D")];

        let closures = ancestor_descendant(&nodes, &edges);
        // LIFO: the last edge out of A is explored first
        assert_eq!(closures[0].descendants, vec!["C", "B", "D"]);
    }
}
