/*
 * All Simple Paths
 *
 * Enumerates every simple path from source to target with an iterative DFS
 * over explicit frames. The current path doubles as the DFS spine; a node
 * already on it is never re-entered, which is what keeps the paths simple
 * and the walk finite on cyclic graphs.
 *
 * Neighbors are scanned in edge-insertion order, so paths surface in
 * first-edge-first order. Reaching the target records the path and
 * backtracks; a simple path cannot continue through its endpoint.
 *
 * Worst case is exponential in the path count; bounding the input is the
 * caller's responsibility.
 */

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::shared::adjacency::forward_adjacency;
use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllPathsResult {
    pub paths: Vec<Vec<String>>,
    pub path_count: u64,
}

struct Frame {
    id: String,
    next: usize,
}

/// Enumerate every simple path from `source` to `target`
pub fn all_simple_paths(
    _nodes: &[GraphNode],
    edges: &[GraphEdge],
    source: &str,
    target: &str,
) -> AllPathsResult {
    let forward = forward_adjacency(edges);
    let mut progress = ProgressTracker::new("graph_all_paths");

    let mut paths: Vec<Vec<String>> = Vec::new();

    if source == target {
        // The trivial path; a cycle back to the source would revisit it
        paths.push(vec![source.to_string()]);
        return AllPathsResult {
            path_count: paths.len() as u64,
            paths,
        };
    }

    let mut frames: Vec<Frame> = vec![Frame {
        id: source.to_string(),
        next: 0,
    }];
    let mut path: Vec<String> = vec![source.to_string()];
    let mut on_path: FxHashSet<String> = FxHashSet::default();
    on_path.insert(source.to_string());

    while !frames.is_empty() {
        progress.tick();
        let top = frames.len() - 1;
        let current = frames[top].id.clone();
        let neighbors = forward.get(&current);
        let degree = neighbors.map_or(0, |n| n.len());

        if frames[top].next < degree {
            let neighbor = neighbors
                .map(|n| n[frames[top].next].clone())
                .unwrap_or_default();
            frames[top].next += 1;

            if on_path.contains(&neighbor) {
                continue;
            }
            if neighbor == target {
                let mut complete = path.clone();
                complete.push(neighbor);
                paths.push(complete);
                continue;
            }

            on_path.insert(neighbor.clone());
            path.push(neighbor.clone());
            frames.push(Frame {
                id: neighbor,
                next: 0,
            });
        } else {
            frames.pop();
            path.pop();
            on_path.remove(&current);
        }
    }

    AllPathsResult {
        path_count: paths.len() as u64,
        paths,
    }
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
    fn test_diamond_has_two_paths() {
        let nodes = vec![node("A"), node("B"), node("C"), node("D")];
        let edges = vec![
            edge("A", "B"),
            edge("A", "C"),
            edge("B", "D"),
            edge("C", "D"),
        ];

        let result = all_simple_paths(&nodes, &edges, "A", "D");
        assert_eq!(result.path_count, 2);
        assert_eq!(
            result.paths,
            vec![
                vec!["A", "B", "D"],
                vec!["A", "C", "D"],
            ]
        );
    }

    #[test]
    fn test_cycle_does_not_loop_forever() {
        let nodes = vec![node("A"), node("B"), node("C")];
        let edges = vec![edge("A", "B"), edge("B", "A"), edge("B", "C")];

        let result = all_simple_paths(&nodes, &edges, "A", "C");
        assert_eq!(result.paths, vec![vec!["A", "B", "C"]]);
    }

    #[test]
    fn test_unreachable_target_yields_no_paths() {
        let nodes = vec![node("A"), node("B"), node("C")];
        let edges = vec![edge("A", "B")];

        let result = all_simple_paths(&nodes, &edges, "A", "C");
        assert_eq!(result.path_count, 0);
        assert!(result.paths.is_empty());
    }

    #[test]
    fn test_source_equals_target_trivial_path() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "B"), edge("B", "A")];

        let result = all_simple_paths(&nodes, &edges, "A", "A");
        assert_eq!(result.paths, vec![vec!["A"]]);
    }

    #[test]
    fn test_longer_detour_also_enumerated() {
        let nodes = vec![node("A"), node("B"), node("C"), node("D")];
        let edges = vec![
            edge("A", "D"),
            edge("A", "B"),
            edge("B", "C"),
            edge("C", "D"),
        ];

        let result = all_simple_paths(&nodes, &edges, "A", "D");
        assert_eq!(
            result.paths,
            vec![
                vec!["A", "D"],
                vec!["A", "B", "C", "D"],
            ]
        );
    }

    #[test]
    fn test_parallel_edges_yield_duplicate_paths() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "B"), edge("A", "B")];

        let result = all_simple_paths(&nodes, &edges, "A", "B");
        assert_eq!(result.path_count, 2);
    }
}
