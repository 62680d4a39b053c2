/*
 * Cycle Detection (three-color DFS)
 *
 * Iterative DFS over an explicit frame stack with the classic coloring:
 * unvisited (white), on the current DFS path (gray), finished (black).
 * An edge into a gray node is a back edge and proves a cycle.
 *
 * - On a back edge (source → target), `cycle_nodes` receives the target
 *   followed by the source. A self-loop contributes the node twice.
 * - Without `find_all_cycles`, detection stops at the first back edge.
 *   With it, exploration continues and every back edge contributes a pair.
 * - Edges to ids absent from the node list are ignored.
 */

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleDetectionResult {
    pub has_cycle: bool,

    /// Back-edge endpoints, target before source, in detection order
    pub cycle_nodes: Vec<String>,
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Detect whether the graph contains a directed cycle
pub fn cycle_detection(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    find_all_cycles: bool,
) -> CycleDetectionResult {
    let mut progress = ProgressTracker::new("graph_cycle_detection");

    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut ids: Vec<&str> = Vec::new();
    for node in nodes {
        if !index.contains_key(node.id.as_str()) {
            index.insert(node.id.as_str(), ids.len());
            ids.push(node.id.as_str());
        }
    }

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
    for edge in edges {
        if let (Some(&from), Some(&to)) = (
            index.get(edge.from.as_str()),
            index.get(edge.to.as_str()),
        ) {
            adjacency[from].push(to);
        }
    }

    let mut color = vec![Color::White; ids.len()];
    let mut has_cycle = false;
    let mut cycle_nodes: Vec<String> = Vec::new();

    for root in 0..ids.len() {
        if color[root] != Color::White {
            continue;
        }

        // Frame: (node, index of the next neighbor to scan)
        let mut frames: Vec<(usize, usize)> = vec![(root, 0)];
        color[root] = Color::Gray;

        while !frames.is_empty() {
            progress.tick();
            let top = frames.len() - 1;
            let (v, next) = frames[top];
            if next < adjacency[v].len() {
                let w = adjacency[v][next];
                frames[top].1 += 1;

                match color[w] {
                    Color::Gray => {
                        has_cycle = true;
                        cycle_nodes.push(ids[w].to_string());
                        cycle_nodes.push(ids[v].to_string());
                        if !find_all_cycles {
                            return CycleDetectionResult {
                                has_cycle,
                                cycle_nodes,
                            };
                        }
                    }
                    Color::White => {
                        color[w] = Color::Gray;
                        frames.push((w, 0));
                    }
                    Color::Black => {}
                }
            } else {
                color[v] = Color::Black;
                frames.pop();
            }
        }
    }

    CycleDetectionResult {
        has_cycle,
        cycle_nodes,
    }
}
