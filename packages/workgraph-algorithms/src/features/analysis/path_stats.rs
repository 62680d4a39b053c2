/*
 * Path Statistics
 *
 * BFS from a chosen source, summarized:
 * - longest_path_length: deepest BFS level reached, in edges
 * - longest_path_depth:  the same chain measured in nodes
 * - total_reachable_nodes: every id the walk emitted, source included
 * - connectivity_span:   reachable share of the canonical node count
 * - branching_factor:    edge count over node count for the whole input
 * - node_type_sequence:  distinct types in first-emission order (ids
 *   without a node record contribute no type)
 *
 * Both ratios follow the safe-divide contract.
 */

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::shared::adjacency::forward_adjacency;
use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;
use crate::shared::safe_divide;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStatisticsResult {
    pub longest_path_length: u64,
    pub longest_path_depth: u64,
    pub total_reachable_nodes: u64,
    pub connectivity_span: f64,
    pub branching_factor: f64,
    pub node_type_sequence: Vec<String>,
}

/// Summarize reachability and shape from `source_node_id`
pub fn path_statistics(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    source_node_id: &str,
) -> PathStatisticsResult {
    let forward = forward_adjacency(edges);
    let mut progress = ProgressTracker::new("graph_path_statistics");

    let mut types_by_id: FxHashMap<&str, &str> = FxHashMap::default();
    for node in nodes {
        types_by_id
            .entry(node.id.as_str())
            .or_insert(node.node_type.as_str());
    }

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut queue: VecDeque<(String, u64)> = VecDeque::new();
    let mut max_depth: u64 = 0;
    let mut reached: u64 = 0;
    let mut seen_types: FxHashSet<&str> = FxHashSet::default();
    let mut node_type_sequence: Vec<String> = Vec::new();

    visited.insert(source_node_id.to_string());
    queue.push_back((source_node_id.to_string(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        progress.tick();
        reached += 1;
        max_depth = max_depth.max(depth);

        if let Some(&node_type) = types_by_id.get(current.as_str()) {
            if seen_types.insert(node_type) {
                node_type_sequence.push(node_type.to_string());
            }
        }

        if let Some(neighbors) = forward.get(&current) {
            for neighbor in neighbors {
                if visited.insert(neighbor.clone()) {
                    queue.push_back((neighbor.clone(), depth + 1));
                }
            }
        }
    }

    PathStatisticsResult {
        longest_path_length: max_depth,
        longest_path_depth: max_depth + 1,
        total_reachable_nodes: reached,
        connectivity_span: safe_divide(reached as f64, types_by_id.len() as f64),
        branching_factor: safe_divide(edges.len() as f64, nodes.len() as f64),
        node_type_sequence,
    }
}
