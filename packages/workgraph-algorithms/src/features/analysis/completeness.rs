/*
 * Workflow Completeness
 *
 * A workflow pattern names a set of start types and a set of end types.
 * For each pattern, every node whose type is a start type is checked for
 * forward reachability to at least one node whose type is an end type; a
 * start node that is itself end-typed is trivially complete.
 *
 * Reported per pattern: how many start nodes can complete the workflow
 * and how many cannot.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::shared::adjacency::forward_adjacency;
use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowPattern {
    pub start_types: Vec<String>,
    pub end_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCompleteness {
    pub start_types: Vec<String>,
    pub end_types: Vec<String>,
    pub complete_count: u64,
    pub incomplete_count: u64,
}

/// Count complete and incomplete start nodes per workflow pattern
pub fn workflow_completeness(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    workflow_patterns: &[WorkflowPattern],
) -> Vec<PatternCompleteness> {
    let forward = forward_adjacency(edges);
    let mut progress = ProgressTracker::new("graph_workflow_completeness");

    // First occurrence of a duplicated id is canonical
    let mut types_by_id: FxHashMap<&str, &str> = FxHashMap::default();
    let mut id_order: Vec<&str> = Vec::new();
    for node in nodes {
        if !types_by_id.contains_key(node.id.as_str()) {
            types_by_id.insert(node.id.as_str(), node.node_type.as_str());
            id_order.push(node.id.as_str());
        }
    }

    workflow_patterns
        .iter()
        .map(|pattern| {
            let start_types: FxHashSet<&str> =
                pattern.start_types.iter().map(|t| t.as_str()).collect();
            let end_types: FxHashSet<&str> =
                pattern.end_types.iter().map(|t| t.as_str()).collect();

            let mut complete_count: u64 = 0;
            let mut incomplete_count: u64 = 0;

            for &id in &id_order {
                if !start_types.contains(types_by_id[id]) {
                    continue;
                }
                if reaches_end_type(id, &forward, &types_by_id, &end_types, &mut progress) {
                    complete_count += 1;
                } else {
                    incomplete_count += 1;
                }
            }

            PatternCompleteness {
                start_types: pattern.start_types.clone(),
                end_types: pattern.end_types.clone(),
                complete_count,
                incomplete_count,
            }
        })
        .collect()
}

/// BFS over the forward closure, the start node included
fn reaches_end_type(
    start: &str,
    forward: &FxHashMap<String, Vec<String>>,
    types_by_id: &FxHashMap<&str, &str>,
    end_types: &FxHashSet<&str>,
    progress: &mut ProgressTracker,
) -> bool {
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut stack: Vec<String> = vec![start.to_string()];
    visited.insert(start.to_string());

    while let Some(current) = stack.pop() {
        progress.tick();
        if let Some(&node_type) = types_by_id.get(current.as_str()) {
            if end_types.contains(node_type) {
                return true;
            }
        }

        if let Some(neighbors) = forward.get(&current) {
            for neighbor in neighbors {
                if visited.insert(neighbor.clone()) {
                    stack.push(neighbor.clone());
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(id: &str, node_type: &str) -> GraphNode {
        GraphNode::new(id, node_type)
    }

    fn edge(from: &str, to: &str) -> GraphEdge {
        GraphEdge::new(from, to, "next")
    }

    fn pattern(start: &[&str], end: &[&str]) -> WorkflowPattern {
        WorkflowPattern {
            start_types: start.iter().map(|t| t.to_string()).collect(),
            end_types: end.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_complete_and_incomplete_starts() {
        let nodes = vec![
            node("o1", "order"),
            node("o2", "order"),
            node("ship", "shipment"),
        ];
        // o1 reaches a shipment, o2 goes nowhere
        let edges = vec![edge("o1", "ship")];

        let result = workflow_completeness(
            &nodes,
            &edges,
            &[pattern(&["order"], &["shipment"])],
        );

        assert_eq!(result[0].complete_count, 1);
        assert_eq!(result[0].incomplete_count, 1);
    }

    #[test]
    fn test_multi_hop_reachability_counts() {
        let nodes = vec![
            node("o", "order"),
            node("p", "pick"),
            node("s", "shipment"),
        ];
        let edges = vec![edge("o", "p"), edge("p", "s")];

        let result = workflow_completeness(
            &nodes,
            &edges,
            &[pattern(&["order"], &["shipment"])],
        );
        assert_eq!(result[0].complete_count, 1);
        assert_eq!(result[0].incomplete_count, 0);
    }

    #[test]
    fn test_start_that_is_also_end_typed_is_complete() {
        let nodes = vec![node("hybrid", "terminal")];
        let result = workflow_completeness(
            &nodes,
            &[],
            &[pattern(&["terminal"], &["terminal"])],
        );
        assert_eq!(result[0].complete_count, 1);
    }

    #[test]
    fn test_each_pattern_evaluated_independently() {
        let nodes = vec![
            node("o", "order"),
            node("s", "shipment"),
            node("r", "return"),
        ];
        let edges = vec![edge("o", "s")];

        let result = workflow_completeness(
            &nodes,
            &edges,
            &[
                pattern(&["order"], &["shipment"]),
                pattern(&["order"], &["return"]),
            ],
        );

        assert_eq!(result[0].complete_count, 1);
        assert_eq!(result[1].complete_count, 0);
        assert_eq!(result[1].incomplete_count, 1);
    }

    #[test]
    fn test_multiple_start_types_pool_their_nodes() {
        let nodes = vec![
            node("o", "order"),
            node("x", "express_order"),
            node("s", "shipment"),
        ];
        let edges = vec![edge("o", "s"), edge("x", "s")];

        let result = workflow_completeness(
            &nodes,
            &edges,
            &[pattern(&["order", "express_order"], &["shipment"])],
        );
        assert_eq!(result[0].complete_count, 2);
        assert_eq!(result[0].incomplete_count, 0);
    }

    #[test]
    fn test_no_matching_start_nodes() {
        let nodes = vec![node("s", "shipment")];
        let result = workflow_completeness(
            &nodes,
            &[],
            &[pattern(&["order"], &["shipment"])],
        );
        assert_eq!(result[0].complete_count, 0);
        assert_eq!(result[0].incomplete_count, 0);
    }
}
