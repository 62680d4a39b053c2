/*
 * Type-Level Aggregation
 *
 * Collapses the graph to its type signature: how many nodes carry each
 * type, and how traffic moves between types.
 *
 * - Only types that occur as an endpoint of at least one edge are emitted;
 *   a type whose nodes never touch an edge is absent from the output. A
 *   self-loop counts as a valid endpoint occurrence.
 * - transition_probability(A→B) = count(A→B) / total out-transitions from
 *   type A, with the safe-divide contract on an empty denominator.
 * - Transitions are ordered lexicographically by from-type then to-type;
 *   node aggregates by type.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::safe_divide;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNodeAggregate {
    #[serde(rename = "type")]
    pub node_type: String,
    pub node_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeTransition {
    pub from_type: String,
    pub to_type: String,
    pub transition_count: u64,
    pub transition_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAggregationResult {
    pub aggregate_nodes: Vec<TypeNodeAggregate>,
    pub aggregate_edges: Vec<TypeTransition>,
}

/// Aggregate the graph per node type and per type-to-type transition
pub fn aggregation_by_type(nodes: &[GraphNode], edges: &[GraphEdge]) -> TypeAggregationResult {
    // First occurrence of a duplicated id is canonical
    let mut types_by_id: FxHashMap<&str, &str> = FxHashMap::default();
    let mut count_by_type: FxHashMap<&str, u64> = FxHashMap::default();
    for node in nodes {
        if types_by_id
            .insert(node.id.as_str(), node.node_type.as_str())
            .is_none()
        {
            *count_by_type.entry(node.node_type.as_str()).or_insert(0) += 1;
        }
    }

    let mut endpoint_types: FxHashSet<&str> = FxHashSet::default();
    let mut transitions: FxHashMap<(&str, &str), u64> = FxHashMap::default();
    let mut out_by_type: FxHashMap<&str, u64> = FxHashMap::default();

    for edge in edges {
        let from_type = types_by_id.get(edge.from.as_str()).copied();
        let to_type = types_by_id.get(edge.to.as_str()).copied();

        if let Some(t) = from_type {
            endpoint_types.insert(t);
        }
        if let Some(t) = to_type {
            endpoint_types.insert(t);
        }

        if let (Some(from_type), Some(to_type)) = (from_type, to_type) {
            *transitions.entry((from_type, to_type)).or_insert(0) += 1;
            *out_by_type.entry(from_type).or_insert(0) += 1;
        }
    }

    let mut aggregate_nodes: Vec<TypeNodeAggregate> = endpoint_types
        .iter()
        .map(|&node_type| TypeNodeAggregate {
            node_type: node_type.to_string(),
            node_count: count_by_type.get(node_type).copied().unwrap_or(0),
        })
        .collect();
    aggregate_nodes.sort_by(|a, b| a.node_type.cmp(&b.node_type));

    let mut aggregate_edges: Vec<TypeTransition> = transitions
        .iter()
        .map(|(&(from_type, to_type), &count)| TypeTransition {
            from_type: from_type.to_string(),
            to_type: to_type.to_string(),
            transition_count: count,
            transition_probability: safe_divide(
                count as f64,
                out_by_type.get(from_type).copied().unwrap_or(0) as f64,
            ),
        })
        .collect();
    aggregate_edges.sort_by(|a, b| {
        a.from_type
            .cmp(&b.from_type)
            .then_with(|| a.to_type.cmp(&b.to_type))
    });

    TypeAggregationResult {
        aggregate_nodes,
        aggregate_edges,
    }
}
