/*
 * Type Statistics
 *
 * Inventory of the graph's type vocabulary: sorted node and edge type
 * lists, types that only ever send or only ever receive, the type-level
 * aggregation, and a per-edge-type breakdown of every type transition.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::features::aggregation::{aggregation_by_type, TypeAggregationResult};
use crate::shared::models::{GraphEdge, GraphNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTransitionBreakdown {
    pub from_type: String,
    pub to_type: String,
    pub edge_type: String,
    pub transition_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeStatisticsResult {
    pub node_type_count: u64,
    pub edge_type_count: u64,
    pub node_types: Vec<String>,
    pub edge_types: Vec<String>,

    /// Types that only ever appear on the sending end of an edge
    pub source_only_types: Vec<String>,

    /// Types that only ever appear on the receiving end of an edge
    pub target_only_types: Vec<String>,

    pub type_aggregation: TypeAggregationResult,
    pub edge_type_breakdown: Vec<TypeTransitionBreakdown>,
}

/// Collect the type inventory and transition breakdown of the graph
pub fn type_statistics(nodes: &[GraphNode], edges: &[GraphEdge]) -> TypeStatisticsResult {
    // First occurrence of a duplicated id is canonical
    let mut types_by_id: FxHashMap<&str, &str> = FxHashMap::default();
    for node in nodes {
        types_by_id
            .entry(node.id.as_str())
            .or_insert(node.node_type.as_str());
    }

    let mut node_types: Vec<String> = types_by_id
        .values()
        .copied()
        .collect::<FxHashSet<_>>()
        .into_iter()
        .map(|t| t.to_string())
        .collect();
    node_types.sort();

    let mut edge_types: Vec<String> = edges
        .iter()
        .map(|e| e.edge_type.as_str())
        .collect::<FxHashSet<_>>()
        .into_iter()
        .map(|t| t.to_string())
        .collect();
    edge_types.sort();

    let mut sending_types: FxHashSet<&str> = FxHashSet::default();
    let mut receiving_types: FxHashSet<&str> = FxHashSet::default();
    let mut breakdown: FxHashMap<(&str, &str, &str), u64> = FxHashMap::default();
    for edge in edges {
        let from_type = types_by_id.get(edge.from.as_str()).copied();
        let to_type = types_by_id.get(edge.to.as_str()).copied();

        if let Some(t) = from_type {
            sending_types.insert(t);
        }
        if let Some(t) = to_type {
            receiving_types.insert(t);
        }
        if let (Some(from_type), Some(to_type)) = (from_type, to_type) {
            *breakdown
                .entry((from_type, to_type, edge.edge_type.as_str()))
                .or_insert(0) += 1;
        }
    }

    let mut source_only_types: Vec<String> = sending_types
        .difference(&receiving_types)
        .map(|t| t.to_string())
        .collect();
    source_only_types.sort();

    let mut target_only_types: Vec<String> = receiving_types
        .difference(&sending_types)
        .map(|t| t.to_string())
        .collect();
    target_only_types.sort();

    let mut edge_type_breakdown: Vec<TypeTransitionBreakdown> = breakdown
        .iter()
        .map(
            |(&(from_type, to_type, edge_type), &count)| TypeTransitionBreakdown {
                from_type: from_type.to_string(),
                to_type: to_type.to_string(),
                edge_type: edge_type.to_string(),
                transition_count: count,
            },
        )
        .collect();
    edge_type_breakdown.sort_by(|a, b| {
        a.from_type
            .cmp(&b.from_type)
            .then_with(|| a.to_type.cmp(&b.to_type))
            .then_with(|| a.edge_type.cmp(&b.edge_type))
    });

    TypeStatisticsResult {
        node_type_count: node_types.len() as u64,
        edge_type_count: edge_types.len() as u64,
        node_types,
        edge_types,
        source_only_types,
        target_only_types,
        type_aggregation: aggregation_by_type(nodes, edges),
        edge_type_breakdown,
    }
}
