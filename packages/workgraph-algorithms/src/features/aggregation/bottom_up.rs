/*
 * Bottom-Up Rollup
 *
 * For every node: its own value plus the values of all distinct forward
 * descendants. `contributing_nodes` lists the node itself followed by its
 * descendants in DFS discovery order, the same order the values are
 * summed in, which keeps float results reproducible.
 *
 * The temporal variant is the same rollup with each node valued at its
 * window duration, end_time - start_time, in whole minutes.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::known_descendants;
use crate::shared::adjacency::forward_adjacency;
use crate::shared::models::{GraphEdge, TimedNode, ValueNode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedValue {
    pub id: String,
    pub aggregated_value: f64,

    /// Self first, then descendants in discovery order
    pub contributing_nodes: Vec<String>,
}

/// Roll node values up from the leaves
pub fn aggregate_bottom_up(nodes: &[ValueNode], edges: &[GraphEdge]) -> Vec<AggregatedValue> {
    let entries: Vec<(&str, f64)> = nodes.iter().map(|n| (n.id.as_str(), n.value)).collect();
    rollup(&entries, edges)
}

/// Roll node durations (whole minutes) up from the leaves
pub fn aggregate_temporal(nodes: &[TimedNode], edges: &[GraphEdge]) -> Vec<AggregatedValue> {
    let entries: Vec<(&str, f64)> = nodes
        .iter()
        .map(|n| (n.id.as_str(), n.duration_minutes()))
        .collect();
    rollup(&entries, edges)
}

fn rollup(entries: &[(&str, f64)], edges: &[GraphEdge]) -> Vec<AggregatedValue> {
    let mut values: FxHashMap<&str, f64> = FxHashMap::default();
    for &(id, value) in entries {
        values.entry(id).or_insert(value);
    }
    let known: FxHashSet<&str> = values.keys().copied().collect();
    let forward = forward_adjacency(edges);

    entries
        .iter()
        .map(|&(id, _)| {
            let descendants = known_descendants(id, &forward, &known);

            let mut aggregated_value = values[id];
            let mut contributing_nodes = Vec::with_capacity(descendants.len() + 1);
            contributing_nodes.push(id.to_string());
            for descendant in descendants {
                aggregated_value += values[descendant.as_str()];
                contributing_nodes.push(descendant);
            }

            AggregatedValue {
                id: id.to_string(),
                aggregated_value,
                contributing_nodes,
            }
        })
        .collect()
}
