/*
 * Group-Dictionary Rollup
 *
 * Node values are attribute→value mappings instead of scalars. The rollup
 * sums each attribute independently across the node and its distinct
 * forward descendants; an attribute missing on a contributor simply
 * contributes nothing.
 */

use std::collections::HashMap;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::known_descendants;
use crate::shared::adjacency::forward_adjacency;
use crate::shared::models::{GraphEdge, GroupValueNode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAggregate {
    pub id: String,
    pub aggregated_values: HashMap<String, f64>,

    /// Self first, then descendants in discovery order
    pub contributing_nodes: Vec<String>,
}

/// Roll attribute mappings up from the leaves, attribute by attribute
pub fn aggregate_grouped(nodes: &[GroupValueNode], edges: &[GraphEdge]) -> Vec<GroupAggregate> {
    let mut records: FxHashMap<&str, &HashMap<String, f64>> = FxHashMap::default();
    for node in nodes {
        records.entry(node.id.as_str()).or_insert(&node.values);
    }
    let known: FxHashSet<&str> = records.keys().copied().collect();
    let forward = forward_adjacency(edges);

    nodes
        .iter()
        .map(|node| {
            let descendants = known_descendants(node.id.as_str(), &forward, &known);

            let mut aggregated_values: HashMap<String, f64> = HashMap::new();
            let mut contributing_nodes = Vec::with_capacity(descendants.len() + 1);

            contributing_nodes.push(node.id.clone());
            accumulate(&mut aggregated_values, records[node.id.as_str()]);

            for descendant in descendants {
                accumulate(&mut aggregated_values, records[descendant.as_str()]);
                contributing_nodes.push(descendant);
            }

            GroupAggregate {
                id: node.id.clone(),
                aggregated_values,
                contributing_nodes,
            }
        })
        .collect()
}

fn accumulate(into: &mut HashMap<String, f64>, values: &HashMap<String, f64>) {
    for (attribute, value) in values {
        *into.entry(attribute.clone()).or_insert(0.0) += value;
    }
}
