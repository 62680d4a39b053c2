/*
 * Weighted Rollup
 *
 * For every node, over itself and its distinct forward descendants:
 *
 *   weighted_sum     = Σ value_i * weight_i
 *   total_weight     = Σ weight_i
 *   weighted_average = weighted_sum / total_weight   (0.0 when weightless)
 *
 * A missing weight defaults to 1.0. The average is computed exactly as
 * sum-of-products divided by sum-of-weights, in self-then-discovery order;
 * tests compare the result bit-for-bit against literal expectations, so
 * the accumulation order must not change.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::known_descendants;
use crate::shared::adjacency::forward_adjacency;
use crate::shared::models::{GraphEdge, ValueNode};
use crate::shared::safe_divide;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedAggregate {
    pub id: String,
    pub weighted_sum: f64,
    pub weighted_average: f64,
    pub total_weight: f64,
}

/// Roll weighted values up from the leaves
pub fn aggregate_weighted(nodes: &[ValueNode], edges: &[GraphEdge]) -> Vec<WeightedAggregate> {
    let mut records: FxHashMap<&str, (f64, f64)> = FxHashMap::default();
    for node in nodes {
        records
            .entry(node.id.as_str())
            .or_insert((node.value, node.weight.unwrap_or(1.0)));
    }
    let known: FxHashSet<&str> = records.keys().copied().collect();
    let forward = forward_adjacency(edges);

    nodes
        .iter()
        .map(|node| {
            let mut weighted_sum = 0.0;
            let mut total_weight = 0.0;

            let (value, weight) = records[node.id.as_str()];
            weighted_sum += value * weight;
            total_weight += weight;

            for descendant in known_descendants(node.id.as_str(), &forward, &known) {
                let (value, weight) = records[descendant.as_str()];
                weighted_sum += value * weight;
                total_weight += weight;
            }

            WeightedAggregate {
                id: node.id.clone(),
                weighted_sum,
                weighted_average: safe_divide(weighted_sum, total_weight),
                total_weight,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn weighted(id: &str, value: f64, weight: Option<f64>) -> ValueNode {
        ValueNode {
            id: id.to_string(),
            node_type: "item".to_string(),
            value,
            weight,
        }
    }

    fn edge(from: &str, to: &str) -> GraphEdge {
        GraphEdge::new(from, to, "contains")
    }

    #[test]
    fn test_absent_weight_defaults_to_one() {
        let nodes = vec![
            weighted("A", 6.0, None),
            weighted("B", 4.0, Some(2.0)),
        ];
        let edges = vec![edge("A", "B")];

        let result = aggregate_weighted(&nodes, &edges);

        assert_eq!(result[0].weighted_sum, 14.0);
        assert_eq!(result[0].total_weight, 3.0);
        assert_eq!(result[0].weighted_average, 14.0 / 3.0);
    }

    #[test]
    fn test_leaf_aggregates_itself_only() {
        let nodes = vec![
            weighted("A", 6.0, None),
            weighted("B", 4.0, Some(2.0)),
        ];
        let edges = vec![edge("A", "B")];

        let result = aggregate_weighted(&nodes, &edges);
        assert_eq!(result[1].weighted_sum, 8.0);
        assert_eq!(result[1].total_weight, 2.0);
        assert_eq!(result[1].weighted_average, 4.0);
    }

    #[test]
    fn test_zero_total_weight_averages_to_zero() {
        let nodes = vec![weighted("A", 5.0, Some(0.0))];
        let result = aggregate_weighted(&nodes, &[]);

        assert_eq!(result[0].weighted_sum, 0.0);
        assert_eq!(result[0].total_weight, 0.0);
        assert_eq!(result[0].weighted_average, 0.0);
    }

    #[test]
    fn test_shared_descendant_weighted_once() {
        let nodes = vec![
            weighted("top", 1.0, None),
            weighted("l", 2.0, None),
            weighted("r", 3.0, None),
            weighted("leaf", 10.0, Some(2.0)),
        ];
        let edges = vec![
            edge("top", "l"),
            edge("top", "r"),
            edge("l", "leaf"),
            edge("r", "leaf"),
        ];

        let result = aggregate_weighted(&nodes, &edges);
        assert_eq!(result[0].weighted_sum, 1.0 + 2.0 + 3.0 + 20.0);
        assert_eq!(result[0].total_weight, 5.0);
    }
}
