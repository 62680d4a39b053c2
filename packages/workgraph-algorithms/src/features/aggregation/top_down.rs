/*
 * Top-Down Rollup
 *
 * Distribution from the roots: a root keeps its own value; every other
 * node receives its own value plus an equal share of each parent's
 * accumulated value (parent accumulation divided by the parent's distinct
 * child count).
 *
 * Accumulation runs over a Kahn topological order of the deduplicated
 * parent→child graph, so each parent is final before it distributes.
 * `contributing_nodes` lists the node followed by its ancestor chain along
 * the first-discovered parent edge up to a root.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::bottom_up::AggregatedValue;
use crate::shared::models::{GraphEdge, ValueNode};

/// Distribute accumulated values from the roots downward
pub fn aggregate_top_down(nodes: &[ValueNode], edges: &[GraphEdge]) -> Vec<AggregatedValue> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut ids: Vec<&str> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    for node in nodes {
        if !index.contains_key(node.id.as_str()) {
            index.insert(node.id.as_str(), ids.len());
            ids.push(node.id.as_str());
            values.push(node.value);
        }
    }
    let node_count = ids.len();

    // Deduplicated parent→child pairs over known ids
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut parents: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut pairs: FxHashSet<(usize, usize)> = FxHashSet::default();
    for edge in edges {
        let (Some(&from), Some(&to)) = (
            index.get(edge.from.as_str()),
            index.get(edge.to.as_str()),
        ) else {
            continue;
        };
        if pairs.insert((from, to)) {
            children[from].push(to);
            parents[to].push(from);
        }
    }

    // Kahn order over the deduplicated graph
    let mut in_degree: Vec<usize> = (0..node_count).map(|v| parents[v].len()).collect();
    let mut queue: Vec<usize> = (0..node_count).filter(|&v| in_degree[v] == 0).collect();
    let mut head = 0;

    let mut accumulated: Vec<f64> = values.clone();
    let mut chain_parent: Vec<Option<usize>> = vec![None; node_count];

    while head < queue.len() {
        let v = queue[head];
        head += 1;

        let mut incoming = 0.0;
        for &p in &parents[v] {
            incoming += accumulated[p] / children[p].len() as f64;
        }
        accumulated[v] = values[v] + incoming;
        chain_parent[v] = parents[v].first().copied();

        for &w in &children[v] {
            in_degree[w] -= 1;
            if in_degree[w] == 0 {
                queue.push(w);
            }
        }
    }

    nodes
        .iter()
        .map(|node| {
            let v = index[node.id.as_str()];

            let mut contributing_nodes = vec![ids[v].to_string()];
            let mut cursor = chain_parent[v];
            while let Some(p) = cursor {
                contributing_nodes.push(ids[p].to_string());
                cursor = chain_parent[p];
            }

            AggregatedValue {
                id: node.id.clone(),
                aggregated_value: accumulated[v],
                contributing_nodes,
            }
        })
        .collect()
}
