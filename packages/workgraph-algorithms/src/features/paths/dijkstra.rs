/*
 * Shortest Weighted Path (Dijkstra)
 *
 * Classic Dijkstra driven by an unvisited set and a predecessor map:
 * distances start at +inf (source at 0), each round settles the unvisited
 * node with the smallest tentative distance, and settling the target ends
 * the search early.
 *
 * The minimum scan iterates the node list in order, so equal distances
 * settle deterministically; relaxation uses strict improvement, so the
 * first predecessor achieving a distance is kept.
 *
 * An unreachable target yields an empty path with +inf cost; callers
 * inspect the path length, not an error. Negative edge weights are
 * rejected up front.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, Result};
use crate::shared::models::{GraphNode, WeightedEdge};
use crate::shared::progress::ProgressTracker;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult {
    pub path: Vec<String>,
    pub cost: f64,
}

/// Find the cheapest path from `source` to `target`
pub fn shortest_path(
    nodes: &[GraphNode],
    edges: &[WeightedEdge],
    source: &str,
    target: &str,
) -> Result<ShortestPathResult> {
    if let Some(bad) = edges.iter().find(|e| e.weight < 0.0) {
        return Err(GraphError::invalid_argument(format!(
            "negative edge weight {} on {} -> {}",
            bad.weight, bad.from, bad.to
        )));
    }
    let mut progress = ProgressTracker::new("graph_shortest_path");

    // Canonical node ids in list order (first occurrence wins)
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut order: Vec<&str> = Vec::new();
    for node in nodes {
        if seen.insert(node.id.as_str()) {
            order.push(node.id.as_str());
        }
    }

    let mut weighted_forward: FxHashMap<&str, Vec<(&str, f64)>> = FxHashMap::default();
    for edge in edges {
        weighted_forward
            .entry(edge.from.as_str())
            .or_default()
            .push((edge.to.as_str(), edge.weight));
    }

    let mut dist: FxHashMap<&str, f64> =
        order.iter().map(|id| (*id, f64::INFINITY)).collect();
    let mut predecessor: FxHashMap<&str, &str> = FxHashMap::default();
    let mut unvisited: FxHashSet<&str> = order.iter().copied().collect();

    if dist.contains_key(source) {
        dist.insert(source, 0.0);
    }

    while !unvisited.is_empty() {
        progress.tick();

        // Settle the closest unvisited node, node-list order breaking ties
        let mut closest: Option<(&str, f64)> = None;
        for &id in &order {
            if !unvisited.contains(id) {
                continue;
            }
            let d = dist[id];
            if closest.map_or(true, |(_, best)| d < best) {
                closest = Some((id, d));
            }
        }

        let Some((current, current_dist)) = closest else {
            break;
        };
        if current_dist.is_infinite() {
            break; // the rest is unreachable
        }
        unvisited.remove(current);
        if current == target {
            break;
        }

        if let Some(neighbors) = weighted_forward.get(current) {
            for &(neighbor, weight) in neighbors {
                if !unvisited.contains(neighbor) {
                    continue;
                }
                let candidate = current_dist + weight;
                if candidate < dist[neighbor] {
                    dist.insert(neighbor, candidate);
                    predecessor.insert(neighbor, current);
                }
            }
        }
    }

    let cost = dist.get(target).copied().unwrap_or(f64::INFINITY);
    if cost.is_infinite() {
        return Ok(ShortestPathResult {
            path: Vec::new(),
            cost: f64::INFINITY,
        });
    }

    let mut path: Vec<String> = vec![target.to_string()];
    let mut cursor = target;
    while cursor != source {
        match predecessor.get(cursor) {
            Some(&prev) => {
                path.push(prev.to_string());
                cursor = prev;
            }
            None => {
                // cost was finite, so the chain must reach the source
                return Err(GraphError::internal("broken predecessor chain"));
            }
        }
    }
    path.reverse();

    Ok(ShortestPathResult { path, cost })
}
