/*
 * Critical Path (timed DAG)
 *
 * Longest-duration chain through a DAG of timed nodes. Each node
 * contributes its own window, end_time - start_time, measured in whole
 * minutes. DP over a Kahn topological order:
 *
 *   dp[v] = duration(v) + max(dp[u] for predecessor u)
 *
 * with ties broken by the first-discovered predecessor (reverse-adjacency
 * insertion order, strict improvement). The chain ending at the maximal dp
 * is reconstructed through the recorded predecessors.
 *
 * Cyclic input is undefined behavior for this procedure (cycle members
 * never enter the topological order); callers validate with cycle
 * detection first.
 */

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::shared::models::{GraphEdge, TimedNode};
use crate::shared::progress::ProgressTracker;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalPathResult {
    pub critical_path: Vec<String>,
    pub total_duration: f64,
}

/// Find the longest-duration path through a timed DAG
pub fn critical_path(nodes: &[TimedNode], edges: &[GraphEdge]) -> CriticalPathResult {
    let mut progress = ProgressTracker::new("graph_critical_path");

    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut ids: Vec<&str> = Vec::new();
    let mut durations: Vec<f64> = Vec::new();
    for node in nodes {
        if !index.contains_key(node.id.as_str()) {
            index.insert(node.id.as_str(), ids.len());
            ids.push(node.id.as_str());
            durations.push(node.duration_minutes());
        }
    }

    let node_count = ids.len();
    let mut forward: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut in_degree: Vec<usize> = vec![0; node_count];
    for edge in edges {
        let (Some(&from), Some(&to)) = (
            index.get(edge.from.as_str()),
            index.get(edge.to.as_str()),
        ) else {
            continue;
        };
        forward[from].push(to);
        predecessors[to].push(from);
        in_degree[to] += 1;
    }

    // Kahn order; cycle members never reach in-degree zero
    let mut queue: Vec<usize> = (0..node_count).filter(|&v| in_degree[v] == 0).collect();
    let mut topo: Vec<usize> = Vec::new();
    let mut head = 0;
    while head < queue.len() {
        progress.tick();
        let v = queue[head];
        head += 1;
        topo.push(v);
        for &w in &forward[v] {
            in_degree[w] -= 1;
            if in_degree[w] == 0 {
                queue.push(w);
            }
        }
    }

    let mut dp: Vec<f64> = durations.clone();
    let mut best_pred: Vec<Option<usize>> = vec![None; node_count];
    for &v in &topo {
        let mut best: f64 = 0.0;
        let mut chosen: Option<usize> = None;
        for &u in &predecessors[v] {
            if chosen.is_none() || dp[u] > best {
                best = dp[u];
                chosen = Some(u);
            }
        }
        if let Some(u) = chosen {
            dp[v] = durations[v] + dp[u];
            best_pred[v] = Some(u);
        }
    }

    // Maximal chain end, earliest in topological order on ties
    let mut end: Option<usize> = None;
    for &v in &topo {
        if end.map_or(true, |current| dp[v] > dp[current]) {
            end = Some(v);
        }
    }

    let Some(end) = end else {
        return CriticalPathResult {
            critical_path: Vec::new(),
            total_duration: 0.0,
        };
    };

    let mut chain: Vec<String> = Vec::new();
    let mut cursor = Some(end);
    while let Some(v) = cursor {
        chain.push(ids[v].to_string());
        cursor = best_pred[v];
    }
    chain.reverse();

    CriticalPathResult {
        critical_path: chain,
        total_duration: dp[end],
    }
}
