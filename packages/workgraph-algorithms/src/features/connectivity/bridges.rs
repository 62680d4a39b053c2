/*
 * Bridge Detection and Bridge Analysis
 *
 * A bridge is an undirected edge whose removal increases the number of
 * connected components. Detection runs the two-pass iterative Tarjan
 * variant on the shared undirected DFS forest; see forest.rs for the
 * low-link folding rules. Bridges are emitted while walking the discovery
 * order in reverse, so deeper tree edges surface first.
 *
 * Bridge analysis additionally simulates the removal of every node,
 * re-running connected components each time, and reports the nodes whose
 * removal raises the component count. That rerun makes the analysis
 * O(|V| * (|V| + |E|)).
 */

use serde::{Deserialize, Serialize};

use super::components::connected_components;
use super::forest::UndirectedForest;
use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

/// One undirected bridge edge, reported as (tree parent, tree child)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeAnalysisResult {
    pub bridges: Vec<Bridge>,

    /// Nodes whose removal increases the number of connected components
    pub critical_nodes: Vec<String>,
}

/// Find every bridge in the undirected interpretation of the graph
pub fn bridge_detection(nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<Bridge> {
    let mut progress = ProgressTracker::new("graph_bridge_detection");

    let mut forest = UndirectedForest::build(nodes, edges, &mut progress);
    forest
        .fold_low_links(&mut progress)
        .into_iter()
        .map(|(from, to)| Bridge { from, to })
        .collect()
}

/// Bridges plus node-removal simulation over connected components
pub fn bridge_analysis(nodes: &[GraphNode], edges: &[GraphEdge]) -> BridgeAnalysisResult {
    let bridges = bridge_detection(nodes, edges);

    let baseline = connected_components(nodes, edges).infos.len();
    let mut critical_nodes: Vec<String> = Vec::new();

    for candidate in unique_ids(nodes) {
        let remaining_nodes: Vec<GraphNode> = nodes
            .iter()
            .filter(|n| n.id != candidate)
            .cloned()
            .collect();
        let remaining_edges: Vec<GraphEdge> = edges
            .iter()
            .filter(|e| e.from != candidate && e.to != candidate)
            .cloned()
            .collect();

        let remaining = connected_components(&remaining_nodes, &remaining_edges)
            .infos
            .len();
        if remaining > baseline {
            critical_nodes.push(candidate);
        }
    }

    BridgeAnalysisResult {
        bridges,
        critical_nodes,
    }
}

fn unique_ids(nodes: &[GraphNode]) -> Vec<String> {
    let mut seen = rustc_hash::FxHashSet::default();
    nodes
        .iter()
        .filter(|n| seen.insert(n.id.as_str()))
        .map(|n| n.id.clone())
        .collect()
}
