/*
 * Subgraph Extraction by Node-Type Filters
 *
 * Both entry points split the graph into undirected connected components
 * and keep each component that contains at least one node of the driving
 * type set: source types for `subgraph_from_sources`, target types for
 * `subgraph_from_targets`. The driving set must be non-empty.
 *
 * Each kept component is returned with its full node and edge lists plus:
 * - source_nodes: members whose type matches any source type; when the
 *   source filter is empty (targets entry point), members with no incoming
 *   edge in the full graph
 * - target_nodes: members whose type matches any target type; when the
 *   target filter is empty, members with no outgoing edge in the full
 *   graph
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, Result};
use crate::features::connectivity::connected_components;
use crate::shared::adjacency::{forward_adjacency, reverse_adjacency};
use crate::shared::models::{GraphEdge, GraphNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedSubgraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub source_nodes: Vec<String>,
    pub target_nodes: Vec<String>,
}

/// Extract components anchored on source-typed nodes
pub fn subgraph_from_sources(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    source_node_types: &[String],
    target_node_types: &[String],
) -> Result<Vec<TypedSubgraph>> {
    if source_node_types.is_empty() {
        return Err(GraphError::invalid_argument(
            "source_node_types must not be empty",
        ));
    }
    Ok(extract(
        nodes,
        edges,
        source_node_types,
        target_node_types,
        Anchor::Sources,
    ))
}

/// Extract components anchored on target-typed nodes
pub fn subgraph_from_targets(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    source_node_types: &[String],
    target_node_types: &[String],
) -> Result<Vec<TypedSubgraph>> {
    if target_node_types.is_empty() {
        return Err(GraphError::invalid_argument(
            "target_node_types must not be empty",
        ));
    }
    Ok(extract(
        nodes,
        edges,
        source_node_types,
        target_node_types,
        Anchor::Targets,
    ))
}

#[derive(Clone, Copy)]
enum Anchor {
    Sources,
    Targets,
}

fn extract(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    source_node_types: &[String],
    target_node_types: &[String],
    anchor: Anchor,
) -> Vec<TypedSubgraph> {
    let mut canonical: FxHashMap<&str, &GraphNode> = FxHashMap::default();
    for node in nodes {
        canonical.entry(node.id.as_str()).or_insert(node);
    }

    let source_types: FxHashSet<&str> = source_node_types.iter().map(|t| t.as_str()).collect();
    let target_types: FxHashSet<&str> = target_node_types.iter().map(|t| t.as_str()).collect();
    let anchor_types = match anchor {
        Anchor::Sources => &source_types,
        Anchor::Targets => &target_types,
    };

    let forward = forward_adjacency(edges);
    let reverse = reverse_adjacency(edges);

    let mut subgraphs: Vec<TypedSubgraph> = Vec::new();

    for info in connected_components(nodes, edges).infos {
        let member_nodes: Vec<GraphNode> = info
            .nodes
            .iter()
            .filter_map(|id| canonical.get(id.as_str()).map(|n| (*n).clone()))
            .collect();

        let anchored = member_nodes
            .iter()
            .any(|n| anchor_types.contains(n.node_type.as_str()));
        if !anchored {
            continue;
        }

        let members: FxHashSet<&str> = info.nodes.iter().map(|id| id.as_str()).collect();
        let member_edges: Vec<GraphEdge> = edges
            .iter()
            .filter(|e| members.contains(e.from.as_str()) && members.contains(e.to.as_str()))
            .cloned()
            .collect();

        let source_nodes: Vec<String> = if source_types.is_empty() {
            // No source filter: nodes nothing flows into, over the full graph
            member_nodes
                .iter()
                .filter(|n| !reverse.contains_key(n.id.as_str()))
                .map(|n| n.id.clone())
                .collect()
        } else {
            member_nodes
                .iter()
                .filter(|n| source_types.contains(n.node_type.as_str()))
                .map(|n| n.id.clone())
                .collect()
        };

        let target_nodes: Vec<String> = if target_types.is_empty() {
            // No target filter: nodes nothing flows out of, over the full graph
            member_nodes
                .iter()
                .filter(|n| !forward.contains_key(n.id.as_str()))
                .map(|n| n.id.clone())
                .collect()
        } else {
            member_nodes
                .iter()
                .filter(|n| target_types.contains(n.node_type.as_str()))
                .map(|n| n.id.clone())
                .collect()
        };

        subgraphs.push(TypedSubgraph {
            nodes: member_nodes,
            edges: member_edges,
            source_nodes,
            target_nodes,
        });
    }

    subgraphs
}
