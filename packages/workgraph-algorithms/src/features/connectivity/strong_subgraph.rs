/*
 * Strong Subgraph Extraction
 *
 * Builds one complete subgraph per strongly connected component and keeps
 * the ones whose type inventory satisfies the requested filters.
 *
 * Per subgraph:
 * - nodes:        member records, SCC pop order
 * - edges:        edges with both endpoints inside the SCC
 * - source_nodes: members with no incoming edge from within the SCC
 * - target_nodes: members with no outgoing edge to within the SCC
 * - node_types / edge_types: sorted, deduplicated type inventories
 *
 * Filtering: a dimension with an empty filter list is disabled; otherwise
 * the SCC is retained when at least one required set is fully contained in
 * the SCC's type inventory. Both dimensions must pass.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::scc::strongly_connected_components;
use crate::shared::models::{GraphEdge, GraphNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrongSubgraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub source_nodes: Vec<String>,
    pub target_nodes: Vec<String>,
    pub node_types: Vec<String>,
    pub edge_types: Vec<String>,
}

/// Extract the SCC subgraphs whose node/edge type sets satisfy the filters
pub fn strong_subgraph_extraction(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    required_node_type_sets: &[Vec<String>],
    required_edge_type_sets: &[Vec<String>],
) -> Vec<StrongSubgraph> {
    // First occurrence of a duplicated id is canonical
    let mut canonical: FxHashMap<&str, &GraphNode> = FxHashMap::default();
    for node in nodes {
        canonical.entry(node.id.as_str()).or_insert(node);
    }

    let mut subgraphs: Vec<StrongSubgraph> = Vec::new();

    for component in strongly_connected_components(nodes, edges) {
        let members: FxHashSet<&str> = component.iter().map(|id| id.as_str()).collect();

        let internal_edges: Vec<&GraphEdge> = edges
            .iter()
            .filter(|e| members.contains(e.from.as_str()) && members.contains(e.to.as_str()))
            .collect();

        let has_internal_incoming: FxHashSet<&str> =
            internal_edges.iter().map(|e| e.to.as_str()).collect();
        let has_internal_outgoing: FxHashSet<&str> =
            internal_edges.iter().map(|e| e.from.as_str()).collect();

        let member_nodes: Vec<GraphNode> = component
            .iter()
            .filter_map(|id| canonical.get(id.as_str()).map(|n| (*n).clone()))
            .collect();

        let mut node_types: Vec<String> = member_nodes
            .iter()
            .map(|n| n.node_type.clone())
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        node_types.sort();

        let mut edge_types: Vec<String> = internal_edges
            .iter()
            .map(|e| e.edge_type.clone())
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        edge_types.sort();

        if !satisfies(required_node_type_sets, &node_types)
            || !satisfies(required_edge_type_sets, &edge_types)
        {
            continue;
        }

        subgraphs.push(StrongSubgraph {
            source_nodes: component
                .iter()
                .filter(|id| !has_internal_incoming.contains(id.as_str()))
                .cloned()
                .collect(),
            target_nodes: component
                .iter()
                .filter(|id| !has_internal_outgoing.contains(id.as_str()))
                .cloned()
                .collect(),
            nodes: member_nodes,
            edges: internal_edges.into_iter().cloned().collect(),
            node_types,
            edge_types,
        });
    }

    subgraphs
}

/// Empty filter list disables the dimension; otherwise one required set
/// must be fully present
fn satisfies(required_sets: &[Vec<String>], present: &[String]) -> bool {
    if required_sets.is_empty() {
        return true;
    }
    let present: FxHashSet<&str> = present.iter().map(|t| t.as_str()).collect();
    required_sets
        .iter()
        .any(|set| set.iter().all(|t| present.contains(t.as_str())))
}
