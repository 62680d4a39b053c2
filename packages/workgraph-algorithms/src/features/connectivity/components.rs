/*
 * Connected Components (undirected)
 *
 * Edges are treated as undirected. Discovery iterates the node list in
 * order; each unvisited node seeds a BFS that collects its component.
 * Component ids are "comp_<n>" with a 0-based discovery counter; the
 * format is observable and relied upon by callers.
 *
 * Ids reached only through edges (absent from the node list) join the
 * component they are connected to, consistent with the plain traversals'
 * no-validation policy. Isolated nodes become size-1 components.
 */

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::shared::adjacency::undirected_adjacency;
use crate::shared::models::{EdgeEndpoints, GraphNode};
use crate::shared::progress::ProgressTracker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentAssignment {
    pub node_id: String,
    pub component_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub component_id: String,
    pub size: u64,

    /// Member ids in BFS discovery order
    pub nodes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedComponentsResult {
    pub assignments: Vec<ComponentAssignment>,
    pub infos: Vec<ComponentInfo>,
}

/// Decompose the graph into undirected connected components
pub fn connected_components<E: EdgeEndpoints>(
    nodes: &[GraphNode],
    edges: &[E],
) -> ConnectedComponentsResult {
    let undirected = undirected_adjacency(edges);
    let mut progress = ProgressTracker::new("graph_connected_components");

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut assignments: Vec<ComponentAssignment> = Vec::new();
    let mut infos: Vec<ComponentInfo> = Vec::new();

    for node in nodes {
        if visited.contains(node.id.as_str()) {
            continue;
        }

        let component_id = format!("comp_{}", infos.len());
        let mut members: Vec<String> = Vec::new();
        let mut queue: VecDeque<String> = VecDeque::new();

        visited.insert(node.id.clone());
        queue.push_back(node.id.clone());

        while let Some(current) = queue.pop_front() {
            progress.tick();
            members.push(current.clone());
            assignments.push(ComponentAssignment {
                node_id: current.clone(),
                component_id: component_id.clone(),
            });

            if let Some(neighbors) = undirected.get(&current) {
                for neighbor in neighbors {
                    if visited.insert(neighbor.clone()) {
                        queue.push_back(neighbor.clone());
                    }
                }
            }
        }

        infos.push(ComponentInfo {
            component_id,
            size: members.len() as u64,
            nodes: members,
        });
    }

    ConnectedComponentsResult {
        assignments,
        infos,
    }
}
