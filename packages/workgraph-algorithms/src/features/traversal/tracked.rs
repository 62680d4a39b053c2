/*
 * Tracked Traversals
 *
 * BFS/DFS variants that record discovery metadata per visited node:
 * visited order, depth, the established parent and the types of every
 * parallel edge from that parent.
 *
 * Differences from the plain walks:
 * - A node-type lookup is built from the node list; a step to an id absent
 *   from the lookup is skipped entirely (dangling edges are filtered, the
 *   unseen subtree with them). A source id absent from the node list yields
 *   an empty output.
 * - The parent of a node is fixed at first discovery; later edges into an
 *   already-seen node never reassign it.
 * - With a depth limit, nodes beyond the limit are assigned a depth and
 *   marked seen (so their descendants stay filtered) but are not emitted.
 *   `limit = 0` emits only the source.
 */

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::shared::adjacency::forward_adjacency;
use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

/// One discovered node with its traversal metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedNode {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: String,

    /// 0-based emission counter
    pub visited_order: u64,

    /// Distance from the source along the discovery tree
    pub depth: u64,

    /// Types of every edge from the established parent to this node, in
    /// edge-insertion order (parallel edges contribute one entry each)
    pub parent_edge_types: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<String>,
}

/// Queue/stack entry: node plus the discovery context it was reached with
struct Step {
    id: String,
    depth: u64,
    parent: Option<String>,
}

struct TrackedState<'a> {
    type_lookup: FxHashMap<&'a str, &'a str>,
    edge_types: FxHashMap<(&'a str, &'a str), Vec<&'a str>>,
    forward: FxHashMap<String, Vec<String>>,
    seen: FxHashSet<String>,
    emitted: Vec<TrackedNode>,
}

impl<'a> TrackedState<'a> {
    fn new(nodes: &'a [GraphNode], edges: &'a [GraphEdge]) -> Self {
        // First occurrence of a duplicated id is canonical
        let mut type_lookup: FxHashMap<&str, &str> = FxHashMap::default();
        for node in nodes {
            type_lookup
                .entry(node.id.as_str())
                .or_insert(node.node_type.as_str());
        }

        let mut edge_types: FxHashMap<(&str, &str), Vec<&str>> = FxHashMap::default();
        for edge in edges {
            edge_types
                .entry((edge.from.as_str(), edge.to.as_str()))
                .or_default()
                .push(edge.edge_type.as_str());
        }

        Self {
            type_lookup,
            edge_types,
            forward: forward_adjacency(edges),
            seen: FxHashSet::default(),
            emitted: Vec::new(),
        }
    }

    fn emit(&mut self, step: &Step) {
        let node_type = self.type_lookup[step.id.as_str()].to_string();
        let parent_edge_types = match &step.parent {
            Some(parent) => self
                .edge_types
                .get(&(parent.as_str(), step.id.as_str()))
                .map(|types| types.iter().map(|t| t.to_string()).collect())
                .unwrap_or_default(),
            None => Vec::new(),
        };
        let parent_type = step
            .parent
            .as_deref()
            .map(|p| self.type_lookup[p].to_string());

        self.emitted.push(TrackedNode {
            id: step.id.clone(),
            node_type,
            visited_order: self.emitted.len() as u64,
            depth: step.depth,
            parent_edge_types,
            parent_id: step.parent.clone(),
            parent_type,
        });
    }

    fn over_limit(depth: u64, limit: Option<u64>) -> bool {
        limit.is_some_and(|max_depth| depth > max_depth)
    }
}

/// Tracked breadth-first traversal
pub fn tracked_bfs(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    source_node_id: &str,
    limit: Option<u64>,
) -> Vec<TrackedNode> {
    let mut state = TrackedState::new(nodes, edges);
    if !state.type_lookup.contains_key(source_node_id) {
        return Vec::new();
    }
    let mut progress = ProgressTracker::new("graph_tracked_bfs");

    let mut queue: VecDeque<Step> = VecDeque::new();
    state.seen.insert(source_node_id.to_string());
    queue.push_back(Step {
        id: source_node_id.to_string(),
        depth: 0,
        parent: None,
    });

    while let Some(step) = queue.pop_front() {
        progress.tick();
        if TrackedState::over_limit(step.depth, limit) {
            continue;
        }
        state.emit(&step);

        if let Some(neighbors) = state.forward.get(&step.id).cloned() {
            for neighbor in neighbors {
                if !state.type_lookup.contains_key(neighbor.as_str()) {
                    continue;
                }
                if state.seen.insert(neighbor.clone()) {
                    queue.push_back(Step {
                        id: neighbor,
                        depth: step.depth + 1,
                        parent: Some(step.id.clone()),
                    });
                }
            }
        }
    }

    state.emitted
}

/// Tracked depth-first traversal
///
/// Same LIFO discipline as the plain DFS: the last edge out of a node is
/// explored first, and the seen-guard is applied on pop.
pub fn tracked_dfs(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    source_node_id: &str,
    limit: Option<u64>,
) -> Vec<TrackedNode> {
    let mut state = TrackedState::new(nodes, edges);
    if !state.type_lookup.contains_key(source_node_id) {
        return Vec::new();
    }
    let mut progress = ProgressTracker::new("graph_tracked_dfs");

    let mut stack: Vec<Step> = vec![Step {
        id: source_node_id.to_string(),
        depth: 0,
        parent: None,
    }];

    while let Some(step) = stack.pop() {
        progress.tick();
        if !state.seen.insert(step.id.clone()) {
            continue;
        }
        if TrackedState::over_limit(step.depth, limit) {
            continue;
        }
        state.emit(&step);

        if let Some(neighbors) = state.forward.get(&step.id).cloned() {
            for neighbor in neighbors {
                if !state.type_lookup.contains_key(neighbor.as_str()) {
                    continue;
                }
                if !state.seen.contains(&neighbor) {
                    stack.push(Step {
                        id: neighbor,
                        depth: step.depth + 1,
                        parent: Some(step.id.clone()),
                    });
                }
            }
        }
    }

    state.emitted
}
