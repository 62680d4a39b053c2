/*
 * Adjacency Builder
 *
 * The sole hot path for graph construction: every algorithm invocation
 * rebuilds its indices from the edge list and discards them on return.
 *
 * Contract:
 * - forward:  id → ordered neighbor ids (edge-insertion order per source)
 * - reverse:  id → ordered predecessor ids (edge-insertion order per target)
 * - An id is present only if it occurs as a source (resp. target) of at
 *   least one edge; callers that need every node id consult the node list.
 * - Parallel edges appear repeatedly; traversals deduplicate via visited
 *   sets. No sorting, no deduplication here.
 *
 * Time and space: O(|E|). Cannot fail.
 */

use rustc_hash::FxHashMap;

use super::models::EdgeEndpoints;

/// Build the forward neighbor index (`from` → ordered `to` sequence)
pub fn forward_adjacency<E: EdgeEndpoints>(edges: &[E]) -> FxHashMap<String, Vec<String>> {
    let mut forward: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for edge in edges {
        forward
            .entry(edge.source().to_string())
            .or_default()
            .push(edge.target().to_string());
    }
    forward
}

/// Build the reverse predecessor index (`to` → ordered `from` sequence)
pub fn reverse_adjacency<E: EdgeEndpoints>(edges: &[E]) -> FxHashMap<String, Vec<String>> {
    let mut reverse: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for edge in edges {
        reverse
            .entry(edge.target().to_string())
            .or_default()
            .push(edge.source().to_string());
    }
    reverse
}

/// Build an undirected neighbor index: each edge contributes both directions
///
/// Parallel edges still appear repeatedly and self-loops contribute two
/// entries; undirected algorithms that need deduplication (bridges) apply
/// their own policy on top.
pub fn undirected_adjacency<E: EdgeEndpoints>(edges: &[E]) -> FxHashMap<String, Vec<String>> {
    let mut undirected: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for edge in edges {
        undirected
            .entry(edge.source().to_string())
            .or_default()
            .push(edge.target().to_string());
        undirected
            .entry(edge.target().to_string())
            .or_default()
            .push(edge.source().to_string());
    }
    undirected
}
