/*
 * Articulation Points
 *
 * Runs on the same undirected DFS forest as bridge detection. A node v is
 * an articulation point when:
 * - v is a DFS root with two or more tree children, or
 * - v is not a root and has a tree child w with low[w] >= disc[v].
 *
 * Points are reported in discovery order.
 */

use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

use super::forest::UndirectedForest;

/// Find every node whose removal disconnects its component
pub fn articulation_points(nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<String> {
    let mut progress = ProgressTracker::new("graph_articulation_points");

    let mut forest = UndirectedForest::build(nodes, edges, &mut progress);
    forest.fold_low_links(&mut progress);

    let mut points: Vec<String> = Vec::new();
    for &v in &forest.order {
        let is_articulation = if forest.is_root(v) {
            forest.tree_children(v).count() >= 2
        } else {
            forest
                .tree_children(v)
                .any(|w| forest.low[w] >= forest.disc[v])
        };

        if is_articulation {
            points.push(forest.ids[v].clone());
        }
    }

    points
}
