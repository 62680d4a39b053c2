/*
 * Strongly Connected Components (iterative Tarjan)
 *
 * Single-pass Tarjan with two explicit stacks: the DFS frame stack and the
 * SCC candidate stack. The frame stack replaces native recursion so that
 * million-node graphs cannot overflow the execution stack.
 *
 * Per node: discovery time, low-link, and SCC-stack membership. Non-tree
 * edges to nodes still on the SCC stack lower the low-link with the
 * neighbor's discovery time; tree edges propagate the child's low-link on
 * backtrack. When low == discovery the SCC stack is popped down to and
 * including the node, forming one component.
 *
 * - Component node ids appear in stack-pop order.
 * - Components are emitted in reverse topological order over the
 *   condensation.
 * - Roots iterate the node list in order; edges to ids absent from the
 *   node list are ignored.
 */

use rustc_hash::FxHashMap;

use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

struct Frame {
    v: usize,
    next: usize,
}

/// Decompose the graph into strongly connected components
pub fn strongly_connected_components(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
) -> Vec<Vec<String>> {
    let mut progress = ProgressTracker::new("graph_strongly_connected_components");

    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut ids: Vec<&str> = Vec::new();
    for node in nodes {
        if !index.contains_key(node.id.as_str()) {
            index.insert(node.id.as_str(), ids.len());
            ids.push(node.id.as_str());
        }
    }

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
    for edge in edges {
        if let (Some(&from), Some(&to)) = (
            index.get(edge.from.as_str()),
            index.get(edge.to.as_str()),
        ) {
            adjacency[from].push(to);
        }
    }

    let node_count = ids.len();
    let mut disc: Vec<Option<usize>> = vec![None; node_count];
    let mut low: Vec<usize> = vec![0; node_count];
    let mut on_stack: Vec<bool> = vec![false; node_count];
    let mut scc_stack: Vec<usize> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut timer: usize = 0;
    let mut sccs: Vec<Vec<String>> = Vec::new();

    for root in 0..node_count {
        if disc[root].is_some() {
            continue;
        }
        frames.push(Frame { v: root, next: 0 });

        while !frames.is_empty() {
            progress.tick();
            let top = frames.len() - 1;
            let v = frames[top].v;

            if disc[v].is_none() {
                disc[v] = Some(timer);
                low[v] = timer;
                timer += 1;
                scc_stack.push(v);
                on_stack[v] = true;
            }

            if frames[top].next < adjacency[v].len() {
                let w = adjacency[v][frames[top].next];
                frames[top].next += 1;

                if disc[w].is_none() {
                    frames.push(Frame { v: w, next: 0 });
                } else if on_stack[w] {
                    low[v] = low[v].min(disc[w].unwrap_or(low[v]));
                }
            } else {
                frames.pop();

                if Some(low[v]) == disc[v] {
                    let mut component: Vec<String> = Vec::new();
                    while let Some(w) = scc_stack.pop() {
                        on_stack[w] = false;
                        component.push(ids[w].to_string());
                        if w == v {
                            break;
                        }
                    }
                    sccs.push(component);
                }

                if let Some(parent) = frames.last() {
                    low[parent.v] = low[parent.v].min(low[v]);
                }
            }
        }
    }

    sccs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(id: &str) -> GraphNode {
        GraphNode::new(id, "unit")
    }

    fn edge(from: &str, to: &str) -> GraphEdge {
        GraphEdge::new(from, to, "link")
    }

    #[test]
    fn test_canonical_decomposition() {
        let nodes = vec![node("0"), node("1"), node("2"), node("3"), node("4")];
        let edges = vec![
            edge("1", "0"),
            edge("0", "2"),
            edge("2", "1"),
            edge("0", "3"),
            edge("3", "4"),
        ];

        let sccs = strongly_connected_components(&nodes, &edges);
        assert_eq!(
            sccs,
            vec![
                vec!["4".to_string()],
                vec!["3".to_string()],
                vec!["1".to_string(), "2".to_string(), "0".to_string()],
            ]
        );
    }

    #[test]
    fn test_every_node_in_exactly_one_scc() {
        let nodes = vec![node("A"), node("B"), node("C"), node("D")];
        let edges = vec![edge("A", "B"), edge("B", "A"), edge("B", "C")];

        let sccs = strongly_connected_components(&nodes, &edges);

        let mut seen: Vec<String> = sccs.iter().flatten().cloned().collect();
        seen.sort();
        assert_eq!(seen, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_dag_yields_singletons_in_reverse_topological_order() {
        let nodes = vec![node("A"), node("B"), node("C")];
        let edges = vec![edge("A", "B"), edge("B", "C")];

        let sccs = strongly_connected_components(&nodes, &edges);
        assert_eq!(
            sccs,
            vec![
                vec!["C".to_string()],
                vec!["B".to_string()],
                vec!["A".to_string()],
            ]
        );
    }

    #[test]
    fn test_self_loop_is_a_singleton_scc() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "A"), edge("A", "B")];

        let sccs = strongly_connected_components(&nodes, &edges);
        assert_eq!(
            sccs,
            vec![vec!["B".to_string()], vec!["A".to_string()]]
        );
    }

    #[test]
    fn test_two_separate_cycles() {
        let nodes = vec![
            node("0"),
            node("1"),
            node("2"),
            node("3"),
            node("4"),
            node("5"),
        ];
        let edges = vec![
            edge("0", "1"),
            edge("1", "2"),
            edge("2", "0"),
            edge("3", "4"),
            edge("4", "5"),
            edge("5", "3"),
        ];

        let sccs = strongly_connected_components(&nodes, &edges);
        assert_eq!(sccs.len(), 2);
        assert_eq!(sccs[0], vec!["2", "1", "0"]);
        assert_eq!(sccs[1], vec!["5", "4", "3"]);
    }

    #[test]
    fn test_duplicate_node_ids_counted_once() {
        let nodes = vec![node("A"), node("A"), node("B")];
        let edges = vec![edge("A", "B"), edge("B", "A")];

        let sccs = strongly_connected_components(&nodes, &edges);
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), 2);
    }

    #[test]
    fn test_edges_to_unknown_ids_ignored() {
        let nodes = vec![node("A")];
        let edges = vec![edge("A", "ghost"), edge("ghost", "A")];

        let sccs = strongly_connected_components(&nodes, &edges);
        assert_eq!(sccs, vec![vec!["A".to_string()]]);
    }
}
