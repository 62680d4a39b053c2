//! Quantified invariants over randomized small graphs
//!
//! Each property pins one contract of the kernel: ordering guarantees of
//! the traversals, soundness of cycle detection against topological sort,
//! the SCC partition, bridge semantics under edge removal, shortest-path
//! optimality against exhaustive enumeration, rollup identities on
//! forests, and the validation count closure.

use proptest::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use workgraph_algorithms::*;

const ID_POOL: usize = 6;

fn pool_nodes() -> Vec<GraphNode> {
    (0..ID_POOL)
        .map(|i| GraphNode::new(format!("n{i}"), format!("t{}", i % 3)))
        .collect()
}

fn pool_edges(pairs: &[(u8, u8)]) -> Vec<GraphEdge> {
    pairs
        .iter()
        .map(|(a, b)| {
            GraphEdge::new(
                format!("n{}", *a as usize % ID_POOL),
                format!("n{}", *b as usize % ID_POOL),
                "e",
            )
        })
        .collect()
}

fn arb_pairs() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..ID_POOL as u8, 0u8..ID_POOL as u8), 0..18)
}

proptest! {
    // Invariant 10: identical input, identical output
    #[test]
    fn prop_algorithms_are_idempotent(pairs in arb_pairs()) {
        let nodes = pool_nodes();
        let edges = pool_edges(&pairs);

        prop_assert_eq!(bfs(&nodes, &edges, "n0"), bfs(&nodes, &edges, "n0"));
        prop_assert_eq!(
            topological_sort(&nodes, &edges),
            topological_sort(&nodes, &edges)
        );
        prop_assert_eq!(
            strongly_connected_components(&nodes, &edges),
            strongly_connected_components(&nodes, &edges)
        );
        prop_assert_eq!(
            connected_components(&nodes, &edges),
            connected_components(&nodes, &edges)
        );
    }

    // Invariant 3: every edge with both endpoints emitted respects both the
    // global order and the layer order
    #[test]
    fn prop_toposort_respects_every_edge(pairs in arb_pairs()) {
        let nodes = pool_nodes();
        let edges = pool_edges(&pairs);

        let sorted = topological_sort(&nodes, &edges);
        let by_id: FxHashMap<&str, (u64, u64)> = sorted
            .iter()
            .map(|t| (t.id.as_str(), (t.topo_order, t.layer)))
            .collect();

        for edge in &edges {
            if let (Some(&(u_order, u_layer)), Some(&(v_order, v_layer))) =
                (by_id.get(edge.from.as_str()), by_id.get(edge.to.as_str()))
            {
                if edge.from != edge.to {
                    prop_assert!(u_order < v_order);
                    prop_assert!(u_layer < v_layer);
                }
            }
        }
    }

    // Invariant 4: a cycle exists exactly when topological sort drops nodes
    #[test]
    fn prop_cycle_detection_agrees_with_toposort(pairs in arb_pairs()) {
        let nodes = pool_nodes();
        let edges = pool_edges(&pairs);

        let detected = cycle_detection(&nodes, &edges, false);
        let sorted = topological_sort(&nodes, &edges);

        prop_assert_eq!(detected.has_cycle, sorted.len() < ID_POOL);
    }

    // Invariant 5: the SCCs partition the node set
    #[test]
    fn prop_sccs_partition_nodes(pairs in arb_pairs()) {
        let nodes = pool_nodes();
        let edges = pool_edges(&pairs);

        let sccs = strongly_connected_components(&nodes, &edges);
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for component in &sccs {
            for id in component {
                prop_assert!(seen.insert(id.as_str()), "{} appears twice", id);
            }
        }
        prop_assert_eq!(seen.len(), ID_POOL);
    }

    // Invariant 1: BFS levels are monotonic along every traversed edge and
    // every discovery edge parents a strictly later emission
    #[test]
    fn prop_bfs_levels_monotonic(pairs in arb_pairs()) {
        let nodes = pool_nodes();
        let edges = pool_edges(&pairs);

        let tracked = tracked_bfs(&nodes, &edges, "n0", None);
        let by_id: FxHashMap<&str, (u64, u64)> = tracked
            .iter()
            .map(|t| (t.id.as_str(), (t.depth, t.visited_order)))
            .collect();

        for record in &tracked {
            if let Some(parent) = &record.parent_id {
                let &(parent_depth, parent_order) = &by_id[parent.as_str()];
                prop_assert_eq!(record.depth, parent_depth + 1);
                prop_assert!(record.visited_order > parent_order);
            }
        }

        for edge in &edges {
            if let (Some(&(u_depth, _)), Some(&(v_depth, _))) =
                (by_id.get(edge.from.as_str()), by_id.get(edge.to.as_str()))
            {
                prop_assert!(v_depth <= u_depth + 1);
            }
        }
    }

    // Invariant 6: removing a reported bridge pair splits one component
    // off; removing a non-bridge pair never does
    #[test]
    fn prop_bridges_split_components(pairs in arb_pairs()) {
        let nodes = pool_nodes();
        let edges = pool_edges(&pairs);

        let baseline = connected_components(&nodes, &edges).infos.len();
        let reported: FxHashSet<(String, String)> = bridge_detection(&nodes, &edges)
            .into_iter()
            .map(|b| ordered_pair(&b.from, &b.to))
            .collect();

        let undirected_pairs: FxHashSet<(String, String)> = edges
            .iter()
            .filter(|e| e.from != e.to)
            .map(|e| ordered_pair(&e.from, &e.to))
            .collect();

        for pair in &undirected_pairs {
            let without: Vec<GraphEdge> = edges
                .iter()
                .filter(|e| &ordered_pair(&e.from, &e.to) != pair)
                .cloned()
                .collect();
            let count = connected_components(&nodes, &without).infos.len();

            if reported.contains(pair) {
                prop_assert_eq!(count, baseline + 1);
            } else {
                prop_assert_eq!(count, baseline);
            }
        }
    }

    // Invariant 12: a type that never touches an edge endpoint is excluded
    #[test]
    fn prop_type_aggregation_excludes_untouched_types(pairs in arb_pairs()) {
        let nodes = pool_nodes();
        let edges = pool_edges(&pairs);

        let touched: FxHashSet<&str> = edges
            .iter()
            .flat_map(|e| [e.from.as_str(), e.to.as_str()])
            .map(|id| &nodes[id[1..].parse::<usize>().unwrap()])
            .map(|n| n.node_type.as_str())
            .collect();

        let result = aggregation_by_type(&nodes, &edges);
        for aggregate in &result.aggregate_nodes {
            prop_assert!(touched.contains(aggregate.node_type.as_str()));
        }
    }

    // Invariant 11: validation counts close over the inputs
    #[test]
    fn prop_validation_count_closure(
        pairs in arb_pairs(),
        extra_nodes in proptest::collection::vec(0u8..ID_POOL as u8, 0..4),
    ) {
        let mut nodes = pool_nodes();
        for i in extra_nodes {
            // Deliberate duplicates
            nodes.push(GraphNode::new(format!("n{i}"), "dup"));
        }
        let edges = pool_edges(&pairs);

        let result = validate_graph(&nodes, &edges);
        prop_assert_eq!(
            result.valid_node_count + result.duplicate_node_count,
            result.total_node_count
        );
        prop_assert!(result.orphaned_node_count <= result.valid_node_count);
        for ratio in [
            result.valid_node_ratio,
            result.valid_edge_ratio,
            result.orphaned_node_ratio,
            result.dangling_edge_ratio,
        ] {
            prop_assert!((0.0..=1.0).contains(&ratio));
        }
    }

    // Invariant 7: Dijkstra's answer is optimal against exhaustive
    // enumeration, and its cost is the sum of its own path's weights
    #[test]
    fn prop_shortest_path_optimality(
        pairs in proptest::collection::vec((0u8..ID_POOL as u8, 0u8..ID_POOL as u8, 0u8..10), 0..14),
    ) {
        let nodes = pool_nodes();

        // One weight per (from, to) pair keeps path costs well-defined
        let mut weight_of: FxHashMap<(String, String), f64> = FxHashMap::default();
        let mut edges: Vec<WeightedEdge> = Vec::new();
        for (a, b, w) in &pairs {
            let from = format!("n{}", *a as usize % ID_POOL);
            let to = format!("n{}", *b as usize % ID_POOL);
            if weight_of.contains_key(&(from.clone(), to.clone())) {
                continue;
            }
            weight_of.insert((from.clone(), to.clone()), *w as f64);
            edges.push(WeightedEdge {
                from,
                to,
                edge_type: "e".to_string(),
                weight: *w as f64,
                delay: None,
            });
        }

        let plain: Vec<GraphEdge> = edges
            .iter()
            .map(|e| GraphEdge::new(e.from.clone(), e.to.clone(), "e"))
            .collect();

        let result = shortest_path(&nodes, &edges, "n0", "n5").unwrap();
        let enumerated = all_simple_paths(&nodes, &plain, "n0", "n5");

        if result.path.is_empty() {
            prop_assert!(result.cost.is_infinite());
            prop_assert_eq!(enumerated.path_count, 0);
        } else {
            let path_cost: f64 = result
                .path
                .windows(2)
                .map(|hop| weight_of[&(hop[0].clone(), hop[1].clone())])
                .sum();
            prop_assert_eq!(result.cost, path_cost);

            let best = enumerated
                .paths
                .iter()
                .map(|p| {
                    p.windows(2)
                        .map(|hop| weight_of[&(hop[0].clone(), hop[1].clone())])
                        .sum::<f64>()
                })
                .fold(f64::INFINITY, f64::min);
            prop_assert_eq!(result.cost, best);
        }
    }

    // Invariant 8: on a forest, a bottom-up rollup equals own value plus
    // the rollups of the direct children
    #[test]
    fn prop_bottom_up_identity_on_forest(
        parents in proptest::collection::vec(proptest::option::of(0usize..ID_POOL), ID_POOL - 1),
        values in proptest::collection::vec(0u8..100, ID_POOL),
    ) {
        let nodes: Vec<ValueNode> = (0..ID_POOL)
            .map(|i| ValueNode {
                id: format!("n{i}"),
                node_type: "t".to_string(),
                value: values[i] as f64,
                weight: None,
            })
            .collect();

        // Node i (i >= 1) hangs under a strictly earlier parent, so every
        // node has at most one parent and no cycles form
        let mut edges: Vec<GraphEdge> = Vec::new();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); ID_POOL];
        for (offset, parent) in parents.iter().enumerate() {
            let child = offset + 1;
            if let Some(p) = parent {
                let parent_index = p % child;
                edges.push(GraphEdge::new(
                    format!("n{parent_index}"),
                    format!("n{child}"),
                    "e",
                ));
                children[parent_index].push(child);
            }
        }

        let rollup = aggregate_bottom_up(&nodes, &edges);
        for (i, aggregated) in rollup.iter().enumerate() {
            let expected: f64 = nodes[i].value
                + children[i]
                    .iter()
                    .map(|&c| rollup[c].aggregated_value)
                    .sum::<f64>();
            prop_assert_eq!(aggregated.aggregated_value, expected);
        }
    }
}

fn ordered_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

// Invariant 2: tracked DFS explores neighbors in reverse insertion order
#[test]
fn dfs_explores_neighbors_in_reverse_insertion_order() {
    let nodes: Vec<GraphNode> = ["root", "first", "second", "third"]
        .iter()
        .map(|id| GraphNode::new(*id, "n"))
        .collect();
    let edges = vec![
        GraphEdge::new("root", "first", "e"),
        GraphEdge::new("root", "second", "e"),
        GraphEdge::new("root", "third", "e"),
    ];

    let tracked = tracked_dfs(&nodes, &edges, "root", None);
    let ids: Vec<&str> = tracked.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["root", "third", "second", "first"]);
}

// Invariant 9: a node violates flow conservation exactly when its
// imbalance exceeds the tolerance
#[test]
fn flow_violations_follow_the_tolerance() {
    let nodes = vec![
        FlowNode {
            id: "within".to_string(),
            node_type: "n".to_string(),
            value: 0.0009,
            capacity: None,
        },
        FlowNode {
            id: "beyond".to_string(),
            node_type: "n".to_string(),
            value: 0.0011,
            capacity: None,
        },
    ];

    let result = flow_conservation(&nodes, &[]);
    assert_eq!(result.violations, vec!["beyond"]);
}
