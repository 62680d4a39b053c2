/*
 * Procedure Registry
 *
 * Every algorithm is registered under a unique name with a concrete input
 * record; the host invokes by name with a msgpack payload matching that
 * record and receives the procedure's result, msgpack-encoded with field
 * names preserved.
 *
 * An unknown name, an undecodable payload, or a rejected argument all
 * surface as typed errors; no partial output is ever produced.
 */

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, Result};
use crate::features::aggregation::{
    aggregate_bottom_up, aggregate_grouped, aggregate_temporal, aggregate_top_down,
    aggregate_weighted, aggregation_by_type,
};
use crate::features::analysis::{
    path_statistics, type_statistics, validate_graph, workflow_completeness, WorkflowPattern,
};
use crate::features::connectivity::{
    articulation_points, bridge_analysis, bridge_detection, connected_components,
    dynamic_reachability, strong_subgraph_extraction, strongly_connected_components,
};
use crate::features::flow::{flow_conservation, volume_flow};
use crate::features::paths::{
    all_simple_paths, critical_path, shortest_path, subgraph_from_sources,
    subgraph_from_targets,
};
use crate::features::traversal::{
    ancestor_descendant, bfs, cycle_detection, dfs, topological_sort, tracked_bfs, tracked_dfs,
};
use crate::shared::models::{
    ActiveEdge, FlowEdge, FlowNode, GraphEdge, GraphNode, GroupValueNode, TimedNode, ValueNode,
    VolumeEdge, WeightedEdge,
};

/// Registered procedure names, one per algorithm entry point
pub const PROCEDURES: &[&str] = &[
    "graph_bfs",
    "graph_dfs",
    "graph_tracked_bfs",
    "graph_tracked_dfs",
    "graph_topological_sort",
    "graph_cycle_detection",
    "graph_ancestor_descendant",
    "graph_connected_components",
    "graph_strongly_connected_components",
    "graph_bridge_detection",
    "graph_bridge_analysis",
    "graph_articulation_points",
    "graph_dynamic_reachability",
    "graph_strong_subgraph_extraction",
    "graph_all_paths",
    "graph_shortest_path",
    "graph_critical_path",
    "graph_subgraph_from_sources",
    "graph_subgraph_from_targets",
    "graph_aggregate_bottom_up",
    "graph_aggregate_top_down",
    "graph_aggregate_weighted",
    "graph_aggregate_grouped",
    "graph_aggregate_temporal",
    "graph_aggregation_by_type",
    "graph_flow_conservation",
    "graph_volume_flow",
    "graph_validation",
    "graph_type_statistics",
    "graph_path_statistics",
    "graph_workflow_completeness",
];

// ═══════════════════════════════════════════════════════════════════════════
// Input Records
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct TraversalInput {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    source_node_id: String,
}

#[derive(Debug, Deserialize)]
struct TrackedTraversalInput {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    source_node_id: String,
    #[serde(default)]
    limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct GraphInput {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

#[derive(Debug, Deserialize)]
struct CycleDetectionInput {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    #[serde(default)]
    find_all_cycles: bool,
}

#[derive(Debug, Deserialize)]
struct ActiveGraphInput {
    nodes: Vec<GraphNode>,
    edges: Vec<ActiveEdge>,
}

#[derive(Debug, Deserialize)]
struct StrongSubgraphInput {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    #[serde(default)]
    required_node_type_sets: Vec<Vec<String>>,
    #[serde(default)]
    required_edge_type_sets: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct PathQueryInput {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    source_node_id: String,
    target_node_id: String,
}

#[derive(Debug, Deserialize)]
struct WeightedPathInput {
    nodes: Vec<GraphNode>,
    edges: Vec<WeightedEdge>,
    source_node_id: String,
    target_node_id: String,
}

#[derive(Debug, Deserialize)]
struct TimedGraphInput {
    nodes: Vec<TimedNode>,
    edges: Vec<GraphEdge>,
}

#[derive(Debug, Deserialize)]
struct TypedSubgraphInput {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    #[serde(default)]
    source_node_types: Vec<String>,
    #[serde(default)]
    target_node_types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ValueGraphInput {
    nodes: Vec<ValueNode>,
    edges: Vec<GraphEdge>,
}

#[derive(Debug, Deserialize)]
struct GroupValueGraphInput {
    nodes: Vec<GroupValueNode>,
    edges: Vec<GraphEdge>,
}

#[derive(Debug, Deserialize)]
struct FlowGraphInput {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
}

#[derive(Debug, Deserialize)]
struct VolumeGraphInput {
    nodes: Vec<GraphNode>,
    edges: Vec<VolumeEdge>,
}

#[derive(Debug, Deserialize)]
struct CompletenessInput {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    workflow_patterns: Vec<WorkflowPattern>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Dispatch
// ═══════════════════════════════════════════════════════════════════════════

/// Invoke a registered procedure with a msgpack payload
pub fn dispatch(procedure: &str, payload: &[u8]) -> Result<Vec<u8>> {
    match procedure {
        "graph_bfs" => run(payload, |input: TraversalInput| {
            Ok(bfs(&input.nodes, &input.edges, &input.source_node_id))
        }),
        "graph_dfs" => run(payload, |input: TraversalInput| {
            Ok(dfs(&input.nodes, &input.edges, &input.source_node_id))
        }),
        "graph_tracked_bfs" => run(payload, |input: TrackedTraversalInput| {
            Ok(tracked_bfs(
                &input.nodes,
                &input.edges,
                &input.source_node_id,
                input.limit,
            ))
        }),
        "graph_tracked_dfs" => run(payload, |input: TrackedTraversalInput| {
            Ok(tracked_dfs(
                &input.nodes,
                &input.edges,
                &input.source_node_id,
                input.limit,
            ))
        }),
        "graph_topological_sort" => run(payload, |input: GraphInput| {
            Ok(topological_sort(&input.nodes, &input.edges))
        }),
        "graph_cycle_detection" => run(payload, |input: CycleDetectionInput| {
            Ok(cycle_detection(
                &input.nodes,
                &input.edges,
                input.find_all_cycles,
            ))
        }),
        "graph_ancestor_descendant" => run(payload, |input: GraphInput| {
            Ok(ancestor_descendant(&input.nodes, &input.edges))
        }),
        "graph_connected_components" => run(payload, |input: GraphInput| {
            Ok(connected_components(&input.nodes, &input.edges))
        }),
        "graph_strongly_connected_components" => run(payload, |input: GraphInput| {
            Ok(strongly_connected_components(&input.nodes, &input.edges))
        }),
        "graph_bridge_detection" => run(payload, |input: GraphInput| {
            Ok(bridge_detection(&input.nodes, &input.edges))
        }),
        "graph_bridge_analysis" => run(payload, |input: GraphInput| {
            Ok(bridge_analysis(&input.nodes, &input.edges))
        }),
        "graph_articulation_points" => run(payload, |input: GraphInput| {
            Ok(articulation_points(&input.nodes, &input.edges))
        }),
        "graph_dynamic_reachability" => run(payload, |input: ActiveGraphInput| {
            Ok(dynamic_reachability(&input.nodes, &input.edges))
        }),
        "graph_strong_subgraph_extraction" => run(payload, |input: StrongSubgraphInput| {
            Ok(strong_subgraph_extraction(
                &input.nodes,
                &input.edges,
                &input.required_node_type_sets,
                &input.required_edge_type_sets,
            ))
        }),
        "graph_all_paths" => run(payload, |input: PathQueryInput| {
            Ok(all_simple_paths(
                &input.nodes,
                &input.edges,
                &input.source_node_id,
                &input.target_node_id,
            ))
        }),
        "graph_shortest_path" => run(payload, |input: WeightedPathInput| {
            shortest_path(
                &input.nodes,
                &input.edges,
                &input.source_node_id,
                &input.target_node_id,
            )
        }),
        "graph_critical_path" => run(payload, |input: TimedGraphInput| {
            Ok(critical_path(&input.nodes, &input.edges))
        }),
        "graph_subgraph_from_sources" => run(payload, |input: TypedSubgraphInput| {
            subgraph_from_sources(
                &input.nodes,
                &input.edges,
                &input.source_node_types,
                &input.target_node_types,
            )
        }),
        "graph_subgraph_from_targets" => run(payload, |input: TypedSubgraphInput| {
            subgraph_from_targets(
                &input.nodes,
                &input.edges,
                &input.source_node_types,
                &input.target_node_types,
            )
        }),
        "graph_aggregate_bottom_up" => run(payload, |input: ValueGraphInput| {
            Ok(aggregate_bottom_up(&input.nodes, &input.edges))
        }),
        "graph_aggregate_top_down" => run(payload, |input: ValueGraphInput| {
            Ok(aggregate_top_down(&input.nodes, &input.edges))
        }),
        "graph_aggregate_weighted" => run(payload, |input: ValueGraphInput| {
            Ok(aggregate_weighted(&input.nodes, &input.edges))
        }),
        "graph_aggregate_grouped" => run(payload, |input: GroupValueGraphInput| {
            Ok(aggregate_grouped(&input.nodes, &input.edges))
        }),
        "graph_aggregate_temporal" => run(payload, |input: TimedGraphInput| {
            Ok(aggregate_temporal(&input.nodes, &input.edges))
        }),
        "graph_aggregation_by_type" => run(payload, |input: GraphInput| {
            Ok(aggregation_by_type(&input.nodes, &input.edges))
        }),
        "graph_flow_conservation" => run(payload, |input: FlowGraphInput| {
            Ok(flow_conservation(&input.nodes, &input.edges))
        }),
        "graph_volume_flow" => run(payload, |input: VolumeGraphInput| {
            Ok(volume_flow(&input.nodes, &input.edges))
        }),
        "graph_validation" => run(payload, |input: GraphInput| {
            Ok(validate_graph(&input.nodes, &input.edges))
        }),
        "graph_type_statistics" => run(payload, |input: GraphInput| {
            Ok(type_statistics(&input.nodes, &input.edges))
        }),
        "graph_path_statistics" => run(payload, |input: TraversalInput| {
            Ok(path_statistics(
                &input.nodes,
                &input.edges,
                &input.source_node_id,
            ))
        }),
        "graph_workflow_completeness" => run(payload, |input: CompletenessInput| {
            Ok(workflow_completeness(
                &input.nodes,
                &input.edges,
                &input.workflow_patterns,
            ))
        }),
        other => Err(GraphError::UnknownProcedure(other.to_string())),
    }
}

fn run<I, O, F>(payload: &[u8], procedure: F) -> Result<Vec<u8>>
where
    I: DeserializeOwned,
    O: Serialize,
    F: FnOnce(I) -> Result<O>,
{
    let input: I = rmp_serde::from_slice(payload)
        .map_err(|e| GraphError::Codec(format!("failed to decode payload: {e}")))?;
    let output = procedure(input)?;
    rmp_serde::to_vec_named(&output)
        .map_err(|e| GraphError::Codec(format!("failed to encode result: {e}")))
}
