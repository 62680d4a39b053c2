/*
 * Workgraph Algorithms - Directed Graph Analysis Kernel
 *
 * Feature-First Architecture:
 * - shared/   : Common models (nodes, edges, adjacency, progress)
 * - features/ : Vertical slices (traversal, connectivity, paths,
 *               aggregation, flow, analysis)
 * - api/      : Host bindings (named procedures, msgpack payloads)
 *
 * Contract:
 * - Inputs are borrowed read-only; every result is freshly owned
 * - Adjacency indices are rebuilt per invocation, never cached
 * - All walks are iterative with explicit stacks; no native recursion,
 *   so million-node graphs cannot overflow the execution stack
 * - Deterministic for a fixed input ordering; no shared mutable state,
 *   so invocations may run on parallel threads freely
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (vertical algorithm slices)
pub mod features;

/// Host integration (procedure registry, msgpack dispatch)
pub mod api;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{GraphError, Result};
pub use shared::models::{
    ActiveEdge, FlowEdge, FlowNode, GraphEdge, GraphNode, GroupValueNode, TimedNode, ValueNode,
    VolumeEdge, WeightedEdge,
};

pub use features::aggregation::{
    aggregate_bottom_up, aggregate_grouped, aggregate_temporal, aggregate_top_down,
    aggregate_weighted, aggregation_by_type,
};
pub use features::analysis::{
    path_statistics, type_statistics, validate_graph, workflow_completeness,
};
pub use features::connectivity::{
    articulation_points, bridge_analysis, bridge_detection, connected_components,
    dynamic_reachability, strong_subgraph_extraction, strongly_connected_components,
};
pub use features::flow::{flow_conservation, volume_flow};
pub use features::paths::{
    all_simple_paths, critical_path, shortest_path, subgraph_from_sources,
    subgraph_from_targets,
};
pub use features::traversal::{
    ancestor_descendant, bfs, cycle_detection, dfs, topological_sort, tracked_bfs, tracked_dfs,
};
