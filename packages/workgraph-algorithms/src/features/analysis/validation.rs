/*
 * Graph Validation
 *
 * Classifies raw inputs without mutating them.
 *
 * Nodes: the first occurrence of an id is canonical; later occurrences are
 * duplicates. A canonical node that appears in no edge endpoint (of any
 * edge, dangling included) is orphaned.
 *
 * Edges: each instance is classified exactly once:
 * - dangling:  at least one endpoint id absent from the canonical nodes
 * - duplicate: a (from, to) pair already counted as valid
 * - valid:     first instance of a (from, to) pair with both endpoints
 * so total = valid + duplicate + dangling always holds.
 *
 * Per-type and per-pattern breakdowns use the safe-divide contract: a zero
 * denominator yields 0.0, never an error. Dangling endpoints appear in
 * patterns under the type "unknown".
 */

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::safe_divide;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTypeIssue {
    #[serde(rename = "type")]
    pub node_type: String,
    pub orphaned_count: u64,
    pub total_count: u64,
    pub orphaned_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgePatternIssue {
    pub from_type: String,
    pub to_type: String,
    pub dangling_count: u64,
    pub valid_count: u64,
    pub failure_rate_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub total_node_count: u64,
    pub total_edge_count: u64,
    pub valid_node_count: u64,
    pub valid_edge_count: u64,
    pub orphaned_node_count: u64,
    pub dangling_edge_count: u64,
    pub duplicate_node_count: u64,
    pub duplicate_edge_count: u64,
    pub valid_node_ratio: f64,
    pub valid_edge_ratio: f64,
    pub orphaned_node_ratio: f64,
    pub dangling_edge_ratio: f64,
    pub problematic_node_types: Vec<NodeTypeIssue>,
    pub problematic_edge_patterns: Vec<EdgePatternIssue>,
}

/// Validate the raw node and edge lists
pub fn validate_graph(nodes: &[GraphNode], edges: &[GraphEdge]) -> ValidationResult {
    // First occurrence of a duplicated id is canonical
    let mut canonical: FxHashMap<&str, &str> = FxHashMap::default();
    let mut duplicate_node_count: u64 = 0;
    for node in nodes {
        if canonical.contains_key(node.id.as_str()) {
            duplicate_node_count += 1;
        } else {
            canonical.insert(node.id.as_str(), node.node_type.as_str());
        }
    }

    let mut endpoint_ids: FxHashSet<&str> = FxHashSet::default();
    let mut seen_pairs: FxHashSet<(&str, &str)> = FxHashSet::default();
    let mut valid_edge_count: u64 = 0;
    let mut duplicate_edge_count: u64 = 0;
    let mut dangling_edge_count: u64 = 0;
    let mut patterns: FxHashMap<(String, String), (u64, u64)> = FxHashMap::default();

    for edge in edges {
        endpoint_ids.insert(edge.from.as_str());
        endpoint_ids.insert(edge.to.as_str());

        let from_type = canonical.get(edge.from.as_str()).copied();
        let to_type = canonical.get(edge.to.as_str()).copied();
        let pattern_key = (
            from_type.unwrap_or("unknown").to_string(),
            to_type.unwrap_or("unknown").to_string(),
        );
        let pattern = patterns.entry(pattern_key).or_insert((0, 0));

        if from_type.is_none() || to_type.is_none() {
            dangling_edge_count += 1;
            pattern.0 += 1;
        } else {
            pattern.1 += 1;
            if seen_pairs.insert((edge.from.as_str(), edge.to.as_str())) {
                valid_edge_count += 1;
            } else {
                duplicate_edge_count += 1;
            }
        }
    }

    let mut orphaned_by_type: FxHashMap<&str, u64> = FxHashMap::default();
    let mut total_by_type: FxHashMap<&str, u64> = FxHashMap::default();
    let mut orphaned_node_count: u64 = 0;
    for (&id, &node_type) in &canonical {
        *total_by_type.entry(node_type).or_insert(0) += 1;
        if !endpoint_ids.contains(id) {
            orphaned_node_count += 1;
            *orphaned_by_type.entry(node_type).or_insert(0) += 1;
        }
    }

    let mut problematic_node_types: Vec<NodeTypeIssue> = total_by_type
        .iter()
        .map(|(&node_type, &total)| {
            let orphaned = orphaned_by_type.get(node_type).copied().unwrap_or(0);
            NodeTypeIssue {
                node_type: node_type.to_string(),
                orphaned_count: orphaned,
                total_count: total,
                orphaned_percentage: safe_divide(orphaned as f64, total as f64) * 100.0,
            }
        })
        .collect();
    problematic_node_types.sort_by(|a, b| a.node_type.cmp(&b.node_type));

    let mut problematic_edge_patterns: Vec<EdgePatternIssue> = patterns
        .iter()
        .map(|((from_type, to_type), &(dangling, valid))| EdgePatternIssue {
            from_type: from_type.clone(),
            to_type: to_type.clone(),
            dangling_count: dangling,
            valid_count: valid,
            failure_rate_percentage: safe_divide(
                dangling as f64,
                (dangling + valid) as f64,
            ) * 100.0,
        })
        .collect();
    problematic_edge_patterns.sort_by(|a, b| {
        a.from_type
            .cmp(&b.from_type)
            .then_with(|| a.to_type.cmp(&b.to_type))
    });

    let total_node_count = nodes.len() as u64;
    let total_edge_count = edges.len() as u64;
    let valid_node_count = canonical.len() as u64;

    ValidationResult {
        total_node_count,
        total_edge_count,
        valid_node_count,
        valid_edge_count,
        orphaned_node_count,
        dangling_edge_count,
        duplicate_node_count,
        duplicate_edge_count,
        valid_node_ratio: safe_divide(valid_node_count as f64, total_node_count as f64),
        valid_edge_ratio: safe_divide(valid_edge_count as f64, total_edge_count as f64),
        orphaned_node_ratio: safe_divide(orphaned_node_count as f64, valid_node_count as f64),
        dangling_edge_ratio: safe_divide(dangling_edge_count as f64, total_edge_count as f64),
        problematic_node_types,
        problematic_edge_patterns,
    }
}
