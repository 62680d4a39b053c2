//! Aggregation kernel
//!
//! Rollups over the dependency interpretation of the graph: bottom-up and
//! top-down value accumulation, weighted and attribute-mapped variants, a
//! temporal rollup over node durations, and type-level aggregation.
//!
//! Every rollup is pure over an acyclic interpretation; behavior on cyclic
//! inputs is undefined and callers are expected to validate with cycle
//! detection first. Ids absent from the node list are skipped wherever a
//! record lookup is required.

mod bottom_up;
mod by_type;
mod grouped;
mod top_down;
mod weighted;

use rustc_hash::{FxHashMap, FxHashSet};

pub use bottom_up::{aggregate_bottom_up, aggregate_temporal, AggregatedValue};
pub use by_type::{
    aggregation_by_type, TypeAggregationResult, TypeNodeAggregate, TypeTransition,
};
pub use grouped::{aggregate_grouped, GroupAggregate};
pub use top_down::aggregate_top_down;
pub use weighted::{aggregate_weighted, WeightedAggregate};

/// Distinct descendants of `start` over the forward adjacency, DFS
/// discovery order, restricted to known ids; `start` itself is excluded
fn known_descendants(
    start: &str,
    forward: &FxHashMap<String, Vec<String>>,
    known: &FxHashSet<&str>,
) -> Vec<String> {
    let mut visited: FxHashSet<String> = FxHashSet::default();
    visited.insert(start.to_string());

    let mut descendants: Vec<String> = Vec::new();
    let mut stack: Vec<String> = Vec::new();

    if let Some(neighbors) = forward.get(start) {
        for neighbor in neighbors {
            if known.contains(neighbor.as_str()) {
                stack.push(neighbor.clone());
            }
        }
    }

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        descendants.push(current.clone());

        if let Some(neighbors) = forward.get(&current) {
            for neighbor in neighbors {
                if known.contains(neighbor.as_str()) && !visited.contains(neighbor) {
                    stack.push(neighbor.clone());
                }
            }
        }
    }

    descendants
}
