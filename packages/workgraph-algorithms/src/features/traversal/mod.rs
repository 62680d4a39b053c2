//! Traversal kernel
//!
//! Level-order and depth-first walks, metadata-tracking variants, layered
//! topological sort, cycle detection and transitive-closure computation.
//! Every walk is iterative with an explicit stack or queue so that
//! million-node graphs cannot overflow the native execution stack.

mod bfs;
mod closure;
mod cycles;
mod dfs;
mod toposort;
mod tracked;

pub use bfs::bfs;
pub use closure::{ancestor_descendant, NodeClosure};
pub use cycles::{cycle_detection, CycleDetectionResult};
pub use dfs::dfs;
pub use toposort::{topological_sort, TopoNode};
pub use tracked::{tracked_bfs, tracked_dfs, TrackedNode};
