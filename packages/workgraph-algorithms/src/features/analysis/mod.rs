//! Analysis kernel
//!
//! Structural health checks over raw inputs: duplicate/orphan/dangling
//! accounting, type inventories, path statistics from a chosen source and
//! workflow completeness against start/end type patterns.

mod completeness;
mod path_stats;
mod type_stats;
mod validation;

pub use completeness::{workflow_completeness, PatternCompleteness, WorkflowPattern};
pub use path_stats::{path_statistics, PathStatisticsResult};
pub use type_stats::{type_statistics, TypeStatisticsResult, TypeTransitionBreakdown};
pub use validation::{validate_graph, EdgePatternIssue, NodeTypeIssue, ValidationResult};
