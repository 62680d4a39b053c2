//! Node records
//!
//! The base record is `GraphNode`; the extended variants add the fields a
//! specific kernel consumes (values and weights for rollups, initial amounts
//! and capacities for flow balance, start/end timestamps for timed analyses).
//!
//! Duplicate ids are permitted in inputs; algorithms that require uniqueness
//! treat the first occurrence as canonical.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base node record: opaque id plus a free-form type label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: String,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
        }
    }
}

/// Node carrying a scalar value and an optional weight
///
/// A missing weight defaults to 1.0 in every weighted computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueNode {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: String,

    pub value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Node carrying a named-attribute value mapping instead of a scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupValueNode {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: String,

    /// Attribute name → value; missing attributes contribute 0 in rollups
    pub values: HashMap<String, f64>,
}

/// Node participating in flow-conservation analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: String,

    /// Initial amount held at this node
    pub value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
}

/// Node with a processing window; `end_time >= start_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedNode {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: String,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,
}

impl TimedNode {
    /// Duration of this node's window in whole minutes
    pub fn duration_minutes(&self) -> f64 {
        (self.end_time - self.start_time).num_minutes() as f64
    }
}
