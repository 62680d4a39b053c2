//! Flow kernel
//!
//! Conservation checking with transmission losses and volume balance
//! accounting over measured edges.

mod conservation;
mod volume;

pub use conservation::{flow_conservation, FlowConservationResult};
pub use volume::{volume_flow, NodeVolumeFlow, VolumeFlowResult};
