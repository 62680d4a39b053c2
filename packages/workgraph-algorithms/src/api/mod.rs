//! Host integration API
//!
//! Language-agnostic procedure registry for embedding the kernel in a data
//! processing host. All payloads follow the msgpack-first principle:
//! msgpack bytes in, msgpack bytes out. msgpack round-trips IEEE-754
//! infinities, which the unreachable-cost outputs rely on. No
//! host-language types leak into this layer.

mod registry;

pub use registry::{dispatch, PROCEDURES};
