//! Full-pipeline integration flows.

pub mod pipeline;
