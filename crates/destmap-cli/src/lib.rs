//! CLI library components for the Destination Mapping Tool.

pub mod error;
pub mod logging;
pub mod pipeline;
