//! CLI command implementations

pub mod completions;
pub mod config;
pub mod shipment;
pub mod sort;
