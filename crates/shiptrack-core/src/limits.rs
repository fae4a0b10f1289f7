//! Bounds applied while walking parent chains

/// Maximum number of parent links followed from a single shipment (1024)
pub const MAX_PARENT_CHAIN_DEPTH: usize = 1024;
