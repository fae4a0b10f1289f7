//! Error types for Shiptrack Core

use thiserror::Error;

/// Result type alias using Shiptrack's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Which record field a failed lookup was keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    ShipmentNumber,
    OrderNumber,
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShipmentNumber => write!(f, "shipment number"),
            Self::OrderNumber => write!(f, "order number"),
        }
    }
}

/// Shiptrack error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("No shipments with that {kind} exist: {key}")]
    NotFound { kind: KeyKind, key: String },

    #[error("Invalid shipped timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Parent chain starting at {start} loops back to {repeated}")]
    ParentCycle { start: String, repeated: String },

    #[error("Parent chain starting at {start} exceeds {max} links")]
    ParentChainTooDeep { start: String, max: usize },

    #[error("Unknown shipment field: {0}")]
    UnknownField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn shipment_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: KeyKind::ShipmentNumber,
            key: key.into(),
        }
    }

    pub fn order_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: KeyKind::OrderNumber,
            key: key.into(),
        }
    }

    /// Check whether this is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
