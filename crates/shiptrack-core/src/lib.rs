//! Shiptrack Core - Shipment record parsing and query engine
//!
//! This crate turns a comma-delimited shipment dataset into typed records
//! and answers lookup, sort and parent-chain queries over the resulting
//! read-only collection.

pub mod clock;
pub mod collate;
pub mod compute;
pub mod error;
pub mod ledger;
pub mod limits;
pub mod lineage;
pub mod parser;
pub mod query;
pub mod record;
pub mod sort;

pub use clock::{Clock, FixedClock, SystemClock};
pub use compute::{add_computed_fields, days_ago_shipped, full_name};
pub use error::{Error, KeyKind, Result};
pub use ledger::ShipmentLedger;
pub use parser::{parse, SAMPLE_DATA};
pub use query::SortDirection;
pub use record::{ComputedShipmentRecord, ShipmentField, ShipmentRecord, SENTINEL};
