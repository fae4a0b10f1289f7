//! Read-only shipment collection and its lookup operations

use crate::clock::{Clock, SystemClock};
use crate::compute::add_computed_fields;
use crate::error::{Error, Result};
use crate::parser::parse;
use crate::record::{ComputedShipmentRecord, ShipmentRecord, SENTINEL};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;

/// The parsed shipment collection.
///
/// Records are fixed at construction and never mutated, so a ledger can be
/// shared freely between readers. Derived fields are recomputed on every
/// call using the ledger's clock.
#[derive(Clone)]
pub struct ShipmentLedger {
    records: Arc<[ShipmentRecord]>,
    clock: Arc<dyn Clock>,
}

impl ShipmentLedger {
    pub fn new(records: Vec<ShipmentRecord>) -> Self {
        Self {
            records: records.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Parse raw comma-delimited text into a ledger
    pub fn parse(raw: &str) -> Self {
        Self::new(parse(raw))
    }

    /// Read and parse a dataset file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading shipments from {:?}", path);
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::parse(&raw))
    }

    /// Replace the clock used for "days ago shipped"
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current instant according to the ledger's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Every record with derived fields, in base order
    pub fn computed(&self) -> Vec<ComputedShipmentRecord> {
        let now = self.now();
        self.records
            .iter()
            .map(|record| add_computed_fields(record, now))
            .collect()
    }

    /// Find a shipment by its number.
    ///
    /// The sentinel is never a valid key, even if a record stores it.
    pub fn find_by_number(&self, number: &str) -> Result<&ShipmentRecord> {
        tracing::debug!("Looking up shipment {}", number);
        if number == SENTINEL {
            return Err(Error::shipment_not_found(number));
        }
        self.records
            .iter()
            .find(|record| record.number == number)
            .ok_or_else(|| Error::shipment_not_found(number))
    }

    /// Find a shipment by its number and attach derived fields
    pub fn find_computed_by_number(&self, number: &str) -> Result<ComputedShipmentRecord> {
        let record = self.find_by_number(number)?;
        Ok(add_computed_fields(record, self.now()))
    }

    /// All shipments whose own order number matches, with derived fields.
    ///
    /// Child shipments that only reference a parent are not included.
    pub fn find_all_computed_by_order_number(
        &self,
        order_number: &str,
    ) -> Result<Vec<ComputedShipmentRecord>> {
        tracing::debug!("Looking up shipments for order {}", order_number);
        if order_number == SENTINEL {
            return Err(Error::order_not_found(order_number));
        }

        let now = self.now();
        let shipments: Vec<ComputedShipmentRecord> = self
            .records
            .iter()
            .filter(|record| record.order_number == order_number)
            .map(|record| add_computed_fields(record, now))
            .collect();

        if shipments.is_empty() {
            return Err(Error::order_not_found(order_number));
        }
        Ok(shipments)
    }
}

impl Default for ShipmentLedger {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl std::fmt::Debug for ShipmentLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShipmentLedger")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
