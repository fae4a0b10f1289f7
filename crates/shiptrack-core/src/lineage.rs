//! Parent-chain resolution

use crate::error::{Error, Result};
use crate::ledger::ShipmentLedger;
use crate::limits::MAX_PARENT_CHAIN_DEPTH;
use crate::record::ShipmentRecord;
use std::collections::HashSet;

impl ShipmentLedger {
    /// Walk parent links from `number` up to the chain root.
    ///
    /// The first element is the queried shipment and the last is the root.
    /// A missing parent fails with a not-found error for that parent's
    /// number; a repeated number or an over-long chain is reported instead
    /// of looping.
    pub fn lineage(&self, number: &str) -> Result<Vec<&ShipmentRecord>> {
        let mut current = self.find_by_number(number)?;
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(current.number.as_str());
        let mut chain = vec![current];

        while !current.is_root() {
            if chain.len() > MAX_PARENT_CHAIN_DEPTH {
                return Err(Error::ParentChainTooDeep {
                    start: number.to_string(),
                    max: MAX_PARENT_CHAIN_DEPTH,
                });
            }

            let parent = current.parent_shipment.as_str();
            if !visited.insert(parent) {
                return Err(Error::ParentCycle {
                    start: number.to_string(),
                    repeated: parent.to_string(),
                });
            }

            current = self.find_by_number(parent)?;
            chain.push(current);
        }

        tracing::debug!("Shipment {} has {} links to its root", number, chain.len() - 1);
        Ok(chain)
    }

    /// The top-most ancestor of `number`, or that shipment itself if it has
    /// no parent. Derived fields are not attached.
    pub fn resolve_root(&self, number: &str) -> Result<&ShipmentRecord> {
        let chain = self.lineage(number)?;
        chain
            .last()
            .copied()
            .ok_or_else(|| Error::shipment_not_found(number))
    }

    /// Shipments whose parent is `number`, in base order
    pub fn children_of(&self, number: &str) -> Result<Vec<&ShipmentRecord>> {
        let parent = self.find_by_number(number)?;
        Ok(self
            .records()
            .iter()
            .filter(|record| record.parent_shipment == parent.number)
            .collect())
    }
}
