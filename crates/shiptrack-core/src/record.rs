//! Shipment record types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Marker stored for absent field values and rejected as a query key
pub const SENTINEL: &str = "N/A";

/// A parsed shipment (immutable once parsed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// Unique shipment identifier
    #[serde(rename = "Number")]
    pub number: String,

    /// Order this shipment belongs to, or the sentinel
    #[serde(rename = "Order Number")]
    pub order_number: String,

    /// Shipped timestamp, e.g. `2018-12-11 06:08:14 -0000`
    #[serde(rename = "Shipped")]
    pub shipped: String,

    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Last Name")]
    pub last_name: String,

    /// Preceding shipment in the chain, or the sentinel for a chain root
    #[serde(rename = "Parent Shipment")]
    pub parent_shipment: String,
}

impl ShipmentRecord {
    /// Build a record from its six schema fields in order
    pub fn new(
        number: impl Into<String>,
        order_number: impl Into<String>,
        shipped: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        parent_shipment: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            order_number: order_number.into(),
            shipped: shipped.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            parent_shipment: parent_shipment.into(),
        }
    }

    /// True when this shipment has no parent
    pub fn is_root(&self) -> bool {
        self.parent_shipment == SENTINEL
    }

    /// True when this shipment carries its own order number
    pub fn has_order(&self) -> bool {
        self.order_number != SENTINEL
    }

    /// Stored value of a field; `None` for derived fields
    pub fn get(&self, field: ShipmentField) -> Option<&str> {
        match field {
            ShipmentField::Number => Some(&self.number),
            ShipmentField::OrderNumber => Some(&self.order_number),
            ShipmentField::Shipped => Some(&self.shipped),
            ShipmentField::FirstName => Some(&self.first_name),
            ShipmentField::LastName => Some(&self.last_name),
            ShipmentField::ParentShipment => Some(&self.parent_shipment),
            ShipmentField::DaysAgoShipped | ShipmentField::FullName => None,
        }
    }
}

/// A shipment with its derived fields attached
///
/// Built fresh for every query; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedShipmentRecord {
    #[serde(flatten)]
    pub record: ShipmentRecord,

    /// Whole days between shipping and now, as text
    #[serde(rename = "Days Ago Shipped")]
    pub days_ago_shipped: String,

    /// First name, a space, last name
    #[serde(rename = "Full Name")]
    pub full_name: String,
}

impl ComputedShipmentRecord {
    /// Value of any field, stored or derived
    pub fn get(&self, field: ShipmentField) -> &str {
        match field {
            ShipmentField::DaysAgoShipped => &self.days_ago_shipped,
            ShipmentField::FullName => &self.full_name,
            other => self.record.get(other).unwrap_or(SENTINEL),
        }
    }

    /// Drop the derived fields
    pub fn into_record(self) -> ShipmentRecord {
        self.record
    }
}

impl std::ops::Deref for ComputedShipmentRecord {
    type Target = ShipmentRecord;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

/// Every attribute of a computed shipment, in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipmentField {
    #[serde(rename = "Number")]
    Number,
    #[serde(rename = "Order Number")]
    OrderNumber,
    #[serde(rename = "Shipped")]
    Shipped,
    #[serde(rename = "First Name")]
    FirstName,
    #[serde(rename = "Last Name")]
    LastName,
    #[serde(rename = "Parent Shipment")]
    ParentShipment,
    #[serde(rename = "Days Ago Shipped")]
    DaysAgoShipped,
    #[serde(rename = "Full Name")]
    FullName,
}

impl ShipmentField {
    /// Positional schema of a raw input line
    pub const SCHEMA: [ShipmentField; 6] = [
        Self::Number,
        Self::OrderNumber,
        Self::Shipped,
        Self::FirstName,
        Self::LastName,
        Self::ParentShipment,
    ];

    pub const ALL: [ShipmentField; 8] = [
        Self::Number,
        Self::OrderNumber,
        Self::Shipped,
        Self::FirstName,
        Self::LastName,
        Self::ParentShipment,
        Self::DaysAgoShipped,
        Self::FullName,
    ];

    /// Display name, as used for output keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::OrderNumber => "Order Number",
            Self::Shipped => "Shipped",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::ParentShipment => "Parent Shipment",
            Self::DaysAgoShipped => "Days Ago Shipped",
            Self::FullName => "Full Name",
        }
    }

    /// True for fields computed at query time
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::DaysAgoShipped | Self::FullName)
    }
}

impl std::fmt::Display for ShipmentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipmentField {
    type Err = Error;

    /// Accepts "Order Number", "order_number", "order-number" and "ordernumber"
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_field_name(s);
        Self::ALL
            .iter()
            .copied()
            .find(|field| normalize_field_name(field.as_str()) == wanted)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

fn normalize_field_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShipmentRecord {
        ShipmentRecord::new(
            "SH907346",
            SENTINEL,
            "2018-12-12 21:12:28 -0000",
            "Rebecca",
            "Jones",
            "SH867263",
        )
    }

    #[test]
    fn test_record_predicates() {
        let record = sample();
        assert!(!record.is_root());
        assert!(!record.has_order());
        assert_eq!(record.get(ShipmentField::LastName), Some("Jones"));
        assert_eq!(record.get(ShipmentField::FullName), None);
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!(
            "Order Number".parse::<ShipmentField>().unwrap(),
            ShipmentField::OrderNumber
        );
        assert_eq!(
            "days_ago_shipped".parse::<ShipmentField>().unwrap(),
            ShipmentField::DaysAgoShipped
        );
        assert_eq!(
            "parent-shipment".parse::<ShipmentField>().unwrap(),
            ShipmentField::ParentShipment
        );
        assert_eq!("NUMBER".parse::<ShipmentField>().unwrap(), ShipmentField::Number);
        assert!(matches!(
            "weight".parse::<ShipmentField>(),
            Err(Error::UnknownField(_))
        ));
    }

    #[test]
    fn test_field_display_roundtrips() {
        for field in ShipmentField::ALL {
            assert_eq!(field.to_string().parse::<ShipmentField>().unwrap(), field);
        }
    }

    #[test]
    fn test_serialized_keys() {
        let computed = ComputedShipmentRecord {
            record: sample(),
            days_ago_shipped: "3".to_string(),
            full_name: "Rebecca Jones".to_string(),
        };
        let json = serde_json::to_value(&computed).unwrap();
        assert_eq!(json["Number"], "SH907346");
        assert_eq!(json["Order Number"], "N/A");
        assert_eq!(json["Parent Shipment"], "SH867263");
        assert_eq!(json["Days Ago Shipped"], "3");
        assert_eq!(json["Full Name"], "Rebecca Jones");
        assert_eq!(computed.get(ShipmentField::FirstName), "Rebecca");
    }
}
