//! Derived fields: full name and days since shipping

use crate::error::{Error, Result};
use crate::record::{ComputedShipmentRecord, ShipmentRecord, SENTINEL};
use chrono::{DateTime, Utc};

/// Format of the `shipped` column, e.g. `2018-12-11 06:08:14 -0000`
pub const SHIPPED_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// First name, a single space, last name. Sentinels are kept as-is.
pub fn full_name(record: &ShipmentRecord) -> String {
    format!("{} {}", record.first_name, record.last_name)
}

/// Whole calendar days between `shipped` and `now`.
///
/// Both instants are reduced to their UTC calendar date before
/// differencing, so time of day never changes the count. A shipped date in
/// the future gives a negative number.
pub fn days_ago_shipped(shipped: &str, now: DateTime<Utc>) -> Result<String> {
    let shipped_at = DateTime::parse_from_str(shipped.trim(), SHIPPED_FORMAT).map_err(|e| {
        Error::InvalidTimestamp {
            value: shipped.to_string(),
            source: e,
        }
    })?;

    let shipped_day = shipped_at.with_timezone(&Utc).date_naive();
    let today = now.date_naive();
    Ok(today.signed_duration_since(shipped_day).num_days().to_string())
}

/// Attach the derived fields to a copy of `record`.
///
/// An unparseable `shipped` value yields [`SENTINEL`] for the day count
/// instead of the [`Error::InvalidTimestamp`] that [`days_ago_shipped`] returns.
pub fn add_computed_fields(record: &ShipmentRecord, now: DateTime<Utc>) -> ComputedShipmentRecord {
    let days_ago_shipped = match days_ago_shipped(&record.shipped, now) {
        Ok(days) => days,
        Err(e) => {
            tracing::warn!("Shipment {}: {}", record.number, e);
            SENTINEL.to_string()
        }
    };

    ComputedShipmentRecord {
        full_name: full_name(record),
        days_ago_shipped,
        record: record.clone(),
    }
}
