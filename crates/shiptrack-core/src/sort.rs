//! Sorting shipments by any field

use crate::collate::LocaleCollator;
use crate::ledger::ShipmentLedger;
use crate::query::SortDirection;
use crate::record::{ComputedShipmentRecord, ShipmentField};
use std::cmp::Ordering;

impl ShipmentLedger {
    /// All shipments ordered by "days ago shipped", compared as integers,
    /// oldest-last. Values that are not integers sort after the rest.
    pub fn sort_by_days_ago(&self) -> Vec<ComputedShipmentRecord> {
        tracing::debug!("Sorting shipments by days ago (numeric)");
        let mut shipments = self.computed();
        shipments.sort_by(|a, b| compare_numeric(&a.days_ago_shipped, &b.days_ago_shipped));
        shipments
    }

    /// All shipments ordered by "days ago shipped" in either direction.
    ///
    /// Unlike [`sort_by_days_ago`](Self::sort_by_days_ago) this compares the
    /// values as text, so `"10"` sorts before `"9"`.
    pub fn sort_by_days_ago_toggle(
        &self,
        direction: impl Into<SortDirection>,
    ) -> Vec<ComputedShipmentRecord> {
        self.sort_by_field(direction, ShipmentField::DaysAgoShipped)
    }

    /// All shipments ordered by the text of `field`, stable on ties
    pub fn sort_by_field(
        &self,
        direction: impl Into<SortDirection>,
        field: ShipmentField,
    ) -> Vec<ComputedShipmentRecord> {
        let direction = direction.into();
        tracing::debug!("Sorting shipments by {} ({})", field, direction);

        let collator = LocaleCollator::new();
        let mut shipments = self.computed();
        shipments.sort_by(|a, b| {
            direction.apply(a.get(field), b.get(field), |x, y| collator.compare(x, y))
        });
        shipments
    }
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::parser::SAMPLE_DATA;
    use chrono::{TimeZone, Utc};

    fn ledger() -> ShipmentLedger {
        let now = Utc.with_ymd_and_hms(2022, 8, 28, 12, 0, 0).unwrap();
        ShipmentLedger::parse(SAMPLE_DATA).with_clock(FixedClock::new(now))
    }

    fn numbers(shipments: &[ComputedShipmentRecord]) -> Vec<&str> {
        shipments.iter().map(|s| s.number.as_str()).collect()
    }

    #[test]
    fn test_sort_by_days_ago() {
        let sorted = ledger().sort_by_days_ago();
        assert_eq!(
            numbers(&sorted),
            vec!["SH927813", "SH907346", "SH465980", "SH465994", "SH867263", "SH348503"]
        );

        let days: Vec<i64> = sorted
            .iter()
            .map(|s| s.days_ago_shipped.parse().unwrap())
            .collect();
        assert!(days.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_by_days_ago_toggle_descending() {
        let sorted = ledger().sort_by_days_ago_toggle(true);
        assert_eq!(
            numbers(&sorted),
            vec!["SH348503", "SH465980", "SH465994", "SH867263", "SH907346", "SH927813"]
        );
        assert_eq!(sorted[0].days_ago_shipped, "1357");
        assert_eq!(sorted[5].days_ago_shipped, "1352");
    }

    #[test]
    fn test_sort_by_days_ago_toggle_ascending_matches_default() {
        let ledger = ledger();
        assert_eq!(
            ledger.sort_by_days_ago_toggle(SortDirection::Ascending),
            ledger.sort_by_days_ago()
        );
    }

    #[test]
    fn test_sort_by_number_descending() {
        let sorted = ledger().sort_by_field(true, ShipmentField::Number);
        assert_eq!(
            numbers(&sorted),
            vec!["SH927813", "SH907346", "SH867263", "SH465994", "SH465980", "SH348503"]
        );
    }

    #[test]
    fn test_sort_by_number_ascending() {
        let sorted = ledger().sort_by_field(SortDirection::Ascending, ShipmentField::Number);
        assert_eq!(
            numbers(&sorted),
            vec!["SH348503", "SH465980", "SH465994", "SH867263", "SH907346", "SH927813"]
        );
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let sorted = ledger().sort_by_field(false, ShipmentField::FullName);
        assert_eq!(
            numbers(&sorted),
            vec!["SH348503", "SH465980", "SH465994", "SH867263", "SH907346", "SH927813"]
        );

        let sorted = ledger().sort_by_field(true, ShipmentField::LastName);
        assert_eq!(
            numbers(&sorted),
            vec!["SH348503", "SH465980", "SH465994", "SH867263", "SH907346", "SH927813"]
        );
    }

    #[test]
    fn test_sort_by_order_number_puts_sentinel_first() {
        let sorted = ledger().sort_by_field(false, ShipmentField::OrderNumber);
        assert_eq!(sorted[0].order_number, "N/A");
        assert_eq!(sorted[1].order_number, "N/A");
        assert_eq!(sorted[2].order_number, "O234934");
        assert_eq!(sorted[5].order_number, "O936726");
    }

    #[test]
    fn test_accented_names_sort_by_base_letter() {
        let raw = "\
Z1,O1,2022-08-18 10:00:00 -0000,Zoe,Lee,
E1,O1,2022-08-19 10:00:00 -0000,Émile,Ray,
E2,O1,2022-08-19 10:00:00 -0000,eve,Fox,";

        let ledger = ShipmentLedger::parse(raw);
        assert_eq!(
            numbers(&ledger.sort_by_field(false, ShipmentField::FirstName)),
            vec!["E1", "E2", "Z1"]
        );
        assert_eq!(
            numbers(&ledger.sort_by_field(true, ShipmentField::FirstName)),
            vec!["Z1", "E2", "E1"]
        );
    }

    #[test]
    fn test_numeric_and_text_sorts_differ() {
        let raw = "\
TEN,O1,2022-08-18 10:00:00 -0000,Ann,Lee,
NINE,O1,2022-08-19 10:00:00 -0000,Bob,Ray,";
        let now = Utc.with_ymd_and_hms(2022, 8, 28, 12, 0, 0).unwrap();
        let ledger = ShipmentLedger::parse(raw).with_clock(FixedClock::new(now));

        assert_eq!(numbers(&ledger.sort_by_days_ago()), vec!["NINE", "TEN"]);
        assert_eq!(numbers(&ledger.sort_by_days_ago_toggle(false)), vec!["TEN", "NINE"]);
    }

    #[test]
    fn test_unparseable_days_sort_last() {
        let raw = "\
BAD,O1,unknown,Ann,Lee,
OLD,O1,2022-08-01 10:00:00 -0000,Bob,Ray,
NEW,O1,2022-08-27 10:00:00 -0000,Cy,Fox,";
        let now = Utc.with_ymd_and_hms(2022, 8, 28, 12, 0, 0).unwrap();
        let ledger = ShipmentLedger::parse(raw).with_clock(FixedClock::new(now));

        assert_eq!(numbers(&ledger.sort_by_days_ago()), vec!["NEW", "OLD", "BAD"]);
    }

    #[test]
    fn test_sorting_leaves_base_untouched() {
        let ledger = ledger();
        let before = ledger.records().to_vec();
        let first = ledger.sort_by_field(true, ShipmentField::Shipped);
        let second = ledger.sort_by_field(true, ShipmentField::Shipped);
        assert_eq!(first, second);
        assert_eq!(ledger.records(), before.as_slice());
    }
}
