//! Comma-delimited shipment parser

use crate::record::{ShipmentRecord, SENTINEL};

/// Built-in dataset used when no input file is given
pub const SAMPLE_DATA: &str = "\
SH348503,O567843,2018-12-10 15:08:58 -0000,Jane,Smith,
SH465980,O936726,2018-12-11 06:08:14 -0000,John,Reynolds,
SH465994,O936726,2018-12-11 06:12:37 -0000,John,Reynolds,
SH867263,O234934,2018-12-11 18:28:51 -0000,Rebecca,Jones,
SH907346,,2018-12-12 21:12:28 -0000,Rebecca,Jones,SH867263
SH927813,,2018-12-15 09:49:35 -0000,Rebecca,Jones,SH907346";

const FIELD_COUNT: usize = 6;

/// Parse raw text into shipment records, one per line, in input order.
///
/// Lines end with `\n` or `\r\n`. Empty fields become [`SENTINEL`]; short
/// lines are padded with it and anything past the sixth field is dropped.
pub fn parse(raw: &str) -> Vec<ShipmentRecord> {
    let records: Vec<ShipmentRecord> = raw
        .lines()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect();

    tracing::debug!("Parsed {} shipment records", records.len());
    records
}

fn parse_line(line_no: usize, line: &str) -> ShipmentRecord {
    let raw_fields: Vec<&str> = line.split(',').collect();
    if raw_fields.len() != FIELD_COUNT {
        tracing::warn!(
            "Line {} has {} fields (expected {}); padding or truncating",
            line_no,
            raw_fields.len(),
            FIELD_COUNT
        );
    }

    let mut fields = raw_fields
        .into_iter()
        .map(normalize)
        .chain(std::iter::repeat_with(|| SENTINEL.to_string()))
        .take(FIELD_COUNT);

    // `take` above guarantees exactly six values
    let mut next = || fields.next().unwrap_or_else(|| SENTINEL.to_string());
    ShipmentRecord {
        number: next(),
        order_number: next(),
        shipped: next(),
        first_name: next(),
        last_name: next(),
        parent_shipment: next(),
    }
}

fn normalize(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        SENTINEL.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample() {
        let records = parse(SAMPLE_DATA);
        assert_eq!(records.len(), 6);

        let first = &records[0];
        assert_eq!(first.number, "SH348503");
        assert_eq!(first.order_number, "O567843");
        assert_eq!(first.shipped, "2018-12-10 15:08:58 -0000");
        assert_eq!(first.first_name, "Jane");
        assert_eq!(first.last_name, "Smith");
        assert_eq!(first.parent_shipment, SENTINEL);

        let child = &records[4];
        assert_eq!(child.number, "SH907346");
        assert_eq!(child.order_number, SENTINEL);
        assert_eq!(child.parent_shipment, "SH867263");
    }

    #[test]
    fn test_preserves_input_order() {
        let numbers: Vec<String> = parse(SAMPLE_DATA).into_iter().map(|r| r.number).collect();
        assert_eq!(
            numbers,
            vec!["SH348503", "SH465980", "SH465994", "SH867263", "SH907346", "SH927813"]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "A1,O1,2020-01-01 00:00:00 -0000,Ann,Lee,\r\nA2,,2020-01-02 00:00:00 -0000,Ann,Lee,A1\r\n";
        let records = parse(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].parent_shipment, SENTINEL);
        assert_eq!(records[1].parent_shipment, "A1");
    }

    #[test]
    fn test_values_are_trimmed() {
        let records = parse(" A1 ,  ,2020-01-01 00:00:00 -0000, Ann ,Lee, ");
        assert_eq!(records[0].number, "A1");
        assert_eq!(records[0].order_number, SENTINEL);
        assert_eq!(records[0].first_name, "Ann");
        assert_eq!(records[0].parent_shipment, SENTINEL);
    }

    #[test]
    fn test_short_line_is_padded() {
        let records = parse("A1,O1");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, "A1");
        assert_eq!(records[0].order_number, "O1");
        assert_eq!(records[0].shipped, SENTINEL);
        assert_eq!(records[0].parent_shipment, SENTINEL);
    }

    #[test]
    fn test_extra_fields_are_dropped() {
        let records = parse("A1,O1,2020-01-01 00:00:00 -0000,Ann,Lee,P1,extra,more");
        assert_eq!(records[0].parent_shipment, "P1");
    }

    #[test]
    fn test_blank_interior_line_is_kept() {
        let records = parse("A1,O1,2020-01-01 00:00:00 -0000,Ann,Lee,\n\nA2,O1,2020-01-01 00:00:00 -0000,Ann,Lee,");
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].number, SENTINEL);
        assert_eq!(records[1].last_name, SENTINEL);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }
}
