//! Output formatting utilities

use serde::Serialize;
use shiptrack_core::{ComputedShipmentRecord, ShipmentField, ShipmentRecord};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn is_known(s: &str) -> bool {
        matches!(s.to_lowercase().as_str(), "table" | "json" | "csv")
    }
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            _ => Self::Table,
        }
    }
}

/// A shipment that can be printed as labelled columns
pub trait Row {
    fn columns(&self) -> Vec<(ShipmentField, &str)>;
}

impl Row for ShipmentRecord {
    fn columns(&self) -> Vec<(ShipmentField, &str)> {
        ShipmentField::SCHEMA
            .iter()
            .filter_map(|&field| self.get(field).map(|value| (field, value)))
            .collect()
    }
}

impl Row for ComputedShipmentRecord {
    fn columns(&self) -> Vec<(ShipmentField, &str)> {
        ShipmentField::ALL
            .iter()
            .map(|&field| (field, self.get(field)))
            .collect()
    }
}

impl<T: Row + ?Sized> Row for &T {
    fn columns(&self) -> Vec<(ShipmentField, &str)> {
        (**self).columns()
    }
}

/// Format shipments based on format type
pub fn format_rows<T: Row + Serialize>(
    rows: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => format_csv(rows),
        OutputFormat::Table => Ok(format_table(rows)),
    }
}

/// `Shipment #<index>:` followed by `Key: value, ...` for each shipment
fn format_table<T: Row>(rows: &[T]) -> String {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let fields = row
                .columns()
                .into_iter()
                .map(|(field, value)| format!("{}: {}", field, value))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Shipment #{}:\n{}", index, fields)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header from the field display names, then one record per shipment
fn format_csv<T: Row>(rows: &[T]) -> anyhow::Result<String> {
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(first.columns().iter().map(|(field, _)| field.as_str()))?;
    for row in rows {
        writer.write_record(row.columns().iter().map(|(_, value)| *value))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    let out = String::from_utf8(bytes)?;
    Ok(out.trim_end_matches('\n').to_string())
}
