use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use crate::infra::import::table::{RawCell, RawTable};

fn record_to_raw(record: &StringRecord, width: usize) -> Vec<RawCell> {
    (0..width)
        .map(|col_idx| match record.get(col_idx) {
            Some(value) if !value.trim().is_empty() => RawCell::Text(value.to_string()),
            _ => RawCell::Empty,
        })
        .collect()
}

pub fn read_csv_table(csv_path: &Path) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let width = headers.len();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        rows.push(record_to_raw(&record, width));
    }

    Ok(RawTable {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows,
    })
}
