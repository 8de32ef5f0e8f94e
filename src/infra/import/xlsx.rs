use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::infra::import::table::{RawCell, RawTable};

pub fn cell_to_raw(cell: &Data) -> RawCell {
    match cell {
        Data::String(v) => RawCell::Text(v.to_string()),
        Data::Float(v) => RawCell::Number(*v),
        Data::Int(v) => RawCell::Number(*v as f64),
        Data::Bool(v) => RawCell::Bool(*v),
        Data::DateTime(v) => RawCell::Text(v.to_string()),
        Data::DateTimeIso(v) => RawCell::Text(v.to_string()),
        Data::DurationIso(v) => RawCell::Text(v.to_string()),
        Data::Error(v) => RawCell::Text(format!("{v:?}")),
        Data::Empty => RawCell::Empty,
    }
}

pub fn read_xlsx_table(xlsx_path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open spreadsheet: {}", xlsx_path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("spreadsheet has no worksheets: {}", xlsx_path.display()))?
        .context("failed to read first worksheet")?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|r| r.iter().map(|cell| cell_to_raw(cell).as_text()).collect())
        .unwrap_or_default();
    let rows: Vec<Vec<RawCell>> = rows
        .map(|r| r.iter().map(cell_to_raw).collect())
        .collect();

    Ok(RawTable { headers, rows })
}
