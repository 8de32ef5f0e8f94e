pub mod csv;
pub mod table;
pub mod xlsx;

use std::path::Path;

use anyhow::Result;

use self::table::RawTable;

pub const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xls", "ods", "csv"];

/// Reads the first sheet of a spreadsheet (or a CSV file) into a [`RawTable`].
pub fn read_spreadsheet(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if ext == "csv" {
        self::csv::read_csv_table(path)
    } else {
        self::xlsx::read_xlsx_table(path)
    }
}
