use thiserror::Error;

use crate::domain::entities::dataset::{
    Dataset, Holding, COLUMN_ENTITY, COLUMN_INVESTMENT_TYPE, COLUMN_VALUE, REQUIRED_COLUMNS,
};

/// A cell as read from the source file, before any coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl RawCell {
    pub fn as_text(&self) -> String {
        match self {
            RawCell::Text(v) => v.clone(),
            RawCell::Number(v) => format_number(*v),
            RawCell::Bool(v) => v.to_string(),
            RawCell::Empty => String::new(),
        }
    }
}

/// Header row plus data rows of the first sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required columns: {}", .missing.join(", "))]
pub struct SchemaError {
    pub missing: Vec<String>,
}

/// Non-numeric amounts become zero instead of rejecting the row.
pub fn coerce_amount(cell: &RawCell) -> f64 {
    let value = match cell {
        RawCell::Number(v) => *v,
        RawCell::Bool(true) => 1.0,
        RawCell::Bool(false) => 0.0,
        RawCell::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        RawCell::Empty => 0.0,
    };
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub fn validate_table(table: &RawTable) -> Result<Dataset, SchemaError> {
    let position = |name: &str| table.headers.iter().position(|h| h.trim() == name);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|name| position(*name).is_none())
        .map(|name| name.to_string())
        .collect();
    let (Some(entity_idx), Some(category_idx), Some(value_idx)) = (
        position(COLUMN_ENTITY),
        position(COLUMN_INVESTMENT_TYPE),
        position(COLUMN_VALUE),
    ) else {
        return Err(SchemaError { missing });
    };

    let holdings = table
        .rows
        .iter()
        .filter(|row| row.iter().any(|cell| *cell != RawCell::Empty))
        .map(|row| {
            let cell = |idx: usize| row.get(idx).cloned().unwrap_or(RawCell::Empty);
            Holding {
                entity: cell(entity_idx).as_text(),
                category: cell(category_idx).as_text(),
                value: coerce_amount(&cell(value_idx)),
            }
        })
        .collect();

    Ok(Dataset::new(holdings))
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
