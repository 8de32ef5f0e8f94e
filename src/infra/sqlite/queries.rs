use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::domain::entities::dataset::{Dataset, Holding};
use crate::infra::sqlite::schema::open_connection;
use crate::usecase::ports::store::{DatasetMeta, StoredDataset};

/// Swaps the persisted dataset for `dataset` in a single transaction.
pub fn replace_dataset(
    db_path: &Path,
    dataset: &Dataset,
    source_name: &str,
    imported_at: &str,
) -> Result<DatasetMeta> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start replace transaction")?;

    tx.execute("DELETE FROM holding", [])
        .context("failed to clear previous holdings")?;

    let mut insert_holding = tx
        .prepare(
            "INSERT INTO holding(row_idx, empresa, tipo_investimento, valor)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .context("failed to prepare holding insert")?;

    for (row_idx, holding) in dataset.holdings.iter().enumerate() {
        insert_holding
            .execute(params![
                row_idx as i64,
                holding.entity,
                holding.category,
                holding.value
            ])
            .with_context(|| format!("failed to insert holding row {row_idx}"))?;
    }
    drop(insert_holding);

    let row_count = dataset.len() as i64;
    tx.execute(
        "INSERT INTO dataset_meta(id, source_name, row_count, imported_at)
         VALUES (1, ?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET
            source_name = excluded.source_name,
            row_count = excluded.row_count,
            imported_at = excluded.imported_at",
        params![source_name, row_count, imported_at],
    )
    .context("failed to upsert dataset metadata")?;

    tx.commit()
        .context("failed to commit replace transaction")?;

    Ok(DatasetMeta {
        source_name: source_name.to_string(),
        row_count,
        imported_at: imported_at.to_string(),
    })
}

pub fn load_dataset(db_path: &Path) -> Result<Option<StoredDataset>> {
    let conn = open_connection(db_path)?;

    let meta = conn
        .query_row(
            "SELECT source_name, row_count, imported_at FROM dataset_meta WHERE id = 1",
            [],
            |row| {
                Ok(DatasetMeta {
                    source_name: row.get(0)?,
                    row_count: row.get(1)?,
                    imported_at: row.get(2)?,
                })
            },
        )
        .optional()
        .context("failed to query dataset metadata")?;
    let Some(meta) = meta else {
        return Ok(None);
    };

    let mut stmt = conn
        .prepare(
            "SELECT empresa, tipo_investimento, valor
             FROM holding
             ORDER BY row_idx ASC",
        )
        .context("failed to prepare holdings query")?;
    let holdings = stmt
        .query_map([], |row| {
            let value: Option<f64> = row.get(2)?;
            Ok(Holding {
                entity: row.get(0)?,
                category: row.get(1)?,
                value: value.filter(|v| v.is_finite()).unwrap_or(0.0),
            })
        })
        .context("failed to query holdings")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect holdings")?;

    Ok(Some(StoredDataset {
        dataset: Dataset::new(holdings),
        meta,
    }))
}
