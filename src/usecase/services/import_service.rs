use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::infra::import::read_spreadsheet;
use crate::infra::import::table::{validate_table, SchemaError};
use crate::usecase::ports::store::{DatasetStore, StoreError, StoredDataset};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Erro ao ler o arquivo: {0}")]
    Parse(String),
    #[error("Colunas obrigatórias não encontradas na planilha: {}", .0.missing.join(", "))]
    Schema(#[from] SchemaError),
    #[error("Erro ao salvar os dados: {0}")]
    Store(#[from] StoreError),
}

pub struct ImportService {
    store: Arc<dyn DatasetStore>,
}

impl ImportService {
    pub fn new(store: Arc<dyn DatasetStore>) -> Self {
        Self { store }
    }

    /// Reads, validates and persists an uploaded spreadsheet.
    ///
    /// The stored dataset is left untouched unless every step succeeds.
    pub fn upload(&self, path: &Path) -> Result<StoredDataset, ImportError> {
        tracing::info!(path = %path.display(), "importing spreadsheet");

        let table = read_spreadsheet(path).map_err(|err| {
            let message = format!("{err:#}");
            tracing::warn!(path = %path.display(), error = %message, "spreadsheet parse failed");
            ImportError::Parse(message)
        })?;

        let dataset = validate_table(&table).map_err(|err| {
            tracing::warn!(missing = ?err.missing, "spreadsheet is missing required columns");
            ImportError::from(err)
        })?;

        let source_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("planilha")
            .to_string();

        let stored = self.store.replace(&dataset, &source_name)?;
        tracing::info!(
            rows = stored.meta.row_count,
            source = %stored.meta.source_name,
            "spreadsheet imported"
        );
        Ok(stored)
    }
}
