use thiserror::Error;

use crate::domain::entities::dataset::Dataset;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Message(String),
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError::Message(format!("{err:#}"))
    }
}

/// Holder of the single "current" dataset.
///
/// `replace` must be all-or-nothing: a reader either sees the previous dataset
/// or the new one, never a mix.
pub trait DatasetStore: Send + Sync {
    fn init(&self) -> Result<(), StoreError>;
    fn load(&self) -> Result<Option<StoredDataset>, StoreError>;
    fn replace(&self, dataset: &Dataset, source_name: &str) -> Result<StoredDataset, StoreError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetMeta {
    pub source_name: String,
    pub row_count: i64,
    pub imported_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredDataset {
    pub dataset: Dataset,
    pub meta: DatasetMeta,
}
