use std::path::PathBuf;

use chrono::Local;

use crate::domain::entities::dataset::Dataset;
use crate::infra::sqlite::queries::{load_dataset, replace_dataset};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::store::{DatasetStore, StoreError, StoredDataset};

pub const IMPORTED_AT_FORMAT: &str = "%d/%m/%Y %H:%M";

pub struct SqliteStore {
    pub db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl DatasetStore for SqliteStore {
    fn init(&self) -> Result<(), StoreError> {
        init_db(&self.db_path)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredDataset>, StoreError> {
        if !self.db_path.exists() {
            return Ok(None);
        }
        init_db(&self.db_path)?;
        Ok(load_dataset(&self.db_path)?)
    }

    fn replace(&self, dataset: &Dataset, source_name: &str) -> Result<StoredDataset, StoreError> {
        init_db(&self.db_path)?;
        let imported_at = Local::now().format(IMPORTED_AT_FORMAT).to_string();
        let meta = replace_dataset(&self.db_path, dataset, source_name, &imported_at)?;
        Ok(StoredDataset {
            dataset: dataset.clone(),
            meta,
        })
    }
}
