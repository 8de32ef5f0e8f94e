use std::path::Path;
use std::sync::Arc;

use crate::usecase::ports::store::{DatasetStore, StoredDataset};
use crate::usecase::services::import_service::ImportService;

/// What the page shows for the current render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Empty,
    Ready(StoredDataset),
    Failed(String),
}

pub struct SessionService {
    store: Arc<dyn DatasetStore>,
    import_service: ImportService,
}

impl SessionService {
    pub fn new(store: Arc<dyn DatasetStore>) -> Self {
        Self {
            import_service: ImportService::new(store.clone()),
            store,
        }
    }

    /// Cold start: shows the last persisted dataset if there is one.
    pub fn start(&self) -> SessionState {
        match self.store.init().and_then(|_| self.store.load()) {
            Ok(Some(stored)) if !stored.dataset.is_empty() => {
                tracing::info!(rows = stored.meta.row_count, "loaded persisted dataset");
                SessionState::Ready(stored)
            }
            Ok(_) => SessionState::Empty,
            Err(err) => {
                tracing::error!(error = %err, "failed to load persisted dataset");
                SessionState::Failed(format!("Erro ao carregar os dados salvos: {err}"))
            }
        }
    }

    /// A failed upload reports the failure instead of falling back to the
    /// previously stored dataset.
    pub fn upload(&self, path: &Path) -> SessionState {
        match self.import_service.upload(path) {
            Ok(stored) if stored.dataset.is_empty() => SessionState::Empty,
            Ok(stored) => SessionState::Ready(stored),
            Err(err) => SessionState::Failed(err.to_string()),
        }
    }
}
