use std::path::PathBuf;

use bytes::Bytes;
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, scraper::ports::DatasetStore};

/// Dataset laid out on the local filesystem as `<root>/<category>/<file>.jpg`.
#[derive(Debug, Clone)]
pub struct FsDatasetStore {
    root: PathBuf,
}

impl FsDatasetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DatasetStore for FsDatasetStore {
    async fn ensure_category_dir(&self, directory_name: String) -> Result<PathBuf, CoreError> {
        let directory = self.root.join(directory_name);
        tokio::fs::create_dir_all(&directory).await.map_err(|e| {
            error!("Failed to create {}: {}", directory.display(), e);
            CoreError::StorageError(e.to_string())
        })?;

        Ok(directory)
    }

    async fn write_image(
        &self,
        directory: PathBuf,
        file_name: String,
        bytes: Bytes,
    ) -> Result<PathBuf, CoreError> {
        let path = directory.join(file_name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| CoreError::StorageError(format!("{}: {}", path.display(), e)))?;

        Ok(path)
    }
}
