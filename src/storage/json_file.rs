use crate::model::{Snapshot, StorageError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the snapshot as indented UTF-8 JSON, replacing whatever the file held.
    ///
    /// The document is serialized before the file is opened, so a serialization
    /// failure leaves the previous file intact.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(snapshot)?;

        fs::write(&self.path, &json).map_err(|source| StorageError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        info!("Wrote {} bytes to {}", json.len(), self.path.display());
        Ok(())
    }
}
