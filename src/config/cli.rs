use crate::core::Storage;
use crate::utils::error::{LayerError, Result};
use std::path::{Path, PathBuf};

/// Local filesystem storage. Relative paths resolve against `base_path`;
/// absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tokio::fs::read(&full_path)
            .await
            .map_err(|source| LayerError::FileReadError {
                path: full_path.display().to_string(),
                source,
            })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let write_error = |source| LayerError::FileWriteError {
            path: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
        }

        tokio::fs::write(&full_path, data).await.map_err(write_error)?;
        Ok(())
    }
}
