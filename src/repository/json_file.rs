use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::SeenRepository;
use crate::domain::models::SeenJobs;
use crate::error::{AppError, Result};

/// Seen state kept as a single pretty-printed JSON document.
///
/// Writes overwrite the file in place; there is no temp-file rename or lock.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<SeenJobs> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl SeenRepository for JsonFileRepository {
    async fn load(&self) -> SeenJobs {
        match self.read().await {
            Ok(seen) => {
                tracing::debug!("Loaded {} seen jobs from {}", seen.len(), self.path.display());
                seen
            }
            Err(AppError::Persistence(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No state file at {}, starting fresh", self.path.display());
                SeenJobs::default()
            }
            Err(e) => {
                tracing::warn!("Error loading data: {}", e);
                SeenJobs::default()
            }
        }
    }

    async fn save(&self, seen: &SeenJobs) -> Result<()> {
        let data = serde_json::to_string_pretty(seen)?;
        tokio::fs::write(&self.path, data).await?;
        tracing::debug!("Saved {} seen jobs to {}", seen.len(), self.path.display());
        Ok(())
    }
}
