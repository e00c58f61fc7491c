use std::path::{Component, Path, PathBuf};

use tracing::debug;

use herhealth_core::keys;
use herhealth_core::models::assessment::AssessmentRecord;

use crate::error::StorageError;
use crate::sink::{AssessmentSink, BoxFuture};

/// Writes one JSON document per record under `root`, keyed by
/// [`keys::assessment`].
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Keys are relative and made of plain segments only.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let plain = relative.components().all(|c| matches!(c, Component::Normal(_)));
        if !plain || relative.as_os_str().is_empty() {
            return Err(StorageError::UnsafeKey {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(relative))
    }

    /// Read a single record back by key.
    pub async fn get(&self, key: &str) -> Result<AssessmentRecord, StorageError> {
        let body = tokio::fs::read(self.path_for(key)?).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::Io(e)
            }
        })?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl AssessmentSink for FileSink {
    fn insert(&self, record: AssessmentRecord) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            let key = keys::assessment(&record.user_id, record.assessment_type, record.id)?;
            let path = self.path_for(&key)?;
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let body = serde_json::to_vec_pretty(&record)?;
            tokio::fs::write(&path, body).await?;
            debug!(key = %key, "wrote assessment record");
            Ok(())
        })
    }

    fn list_for_user<'a>(
        &'a self,
        user_id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<AssessmentRecord>, StorageError>> {
        Box::pin(async move {
            let user_dir = self.path_for(&keys::user_assessments_prefix(user_id)?)?;
            if !tokio::fs::try_exists(&user_dir).await? {
                return Ok(Vec::new());
            }

            let mut records = Vec::new();
            let mut type_dirs = tokio::fs::read_dir(&user_dir).await?;
            while let Some(type_dir) = type_dirs.next_entry().await? {
                if !type_dir.file_type().await?.is_dir() {
                    continue;
                }
                let mut files = tokio::fs::read_dir(type_dir.path()).await?;
                while let Some(file) = files.next_entry().await? {
                    if file.path().extension().is_some_and(|ext| ext == "json") {
                        let body = tokio::fs::read(file.path()).await?;
                        records.push(serde_json::from_slice::<AssessmentRecord>(&body)?);
                    }
                }
            }

            records.sort_by_key(|r| r.created_at);
            Ok(records)
        })
    }
}
