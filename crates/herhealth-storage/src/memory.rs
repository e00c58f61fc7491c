use tokio::sync::Mutex;

use herhealth_core::models::assessment::AssessmentRecord;

use crate::error::StorageError;
use crate::sink::{AssessmentSink, BoxFuture};

/// Keeps records in process memory. Used when no data directory is
/// configured, and in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<AssessmentRecord>>,
    reject_with: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that refuses every insert with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            records: Mutex::default(),
            reject_with: Some(reason.into()),
        }
    }

    pub async fn records(&self) -> Vec<AssessmentRecord> {
        self.records.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

impl AssessmentSink for MemorySink {
    fn insert(&self, record: AssessmentRecord) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            if let Some(reason) = &self.reject_with {
                return Err(StorageError::Rejected(reason.clone()));
            }
            self.records.lock().await.push(record);
            Ok(())
        })
    }

    fn list_for_user<'a>(
        &'a self,
        user_id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<AssessmentRecord>, StorageError>> {
        Box::pin(async move {
            let records = self.records.lock().await;
            Ok(records.iter().filter(|r| r.user_id == user_id).cloned().collect())
        })
    }
}
