use std::future::Future;
use std::pin::Pin;

use herhealth_core::models::assessment::AssessmentRecord;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Where completed assessments go. Records are insert-only: a new run adds
/// a new record and never updates an earlier one.
pub trait AssessmentSink: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> BoxFuture<'_, Result<(), StorageError>>;

    /// All records for one user, oldest first.
    fn list_for_user<'a>(
        &'a self,
        user_id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<AssessmentRecord>, StorageError>>;
}
