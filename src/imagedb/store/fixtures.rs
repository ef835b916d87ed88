//! Test stores.

use super::RemoteStore;
use crate::error::{ImageDbError, Result};
use crate::model::{ImageId, ImageRecord, SubmissionPayload};
use async_trait::async_trait;

/// A backend that rejects every call.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RemoteStore for FailingStore {
    async fn save(&self, payload: SubmissionPayload) -> Result<ImageRecord> {
        Err(ImageDbError::SaveFailed(format!(
            "backend rejected '{}'",
            payload.name
        )))
    }

    async fn delete_by_id(&self, id: ImageId) -> Result<bool> {
        Err(ImageDbError::DeleteFailed(format!(
            "backend rejected delete of {}",
            id
        )))
    }
}

/// A backend that always hands out the same id, for exercising duplicate rejection.
#[derive(Debug)]
pub struct FixedIdStore {
    pub id: ImageId,
}

#[async_trait]
impl RemoteStore for FixedIdStore {
    async fn save(&self, payload: SubmissionPayload) -> Result<ImageRecord> {
        Ok(ImageRecord::from_payload(
            self.id,
            "2026-01-01 00:00:00".to_string(),
            payload,
        ))
    }

    async fn delete_by_id(&self, _id: ImageId) -> Result<bool> {
        Ok(false)
    }
}
