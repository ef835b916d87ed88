use super::RemoteStore;
use crate::config::ImageDbConfig;
use crate::error::Result;
use crate::model::{ImageId, ImageRecord, SubmissionPayload};
use async_trait::async_trait;
use chrono::{Local, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// In-process backend that sleeps to imitate network latency.
#[derive(Debug)]
pub struct SimulatedStore {
    save_latency: Duration,
    delete_latency: Duration,
    last_id: AtomicI64,
}

impl Default for SimulatedStore {
    fn default() -> Self {
        Self::from_config(&ImageDbConfig::default())
    }
}

impl SimulatedStore {
    pub fn new(save_latency: Duration, delete_latency: Duration) -> Self {
        Self {
            save_latency,
            delete_latency,
            last_id: AtomicI64::new(0),
        }
    }

    pub fn from_config(config: &ImageDbConfig) -> Self {
        Self::new(config.save_latency(), config.delete_latency())
    }

    /// No latency at all.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Milliseconds since the epoch, bumped past the last issued id when the clock has not moved.
    fn next_id(&self) -> ImageId {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }
}

#[async_trait]
impl RemoteStore for SimulatedStore {
    async fn save(&self, payload: SubmissionPayload) -> Result<ImageRecord> {
        tokio::time::sleep(self.save_latency).await;
        let id = self.next_id();
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        log::debug!("store assigned id {} to '{}'", id, payload.name);
        Ok(ImageRecord::from_payload(id, timestamp, payload))
    }

    async fn delete_by_id(&self, id: ImageId) -> Result<bool> {
        tokio::time::sleep(self.delete_latency).await;
        log::debug!("store acknowledged delete of {}", id);
        Ok(true)
    }
}
