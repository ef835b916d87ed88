//! # Remote Store Client
//!
//! [`RemoteStore`] is the boundary to wherever images are persisted. It owns id and timestamp
//! assignment: a [`SubmissionPayload`] goes in, a complete [`ImageRecord`] comes out.
//!
//! ## Implementations
//!
//! - [`simulated::SimulatedStore`]: in-process stand-in for a network backend
//!   - Fixed per-operation latency (configurable, see [`crate::config::ImageDbConfig`])
//!   - Clock-derived, strictly increasing ids
//!   - Delete always acknowledges, known id or not
//!
//! - `fixtures::FailingStore` (tests and the `test_utils` feature): rejects every call
//!
//! ## Concurrency
//!
//! Methods take `&self`. Calls are independent and may overlap; implementations keep no shared
//! state beyond what an atomic can hold.

use crate::error::Result;
use crate::model::{ImageId, ImageRecord, SubmissionPayload};
use async_trait::async_trait;

pub mod simulated;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Persist a submission, returning it with a fresh id and upload timestamp.
    async fn save(&self, payload: SubmissionPayload) -> Result<ImageRecord>;

    /// Delete a record by id. `Ok(true)` is the backend's acknowledgement.
    async fn delete_by_id(&self, id: ImageId) -> Result<bool>;
}
