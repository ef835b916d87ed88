use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Store-assigned identifier. Never produced on the client side.
pub type ImageId = i64;

/// A saved image entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: ImageId,
    pub name: String,
    /// Data URL (`data:<media type>;base64,...`), usable directly as an image source.
    pub content: String,
    pub size: u64,
    pub media_type: String,
    pub tags: Vec<String>,
    pub upload_timestamp: String,
}

impl ImageRecord {
    pub fn from_payload(id: ImageId, upload_timestamp: String, payload: SubmissionPayload) -> Self {
        Self {
            id,
            name: payload.name,
            content: payload.content,
            size: payload.size,
            media_type: payload.media_type,
            tags: payload.tags,
            upload_timestamp,
        }
    }
}

/// A staged file awaiting its final name and tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub path: PathBuf,
    /// File name minus its trailing extension; the fallback display name.
    pub name: String,
    pub content: String,
    pub size: u64,
    pub media_type: String,
}

/// What gets sent to the store to create a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub name: String,
    pub content: String,
    pub size: u64,
    pub media_type: String,
    pub tags: Vec<String>,
}
