//! # Upload Pipeline
//!
//! Turns a file on disk into a [`Draft`], then into a [`SubmissionPayload`] once the user has
//! settled on a display name and tags.
//!
//! Staging is asynchronous: the read goes through `tokio::fs` and the base64 encoding runs on the
//! blocking pool, so a large file never stalls the session loop. [`UploadForm`] holds the editable
//! state between staging and submission. A failed stage leaves the form untouched so the user can
//! retry with another file.

use crate::error::{ImageDbError, Result};
use crate::media::{image_media_type, to_data_url};
use crate::model::{Draft, SubmissionPayload};
use std::path::{Path, PathBuf};

/// Reads and encodes `path` into a draft.
pub async fn stage_file(path: impl AsRef<Path>) -> Result<Draft> {
    let path = path.as_ref().to_path_buf();
    let media_type = image_media_type(&path)
        .ok_or_else(|| ImageDbError::UnsupportedMediaType(path.display().to_string()))?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| ImageDbError::UnreadableFile {
            path: path.clone(),
            source,
        })?;
    let size = bytes.len() as u64;

    let content = tokio::task::spawn_blocking(move || to_data_url(media_type, &bytes))
        .await
        .map_err(|e| ImageDbError::UnreadableFile {
            path: path.clone(),
            source: std::io::Error::other(e),
        })?;

    log::debug!("staged {} ({} bytes, {})", path.display(), size, media_type);

    Ok(Draft {
        name: extracted_name(&path),
        path,
        content,
        size,
        media_type: media_type.to_string(),
    })
}

/// The file name minus its trailing extension: `photo.jpg` -> `photo`.
pub fn extracted_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Splits on commas, trims, drops empty pieces. Order and duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Applies the user's name (or the draft's extracted name when blank) and tags.
pub fn build_submission(draft: &Draft, override_name: &str, raw_tags: &str) -> SubmissionPayload {
    let name = if override_name.trim().is_empty() {
        draft.name.clone()
    } else {
        override_name.to_string()
    };

    SubmissionPayload {
        name,
        content: draft.content.clone(),
        size: draft.size,
        media_type: draft.media_type.clone(),
        tags: parse_tags(raw_tags),
    }
}

/// Editable upload state: the staged draft plus the name and tag fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    draft: Option<Draft>,
    name: String,
    tags: String,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `path` and, on success, replaces the draft and pre-fills the name field.
    pub async fn select(&mut self, path: impl Into<PathBuf>) -> Result<&Draft> {
        let draft = stage_file(path.into()).await?;
        self.name = draft.name.clone();
        Ok(&*self.draft.insert(draft))
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Builds the payload and resets the form for the next upload.
    pub fn submit(&mut self) -> Result<SubmissionPayload> {
        let draft = self.draft.as_ref().ok_or(ImageDbError::NoFileSelected)?;
        let payload = build_submission(draft, &self.name, &self.tags);
        self.clear();
        Ok(payload)
    }

    pub fn clear(&mut self) {
        self.draft = None;
        self.name.clear();
        self.tags.clear();
    }
}
