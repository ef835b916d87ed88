use crate::model::ImageId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageDbError {
    #[error("Could not read {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not an image file: {0}")]
    UnsupportedMediaType(String),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Save failed: {0}")]
    SaveFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Image id {0} is already in the collection")]
    DuplicateId(ImageId),

    #[error("Image not found: {0}")]
    ImageNotFound(ImageId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ImageDbError>;
