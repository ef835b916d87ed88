//! # Command Layer
//!
//! State transitions on the in-memory [`Gallery`], applied once the remote call they depend on
//! has resolved. Nothing here awaits, logs to a terminal, or talks to a store: commands take the
//! gallery and plain values and return a [`CmdResult`].

use crate::collection::CollectionStore;
use crate::model::ImageRecord;
use crate::preview::PreviewController;

pub mod delete;
pub mod save;
pub mod search;
pub mod view;

/// Everything the coordinator owns besides the store: the collection and the preview selection.
///
/// The preview only ever points at an id present in the collection; [`delete::apply`] keeps it so.
#[derive(Debug, Default)]
pub struct Gallery {
    pub collection: CollectionStore,
    pub preview: PreviewController,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record currently previewed, resolved against the collection.
    pub fn previewed(&self) -> Option<&ImageRecord> {
        self.preview
            .current()
            .and_then(|id| self.collection.get(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_images: Vec<ImageRecord>,
    pub listed_images: Vec<ImageRecord>,
    /// Size of the whole collection at the time of the command
    pub total: usize,
    pub preview: Option<ImageRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_images(mut self, images: Vec<ImageRecord>) -> Self {
        self.affected_images = images;
        self
    }

    pub fn with_listed_images(mut self, images: Vec<ImageRecord>, total: usize) -> Self {
        self.listed_images = images;
        self.total = total;
        self
    }

    pub fn with_preview(mut self, preview: Option<ImageRecord>) -> Self {
        self.preview = preview;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
