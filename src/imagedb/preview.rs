use crate::model::{ImageId, ImageRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Idle,
    Showing(ImageId),
}

/// Tracks the single record shown in detail, if any.
#[derive(Debug, Default)]
pub struct PreviewController {
    state: PreviewState,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, record: &ImageRecord) {
        self.state = PreviewState::Showing(record.id);
    }

    pub fn close(&mut self) {
        self.state = PreviewState::Idle;
    }

    /// Drops the selection if it points at `id`. Returns whether it did.
    pub fn evict(&mut self, id: ImageId) -> bool {
        if self.state == PreviewState::Showing(id) {
            self.state = PreviewState::Idle;
            return true;
        }
        false
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    pub fn current(&self) -> Option<ImageId> {
        match self.state {
            PreviewState::Idle => None,
            PreviewState::Showing(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: ImageId) -> ImageRecord {
        ImageRecord {
            id,
            name: format!("img{}", id),
            content: String::new(),
            size: 0,
            media_type: "image/png".to_string(),
            tags: Vec::new(),
            upload_timestamp: String::new(),
        }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(PreviewController::new().state(), PreviewState::Idle);
    }

    #[test]
    fn open_replaces_selection_and_close_resets() {
        let mut preview = PreviewController::new();
        preview.open(&record(1));
        preview.open(&record(2));
        assert_eq!(preview.state(), PreviewState::Showing(2));

        preview.close();
        assert_eq!(preview.current(), None);
        preview.close();
        assert_eq!(preview.state(), PreviewState::Idle);
    }

    #[test]
    fn evict_only_matching_id() {
        let mut preview = PreviewController::new();
        preview.open(&record(1));

        assert!(!preview.evict(2));
        assert_eq!(preview.current(), Some(1));

        assert!(preview.evict(1));
        assert_eq!(preview.state(), PreviewState::Idle);
    }
}
