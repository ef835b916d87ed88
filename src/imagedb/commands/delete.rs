use crate::commands::{CmdMessage, CmdResult, Gallery};
use crate::model::ImageId;

/// Removes an acknowledged delete from the collection, closing the preview if it showed it.
pub fn apply(gallery: &mut Gallery, id: ImageId) -> CmdResult {
    let mut result = CmdResult::default();

    match gallery.collection.remove_by_id(id) {
        Some(record) => {
            if gallery.preview.evict(id) {
                result.add_message(CmdMessage::info(format!("Preview of {} closed", id)));
            }
            result.add_message(CmdMessage::success(format!(
                "Image deleted ({}): {}",
                id, record.name
            )));
            result.affected_images.push(record);
        }
        None => {
            // A second delete of the same id lands here; nothing to undo.
            result.add_message(CmdMessage::warning(format!(
                "Image {} was not in the collection",
                id
            )));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::record;
    use crate::commands::MessageLevel;
    use crate::preview::PreviewState;

    fn gallery_with(ids: &[ImageId]) -> Gallery {
        let mut gallery = Gallery::new();
        for id in ids {
            gallery
                .collection
                .append(record(*id, &format!("img{}", id)))
                .unwrap();
        }
        gallery
    }

    #[test]
    fn deleting_previewed_image_goes_idle() {
        let mut gallery = gallery_with(&[1, 2]);
        let shown = gallery.collection.get(1).cloned().unwrap();
        gallery.preview.open(&shown);

        apply(&mut gallery, 1);
        assert_eq!(gallery.preview.state(), PreviewState::Idle);
        assert!(gallery.previewed().is_none());
    }

    #[test]
    fn deleting_other_image_keeps_preview() {
        let mut gallery = gallery_with(&[1, 2]);
        let shown = gallery.collection.get(1).cloned().unwrap();
        gallery.preview.open(&shown);

        apply(&mut gallery, 2);
        assert_eq!(gallery.preview.state(), PreviewState::Showing(1));
        assert_eq!(gallery.collection.len(), 1);
    }

    #[test]
    fn second_delete_is_a_noop() {
        let mut gallery = gallery_with(&[1, 2]);
        apply(&mut gallery, 1);
        let result = apply(&mut gallery, 1);

        assert!(result.affected_images.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(gallery.collection.len(), 1);
        assert_eq!(gallery.collection.all()[0].id, 2);
    }
}
