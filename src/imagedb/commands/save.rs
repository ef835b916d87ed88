use crate::commands::{CmdMessage, CmdResult, Gallery};
use crate::error::Result;
use crate::model::ImageRecord;

/// Appends a record the store has just saved.
pub fn apply(gallery: &mut Gallery, record: ImageRecord) -> Result<CmdResult> {
    gallery.collection.append(record.clone())?;

    let message = CmdMessage::success(format!("Image saved ({}): {}", record.id, record.name));
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_images(vec![record]))
}
