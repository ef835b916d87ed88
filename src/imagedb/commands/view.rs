use crate::commands::{CmdResult, Gallery};
use crate::error::{ImageDbError, Result};
use crate::model::ImageId;

pub fn open(gallery: &mut Gallery, id: ImageId) -> Result<CmdResult> {
    let record = gallery
        .collection
        .get(id)
        .cloned()
        .ok_or(ImageDbError::ImageNotFound(id))?;
    gallery.preview.open(&record);
    Ok(CmdResult::default().with_preview(Some(record)))
}

pub fn close(gallery: &mut Gallery) -> CmdResult {
    gallery.preview.close();
    CmdResult::default()
}
