//! # Collection Store
//!
//! The ordered, in-memory list of saved records. Insertion order is display order (newest last).
//! Ids are unique: appending a record whose id is already present is refused.

use crate::error::{ImageDbError, Result};
use crate::model::{ImageId, ImageRecord};

#[derive(Debug, Default, Clone)]
pub struct CollectionStore {
    records: Vec<ImageRecord>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ImageRecord) -> Result<()> {
        if self.contains(record.id) {
            return Err(ImageDbError::DuplicateId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    /// Removes the record with `id`, if any. Absent ids are a no-op.
    pub fn remove_by_id(&mut self, id: ImageId) -> Option<ImageRecord> {
        let position = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(position))
    }

    pub fn get(&self, id: ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.get(id).is_some()
    }

    pub fn all(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
