//! # API Facade
//!
//! [`ImageDbApi`] is the root coordinator and the single entry point for every UI. It owns the
//! [`Gallery`] (collection plus preview selection) and a store client, and sequences the
//! asynchronous store calls against that state.
//!
//! ## Role and Responsibilities
//!
//! - **Sequencing**: a save or delete first awaits the store, then applies its command to the
//!   gallery exactly once, at resolution.
//! - **Loading state**: [`ImageDbApi::is_loading`] is true while any store call is outstanding.
//!   Each call holds an in-flight guard, so the count drops back whether the call succeeded,
//!   failed, or its future was dropped.
//! - **Failure containment**: store failures are logged and reported as an error message in the
//!   returned [`CmdResult`], never as `Err`. The gallery is left exactly as it was.
//!
//! ## Concurrency
//!
//! All methods take `&self`. The gallery sits in a `RefCell` that is never borrowed across an
//! `.await`, so a save and a delete may be awaited side by side on one thread
//! (`tokio::join!`, or `spawn_local` on a `LocalSet`). Each mutation is applied at the point its
//! call resolves; appends carry fresh ids and removals of absent ids are no-ops, so interleaving
//! cannot corrupt the collection.
//!
//! ## Generic Over RemoteStore
//!
//! - Production: `ImageDbApi<SimulatedStore>`
//! - Testing: `ImageDbApi<FailingStore>` and friends from `store::fixtures`

use crate::commands::{self, CmdMessage, CmdResult, Gallery};
use crate::error::{ImageDbError, Result};
use crate::model::{ImageId, ImageRecord, SubmissionPayload};
use crate::preview::PreviewState;
use crate::store::RemoteStore;
use crate::upload;
use std::cell::{Cell, RefCell};
use std::path::Path;

pub use crate::commands::MessageLevel;

pub struct ImageDbApi<S: RemoteStore> {
    store: S,
    gallery: RefCell<Gallery>,
    pending: Cell<usize>,
}

/// Counts one outstanding store call for as long as it lives.
struct InFlight<'a> {
    pending: &'a Cell<usize>,
}

impl<'a> InFlight<'a> {
    fn start(pending: &'a Cell<usize>) -> Self {
        pending.set(pending.get() + 1);
        Self { pending }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.pending.set(self.pending.get().saturating_sub(1));
    }
}

impl<S: RemoteStore> ImageDbApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            gallery: RefCell::new(Gallery::new()),
            pending: Cell::new(0),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saves a submission and appends the stored record.
    pub async fn add_image(&self, payload: SubmissionPayload) -> CmdResult {
        let name = payload.name.clone();
        let _in_flight = InFlight::start(&self.pending);
        log::debug!("saving '{}' ({} bytes)", name, payload.size);

        let outcome = match self.store.save(payload).await {
            Ok(record) => {
                let mut gallery = self.gallery.borrow_mut();
                commands::save::apply(&mut gallery, record)
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => {
                if let Some(record) = result.affected_images.first() {
                    log::info!("saved image {} '{}'", record.id, record.name);
                }
                result
            }
            Err(e) => {
                log::error!("Error saving image '{}': {}", name, e);
                CmdResult::default().with_message(CmdMessage::error(format!(
                    "Error saving image '{}': {}",
                    name, e
                )))
            }
        }
    }

    /// Stages a file, applies the name/tags and saves it.
    ///
    /// Only staging errors are returned as `Err`; a failed save is reported in the result.
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        override_name: &str,
        raw_tags: &str,
    ) -> Result<CmdResult> {
        let draft = upload::stage_file(path).await?;
        let payload = upload::build_submission(&draft, override_name, raw_tags);
        Ok(self.add_image(payload).await)
    }

    /// Deletes through the store, then drops the record (and any preview of it) locally.
    pub async fn delete_image(&self, id: ImageId) -> CmdResult {
        let _in_flight = InFlight::start(&self.pending);
        log::debug!("deleting image {}", id);

        let acknowledged = match self.store.delete_by_id(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ImageDbError::DeleteFailed(format!(
                "store did not acknowledge delete of {}",
                id
            ))),
            Err(e) => Err(e),
        };

        match acknowledged {
            Ok(()) => {
                let mut gallery = self.gallery.borrow_mut();
                let result = commands::delete::apply(&mut gallery, id);
                if !result.affected_images.is_empty() {
                    log::info!("deleted image {}", id);
                }
                result
            }
            Err(e) => {
                log::error!("Error deleting image {}: {}", id, e);
                CmdResult::default().with_message(CmdMessage::error(format!(
                    "Error deleting image {}: {}",
                    id, e
                )))
            }
        }
    }

    pub fn open_preview(&self, id: ImageId) -> Result<CmdResult> {
        commands::view::open(&mut self.gallery.borrow_mut(), id)
    }

    pub fn close_preview(&self) -> CmdResult {
        commands::view::close(&mut self.gallery.borrow_mut())
    }

    /// The visible subset for `query` (empty query: everything).
    pub fn list_images(&self, query: &str) -> CmdResult {
        commands::search::run(&self.gallery.borrow(), query)
    }

    /// Snapshot of the whole collection in display order.
    pub fn images(&self) -> Vec<ImageRecord> {
        self.gallery.borrow().collection.all().to_vec()
    }

    pub fn preview(&self) -> Option<ImageRecord> {
        self.gallery.borrow().previewed().cloned()
    }

    pub fn preview_state(&self) -> PreviewState {
        self.gallery.borrow().preview.state()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.get() > 0
    }

    pub fn pending_operations(&self) -> usize {
        self.pending.get()
    }
}
