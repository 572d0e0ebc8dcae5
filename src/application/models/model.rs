//! Shared model behavior.
//!
//! Every entity model wraps a working copy of its record together with the
//! collection that holds the canonical copy. The working copy may diverge
//! from the stored row until it is saved.

use std::sync::Arc;

use crate::domain::{EntryId, Record};
use crate::infrastructure::Collection;
use crate::shared::error::AppError;

/// Behavior common to all entity models
pub trait Model {
    /// Record type held by the model's collection
    type Record: Record;

    /// Collection handle the model is bound to
    fn store(&self) -> &Arc<Collection<Self::Record>>;

    /// Working copy
    fn record(&self) -> &Self::Record;

    /// Mutable working copy
    fn record_mut(&mut self) -> &mut Self::Record;

    /// Persist the working copy.
    ///
    /// Unsaved records are added and receive their id. Saved records are
    /// merged into the stored row; `None` means the row no longer exists.
    fn save(&mut self) -> Option<Self::Record> {
        let store = Arc::clone(self.store());
        match self.record().id() {
            None => {
                let stored = store.add(self.record().clone());
                *self.record_mut() = stored.clone();
                Some(stored)
            }
            Some(id) => store.update(id, self.record().to_patch()),
        }
    }

    /// Delete the stored row and clear the id on the working copy.
    ///
    /// Returns `Ok(false)` and keeps the id when the row was already gone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::State` when the record was never saved.
    fn remove(&mut self) -> Result<bool, AppError> {
        let id = self.record().id().ok_or_else(|| AppError::unsaved("remove"))?;
        if !self.store().remove(id) {
            return Ok(false);
        }
        self.record_mut().set_id(None);
        Ok(true)
    }

    /// Look up a record of this kind by id
    fn by_id(&self, id: EntryId) -> Option<Self::Record> {
        self.store().get_by_id(id)
    }
}
