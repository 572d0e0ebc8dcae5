//! Named in-memory collection.
//!
//! Entries are keyed by an id drawn from a per-collection sequence. The
//! sequence only moves forward, so ids are never reused after a removal and
//! iterating the id-ordered map yields insertion order.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::{EntryId, Record};

struct CollectionInner<T> {
    sequence: EntryId,
    entries: BTreeMap<EntryId, T>,
}

/// A named collection of records of one kind.
///
/// All mutations take the write lock, so a read-modify-write done through
/// [`Collection::modify`] is atomic with respect to other writers.
pub struct Collection<T: Record> {
    name: String,
    inner: RwLock<CollectionInner<T>>,
}

impl<T: Record> Collection<T> {
    /// Create an empty collection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: RwLock::new(CollectionInner {
                sequence: 0,
                entries: BTreeMap::new(),
            }),
        }
    }

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries in insertion order
    pub fn get_all(&self) -> Vec<T> {
        self.inner.read().entries.values().cloned().collect()
    }

    /// Get an entry by id
    pub fn get_by_id(&self, id: EntryId) -> Option<T> {
        self.inner.read().entries.get(&id).cloned()
    }

    /// Insert an entry under the next id and return the stored copy.
    ///
    /// Any id already on `entry` is replaced.
    pub fn add(&self, mut entry: T) -> T {
        let mut inner = self.inner.write();
        inner.sequence += 1;
        let id = inner.sequence;
        entry.set_id(Some(id));
        inner.entries.insert(id, entry.clone());
        tracing::debug!(collection = %self.name, id, "Entry added");
        entry
    }

    /// Shallow-merge `patch` into an existing entry.
    ///
    /// Returns the merged entry, or `None` without inserting anything when
    /// the id is unknown.
    pub fn update(&self, id: EntryId, patch: T::Patch) -> Option<T> {
        let mut inner = self.inner.write();
        let entry = inner.entries.get_mut(&id)?;
        entry.merge(patch);
        Some(entry.clone())
    }

    /// Remove an entry, returning whether it existed
    pub fn remove(&self, id: EntryId) -> bool {
        let removed = self.inner.write().entries.remove(&id).is_some();
        if removed {
            tracing::debug!(collection = %self.name, id, "Entry removed");
        }
        removed
    }

    /// Run `f` against the stored entry while holding the write lock.
    ///
    /// Returns `f`'s result together with a copy of the entry after `f` ran,
    /// or `None` when the id is unknown.
    pub fn modify<R>(&self, id: EntryId, f: impl FnOnce(&mut T) -> R) -> Option<(R, T)> {
        let mut inner = self.inner.write();
        let entry = inner.entries.get_mut(&id)?;
        let result = f(entry);
        Some((result, entry.clone()))
    }

    /// First entry matching the predicate
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        self.inner
            .read()
            .entries
            .values()
            .find(|entry| predicate(entry))
            .cloned()
    }

    /// All entries matching the predicate, in insertion order
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        self.inner
            .read()
            .entries
            .values()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect()
    }

    /// Resolve ids to entries, skipping ids with no row and keeping order
    pub fn resolve(&self, ids: &[EntryId]) -> Vec<T> {
        let inner = self.inner.read();
        ids.iter()
            .filter_map(|id| inner.entries.get(id).cloned())
            .collect()
    }

    /// Remove every entry matching the predicate under a single write lock.
    ///
    /// Returns the removed ids in ascending order.
    pub fn remove_where(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<EntryId> {
        let mut inner = self.inner.write();
        let doomed: Vec<EntryId> = inner
            .entries
            .iter()
            .filter(|(_, entry)| predicate(entry))
            .map(|(id, _)| *id)
            .collect();
        for id in &doomed {
            inner.entries.remove(id);
        }
        if !doomed.is_empty() {
            tracing::debug!(collection = %self.name, count = doomed.len(), "Entries removed");
        }
        doomed
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Check if the collection holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last id handed out (0 before the first add)
    pub fn sequence(&self) -> EntryId {
        self.inner.read().sequence
    }
}

impl<T: Record> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("sequence", &inner.sequence)
            .field("len", &inner.entries.len())
            .finish()
    }
}
