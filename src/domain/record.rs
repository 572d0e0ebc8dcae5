//! Record contract shared by every stored entity.
//!
//! A record is a typed field set with an optional id. The id is `None` until
//! the record is added to a collection. Partial updates are expressed as a
//! patch type whose fields are all optional; merging a patch overwrites the
//! fields it carries and leaves the rest untouched.

/// Identifier assigned by a collection. Sequences start at 1.
pub type EntryId = u64;

/// A value that can live in a `Collection`.
pub trait Record: Clone + Send + Sync + 'static {
    /// Partial field set used for shallow merges.
    type Patch: Default + Send;

    /// Id of the persisted row, `None` while unsaved.
    fn id(&self) -> Option<EntryId>;

    /// Assign or clear the id.
    fn set_id(&mut self, id: Option<EntryId>);

    /// Shallow merge: fields present in `patch` overwrite, others are kept.
    fn merge(&mut self, patch: Self::Patch);

    /// A patch carrying every field of this record.
    fn to_patch(&self) -> Self::Patch;

    /// Check if the record has been persisted.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
