//! Contracts the journal needs from its hosted backend.

use crate::{Attributes, JournalError, Query, RecordFields, RecordId, Result, Stored};

/// Persistence for one kind of record.
///
/// The store owns `id` and `created_at`: it assigns both on create and
/// refuses to change them on update.
pub trait RecordStore<T: RecordFields> {
    /// Lists records matching `query`, in its order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn list(&self, query: &Query) -> Result<Vec<Stored<T>>>;

    /// Fetches one record.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::NotFound`] if no record has this id.
    fn get(&self, id: RecordId) -> Result<Stored<T>>;

    /// Persists a new record and returns it with its assigned metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the record.
    fn create(&mut self, fields: T) -> Result<Stored<T>>;

    /// Merges `changes` into an existing record and returns the result.
    ///
    /// Numeric fields are coerced as in [`RecordFields::coerce_attributes`].
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::NotFound`] for an unknown id,
    /// [`JournalError::ImmutableField`] if `changes` touches `id` or
    /// `created_at`, and [`JournalError::InvalidRecord`] if the merged fields
    /// no longer describe a valid record.
    fn update(&mut self, id: RecordId, changes: Attributes) -> Result<Stored<T>>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::NotFound`] if no record has this id.
    fn delete(&mut self, id: RecordId) -> Result<()>;

    /// Creates a record from an untyped attribute bag, as submitted by a form.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::InvalidRecord`] if the coerced bag does not
    /// describe a record, or any error from [`RecordStore::create`].
    fn create_from_attributes(&mut self, mut attributes: Attributes) -> Result<Stored<T>> {
        T::coerce_attributes(&mut attributes);
        let fields = serde_json::from_value(attributes.into()).map_err(|source| {
            JournalError::InvalidRecord {
                kind: T::KIND,
                source,
            }
        })?;
        self.create(fields)
    }
}

/// Public object storage for review photos.
pub trait BlobStore {
    /// Stores `bytes` under `name` and returns the object's public URL.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::InvalidBlobName`] for an unusable name and
    /// [`JournalError::Conflict`] if the name is taken.
    fn upload(&mut self, name: &str, bytes: &[u8]) -> Result<String>;
}
