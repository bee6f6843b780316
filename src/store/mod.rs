//! # Record Store
//!
//! The durable collection behind a resource actor. A [`RecordStore`] holds whole records,
//! answers lookups by id with a linear scan and never decides policy: updating or
//! deleting an id that matches nothing is a no-op that reports `0` affected records, and
//! inserting a duplicate id is allowed. Uniqueness and "not found" are the caller's
//! business.
//!
//! ## Backends
//!
//! - [`JsonFileStore`] - a JSON document file, rewritten atomically after each mutation.
//! - [`MemoryStore`] - a plain `Vec`, for tests and throwaway runs.
//!
//! Stores are synchronous and take `&mut self` for writes. They are meant to be owned by a
//! single [`ResourceActor`](crate::framework::ResourceActor) task, which is what serialises
//! access to them.

pub mod error;
pub mod json_file;
pub mod memory;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::framework::ActorEntity;

/// A collection of records of type `T`, queryable by id.
pub trait RecordStore<T: ActorEntity>: Send + 'static {
    /// Every record, in storage order.
    fn all(&self) -> Result<Vec<T>, StoreError>;

    /// The first record whose id equals `id`.
    fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, StoreError>;

    /// Appends `record`. Does not check for an existing record with the same id.
    fn insert(&mut self, record: T) -> Result<(), StoreError>;

    /// Replaces every record whose id equals `id` and returns how many were replaced.
    fn update_by_id(&mut self, id: &T::Id, record: T) -> Result<usize, StoreError>;

    /// Removes every record whose id equals `id` and returns how many were removed.
    fn delete_by_id(&mut self, id: &T::Id) -> Result<usize, StoreError>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ActorEntity, S: RecordStore<T> + ?Sized> RecordStore<T> for Box<S> {
    fn all(&self) -> Result<Vec<T>, StoreError> {
        (**self).all()
    }

    fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        (**self).find_by_id(id)
    }

    fn insert(&mut self, record: T) -> Result<(), StoreError> {
        (**self).insert(record)
    }

    fn update_by_id(&mut self, id: &T::Id, record: T) -> Result<usize, StoreError> {
        (**self).update_by_id(id, record)
    }

    fn delete_by_id(&mut self, id: &T::Id) -> Result<usize, StoreError> {
        (**self).delete_by_id(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
