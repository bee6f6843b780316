//! Volatile [`RecordStore`] backed by a `Vec`.

use super::{RecordStore, StoreError};
use crate::framework::ActorEntity;

/// In-memory record store. Storage order is insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: Vec<T>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> RecordStore<T> for MemoryStore<T> {
    fn all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records.clone())
    }

    fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        Ok(self.records.iter().find(|r| r.id() == id).cloned())
    }

    fn insert(&mut self, record: T) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn update_by_id(&mut self, id: &T::Id, record: T) -> Result<usize, StoreError> {
        let mut replaced = 0;
        for slot in self.records.iter_mut().filter(|r| r.id() == id) {
            *slot = record.clone();
            replaced += 1;
        }
        Ok(replaced)
    }

    fn delete_by_id(&mut self, id: &T::Id) -> Result<usize, StoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        Ok(before - self.records.len())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
