//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a resource's
//! [`RecordStore`] and [`IdGenerator`]. It implements the "Server" side of the Actor
//! Model: requests are processed one at a time, so every operation sees the store exactly
//! as the previous one left it.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::id::IdGenerator;
use crate::framework::message::ResourceRequest;
use crate::store::RecordStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store` and `ids`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so the store needs no
/// `Mutex` or `RwLock`. A read-check-write sequence such as "does this id exist? then
/// replace it" cannot interleave with another request.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's `run()` loop in a background task.
/// 3.  **Stop**: Drop every client; the loop drains and returns.
///
/// # Operations
///
/// * **List**: Returns every record in storage order.
/// * **Get**: Looks up the record by id. Absence is `Ok(None)`.
/// * **Create**:
///     1. Calls `T::validate_create`.
///     2. Uses the requested id if the payload has one (rejecting ids already stored),
///        otherwise draws ids from the `IdGenerator` until one is free.
///     3. Calls `T::from_create_params` and inserts the record.
/// * **Update**: Builds the replacement via `T::from_update_params`, then replaces the
///   stored record. `NotFound` if nothing was replaced.
/// * **Delete**: Removes the record. `NotFound` if nothing was removed.
pub struct ResourceActor<T: ActorEntity, S: RecordStore<T>> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: S,
    ids: IdGenerator,
}

impl<T: ActorEntity, S: RecordStore<T>> ResourceActor<T, S> {
    /// Creates a new `ResourceActor` over `store` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - The record store this actor takes exclusive ownership of.
    pub fn new(buffer_size: usize, store: S) -> (Self, ResourceClient<T>) {
        Self::with_id_generator(buffer_size, store, IdGenerator::new())
    }

    /// Like [`new`](Self::new), with an explicit id sequence.
    pub fn with_id_generator(
        buffer_size: usize,
        store: S,
        ids: IdGenerator,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            ids,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "product_catalog::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let result = self.store.all().map_err(FrameworkError::from);
                    match &result {
                        Ok(items) => debug!(entity_type, count = items.len(), "List"),
                        Err(e) => warn!(entity_type, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.store.find_by_id(&id).map_err(FrameworkError::from);
                    match &result {
                        Ok(item) => debug!(entity_type, %id, found = item.is_some(), "Get"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Get failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params);
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(id.clone(), update);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id);
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, params: T::Create) -> Result<T, FrameworkError> {
        T::validate_create(&params).map_err(entity_error)?;

        let id = match T::requested_id(&params) {
            Some(id) => {
                if self.store.find_by_id(&id)?.is_some() {
                    return Err(entity_error(T::duplicate_id(&id)));
                }
                id
            }
            None => self.next_free_id()?,
        };

        let item = T::from_create_params(id, params).map_err(entity_error)?;
        self.store.insert(item.clone())?;
        Ok(item)
    }

    /// Draws ids until one is not already stored. The sequence restarts at every process
    /// start, so ids persisted by an earlier run are skipped here.
    fn next_free_id(&mut self) -> Result<T::Id, FrameworkError> {
        loop {
            let id = T::Id::from(self.ids.next());
            if self.store.find_by_id(&id)?.is_none() {
                return Ok(id);
            }
            warn!(%id, "Generated id already stored, skipping");
        }
    }

    fn update(&mut self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let item = T::from_update_params(id.clone(), update).map_err(entity_error)?;
        match self.store.update_by_id(&id, item.clone())? {
            0 => Err(FrameworkError::NotFound(id.to_string())),
            _ => Ok(item),
        }
    }

    fn delete(&mut self, id: &T::Id) -> Result<(), FrameworkError> {
        match self.store.delete_by_id(id)? {
            0 => Err(FrameworkError::NotFound(id.to_string())),
            _ => Ok(()),
        }
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u64,
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate {
        id: Option<u64>,
        label: String,
    }

    #[derive(Debug)]
    struct TagUpdate {
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    enum TagError {
        #[error("label must not be blank")]
        BlankLabel,
        #[error("tag {0} already exists")]
        Duplicate(u64),
    }

    impl ActorEntity for Tag {
        type Id = u64;
        type Create = TagCreate;
        type Update = TagUpdate;
        type Error = TagError;

        fn id(&self) -> &u64 {
            &self.id
        }

        fn requested_id(params: &TagCreate) -> Option<u64> {
            params.id
        }

        fn validate_create(params: &TagCreate) -> Result<(), TagError> {
            if params.label.trim().is_empty() {
                return Err(TagError::BlankLabel);
            }
            Ok(())
        }

        fn duplicate_id(id: &u64) -> TagError {
            TagError::Duplicate(*id)
        }

        fn from_create_params(id: u64, params: TagCreate) -> Result<Self, TagError> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        fn from_update_params(id: u64, update: TagUpdate) -> Result<Self, TagError> {
            Ok(Self {
                id,
                label: update.label,
            })
        }
    }

    fn create(label: &str) -> TagCreate {
        TagCreate {
            id: None,
            label: label.into(),
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_full_lifecycle() {
        let (actor, client) = ResourceActor::new(10, MemoryStore::<Tag>::new());
        let handle = tokio::spawn(actor.run());

        // 1. Create: ids come from the generator, starting at 0
        let first = client.create(create("red")).await.unwrap();
        let second = client.create(create("blue")).await.unwrap();
        assert_eq!((first.id, second.id), (0, 1));

        // 2. List
        let all = client.list().await.unwrap();
        assert_eq!(all, vec![first.clone(), second.clone()]);

        // 3. Update
        let updated = client
            .update(0, TagUpdate { label: "crimson".into() })
            .await
            .unwrap();
        assert_eq!(updated.label, "crimson");
        assert_eq!(client.get(0).await.unwrap().unwrap().label, "crimson");

        // 4. Delete
        client.delete(0).await.unwrap();
        assert!(client.get(0).await.unwrap().is_none());
        assert_eq!(client.list().await.unwrap(), vec![second]);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_validation_failure_does_not_consume_an_id() {
        let (actor, client) = ResourceActor::new(10, MemoryStore::<Tag>::new());
        tokio::spawn(actor.run());

        let err = client.create(create("  ")).await.unwrap_err();
        match err {
            FrameworkError::EntityError(inner) => {
                assert!(matches!(
                    inner.downcast::<TagError>().map(|e| *e),
                    Ok(TagError::BlankLabel)
                ));
            }
            other => panic!("expected EntityError, got {other:?}"),
        }

        let tag = client.create(create("green")).await.unwrap();
        assert_eq!(tag.id, 0);
    }

    #[tokio::test]
    async fn test_requested_id_is_used_and_duplicates_rejected() {
        let (actor, client) = ResourceActor::new(10, MemoryStore::<Tag>::new());
        tokio::spawn(actor.run());

        let tag = client
            .create(TagCreate {
                id: Some(42),
                label: "answer".into(),
            })
            .await
            .unwrap();
        assert_eq!(tag.id, 42);

        let err = client
            .create(TagCreate {
                id: Some(42),
                label: "again".into(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("tag 42 already exists"), "{err}");
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generated_ids_skip_stored_records() {
        let mut store = MemoryStore::new();
        store
            .insert(Tag {
                id: 0,
                label: "from last run".into(),
            })
            .unwrap();
        store
            .insert(Tag {
                id: 1,
                label: "also from last run".into(),
            })
            .unwrap();

        let (actor, client) = ResourceActor::new(10, store);
        tokio::spawn(actor.run());

        let tag = client.create(create("fresh")).await.unwrap();
        assert_eq!(tag.id, 2);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id_are_not_found() {
        let (actor, client) = ResourceActor::new(10, MemoryStore::<Tag>::new());
        tokio::spawn(actor.run());

        let err = client
            .update(7, TagUpdate { label: "x".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "7"));

        let err = client.delete(7).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "7"));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let (actor, client) = ResourceActor::with_id_generator(
            4,
            MemoryStore::<Tag>::new(),
            IdGenerator::starting_at(100),
        );
        tokio::spawn(actor.run());

        let mut handles = vec![];
        for i in 0..20 {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                client.create(create(&format!("tag-{i}"))).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (100..120).collect::<Vec<u64>>());
    }
}
