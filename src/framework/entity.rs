//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource must implement to be managed by
//! the generic [`ResourceActor`](crate::framework::ResourceActor). It names the id type, the
//! create/update DTOs and the error type, and provides the validation hooks the actor calls
//! before anything touches the record store.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::requested_id`] defaults to `None` (the actor always generates the id).
//! - [`ActorEntity::validate_create`] defaults to `Ok(())`.

use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Create Flow
/// 1. [`validate_create`](ActorEntity::validate_create) checks the payload.
/// 2. The actor picks the id: [`requested_id`](ActorEntity::requested_id) if the payload
///    carries one, otherwise the next free id from its `IdGenerator`.
/// 3. [`from_create_params`](ActorEntity::from_create_params) builds the record.
///
/// # Update Flow
/// [`from_update_params`](ActorEntity::from_update_params) builds the full replacement
/// record for the given id. Updates replace, they never merge.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u64` so the actor can mint ids.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to replace an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// The framework carries it boxed inside [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError);
    /// resource clients downcast it back to the concrete type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this record.
    fn id(&self) -> &Self::Id;

    /// The id the caller asked for, if the payload carries one.
    fn requested_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Rejects a create payload before an id is assigned.
    fn validate_create(_params: &Self::Create) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Error to report when a caller-supplied id is already taken.
    fn duplicate_id(id: &Self::Id) -> Self::Error;

    /// Construct the full entity from the assigned id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Construct the replacement entity for `id` from an update payload.
    fn from_update_params(id: Self::Id, update: Self::Update) -> Result<Self, Self::Error>;
}
