//! # Generic Messages
//!
//! The message types exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to the operations of the resource:
///
/// - **List**: Every record, in storage order.
/// - **Get**: A single record by id; absence is `Ok(None)`.
/// - **Create**: Uses [`ActorEntity::Create`] to validate and insert a new record.
/// - **Update**: Uses [`ActorEntity::Update`] to replace an existing record.
/// - **Delete**: Removes a record.
///
/// The enum is generic over `T: ActorEntity`, so a payload for one resource can never be
/// sent to another resource's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
