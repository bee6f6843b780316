//! # Framework Errors
//!
//! Common error types used throughout the actor framework. Entity-specific errors travel
//! boxed inside [`FrameworkError::EntityError`]; record store failures travel as
//! [`FrameworkError::Store`].

use crate::store::StoreError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
