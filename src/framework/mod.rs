//! Generic actor framework for resource management.
//!
//! This module provides the building blocks for a single-writer resource service: one
//! actor task owns a [`RecordStore`](crate::store::RecordStore) and answers CRUD requests
//! sent by any number of cloned clients.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the store and the id sequence
//! - [`ResourceClient`] - Type-safe handle for sending requests to an actor
//! - [`IdGenerator`] - Monotonic id sequence owned by the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use id::IdGenerator;
pub use message::{ResourceRequest, Response};
