//! # Product Actor
//!
//! The product resource: validation rules, error type and the factory that wires a
//! [`ResourceActor`] to a record store.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use product_catalog::product_actor;
//! use product_catalog::model::ProductPayload;
//! use product_catalog::store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client over a volatile store
//!     let (actor, client) = product_actor::new(32, MemoryStore::new());
//!
//!     // Start the actor
//!     tokio::spawn(actor.run());
//!
//!     let lamp = client.create_product(ProductPayload::new("Lamp", 30)).await?;
//!     assert_eq!(client.get_product(lamp.id).await?.name, "Lamp");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;
use crate::store::RecordStore;

/// Creates a new Product actor over `store` and its client.
pub fn new<S: RecordStore<Product>>(
    buffer_size: usize,
    store: S,
) -> (ResourceActor<Product, S>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store);
    (actor, ProductClient::new(generic_client))
}
