//! # Product Catalog
//!
//! > **A small product CRUD service built on a resource-oriented actor.**
//!
//! Products (`id`, `name`, `price`) live in a JSON document file. One actor task owns the
//! file and the id sequence; any number of HTTP handlers talk to it through cloned clients.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why an actor in front of a file?
//!
//! The document file has no locking of its own. Putting it behind a single
//! [`ResourceActor`](framework::ResourceActor) means:
//! - **No lost writes**: requests are applied one at a time, in arrival order.
//! - **No duplicate ids**: the id sequence is only ever advanced by the actor.
//! - **No locks**: the store is plain owned data inside the actor task.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: The Power of `T`
//! `ResourceActor<T: ActorEntity, S: RecordStore<T>>` is written once. [`Product`](model::Product)
//! plugs in its validation rules through [`ActorEntity`](framework::ActorEntity), and the
//! storage backend is any [`RecordStore`](store::RecordStore).
//!
//! ### Mocking: Testing without Pain
//! Client error mapping is tested against `MockClient` instead of a live actor.
//! See the [`framework::mock`] module.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Store failures ([`StoreError`](store::StoreError)) and entity errors travel through
//! [`FrameworkError`](framework::FrameworkError); [`ProductClient`](clients::ProductClient)
//! turns them into [`ProductError`](product_actor::ProductError), which the HTTP layer maps
//! to status codes.
//!
//! ### 2. Observability
//! `tracing` everywhere with structured fields. See the [`lifecycle::tracing`] module.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - the generic actor, client, messages, id generator and mocks.
//! - [`store`] - the [`RecordStore`](store::RecordStore) trait with file and memory backends.
//! - [`model`] and [`product_actor`] - the product resource and its rules.
//! - [`clients`] - [`ProductClient`](clients::ProductClient), the service API.
//! - [`http`] - the `axum` router.
//! - [`config`] and [`lifecycle`] - environment settings, startup and shutdown.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Serve on 127.0.0.1:5000 with ./database.json
//! RUST_LOG=info cargo run
//!
//! curl -X POST localhost:5000/products -H 'content-type: application/json' \
//!      -d '{"name": "Lamp", "price": 30}'
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod store;
